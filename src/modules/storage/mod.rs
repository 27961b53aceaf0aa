//! Storage module for flat-file persistence
//!
//! Provides a JSON document store on the local filesystem. Each document is
//! read and rewritten as a whole, which suits small, low-volume data sets.

mod json_file;

pub use json_file::{JsonFileStorage, StorageError};
