//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the resources the features persist to.

pub mod storage;
