//! Lead persistence.
//!
//! Stores deal in whole snapshots: `load` returns every lead in insertion
//! order and `save` replaces the stored collection.

mod json_file_store;
mod memory_store;

use async_trait::async_trait;

use crate::features::leads::models::Lead;
use crate::modules::storage::StorageError;

pub use json_file_store::JsonFileLeadStore;
pub use memory_store::InMemoryLeadStore;

#[async_trait]
pub trait LeadStore: Send + Sync {
    /// All stored leads in insertion order, empty if nothing was stored yet
    async fn load(&self) -> Result<Vec<Lead>, StorageError>;

    /// Replace the stored collection with `leads`
    async fn save(&self, leads: &[Lead]) -> Result<(), StorageError>;
}
