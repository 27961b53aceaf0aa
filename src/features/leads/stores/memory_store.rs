use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::features::leads::models::Lead;
use crate::features::leads::stores::LeadStore;
use crate::modules::storage::StorageError;

/// Process-local store, nothing survives a restart
#[derive(Default)]
pub struct InMemoryLeadStore {
    leads: RwLock<Vec<Lead>>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of leads
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        Self {
            leads: RwLock::new(leads),
        }
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn load(&self) -> Result<Vec<Lead>, StorageError> {
        Ok(self.leads.read().await.clone())
    }

    async fn save(&self, leads: &[Lead]) -> Result<(), StorageError> {
        *self.leads.write().await = leads.to_vec();
        Ok(())
    }
}
