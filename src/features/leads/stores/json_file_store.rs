use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::features::leads::models::Lead;
use crate::features::leads::stores::LeadStore;
use crate::modules::storage::{JsonFileStorage, StorageError};

/// Leads kept as a single JSON array on disk
pub struct JsonFileLeadStore {
    storage: JsonFileStorage,
}

impl JsonFileLeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            storage: JsonFileStorage::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}

#[async_trait]
impl LeadStore for JsonFileLeadStore {
    async fn load(&self) -> Result<Vec<Lead>, StorageError> {
        Ok(self.storage.read::<Vec<Lead>>().await?.unwrap_or_default())
    }

    async fn save(&self, leads: &[Lead]) -> Result<(), StorageError> {
        self.storage.write(leads).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_lead;
    use chrono::Utc;

    fn lead(id: &str) -> Lead {
        Lead {
            user_agent: Some("test-agent".to_string()),
            ..sample_lead(id, "9876543210", Utc::now())
        }
    }

    #[tokio::test]
    async fn test_load_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLeadStore::new(dir.path().join("data").join("farmer-leads.json"));

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLeadStore::new(dir.path().join("data").join("farmer-leads.json"));

        let leads = vec![lead("lead_a"), lead("lead_b"), lead("lead_c")];
        store.save(&leads).await.unwrap();

        let loaded = store.load().await.unwrap();
        let ids: Vec<&str> = loaded.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["lead_a", "lead_b", "lead_c"]);
        assert_eq!(loaded, leads);
    }

    #[tokio::test]
    async fn test_file_is_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileLeadStore::new(dir.path().join("farmer-leads.json"));
        store.save(&[lead("lead_a")]).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "lead_a");
        assert_eq!(value[0]["userAgent"], "test-agent");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("farmer-leads.json");
        std::fs::write(&path, "[{\"id\": ").unwrap();

        let store = JsonFileLeadStore::new(&path);
        assert!(store.load().await.is_err());
    }
}
