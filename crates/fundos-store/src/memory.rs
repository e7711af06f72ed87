//! In-memory blob storage for tests and ephemeral sessions.
//!
//! Uses `RwLock::unwrap()`: a poisoned lock means another thread panicked
//! while holding it, which is not recoverable here.

use async_trait::async_trait;
use fundos_core::error::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::StateStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load_blob(&self, name: &str) -> Result<Option<String>> {
        Ok(self.blobs.read().unwrap().get(name).cloned())
    }

    async fn save_blob(&self, name: &str, contents: &str) -> Result<()> {
        self.blobs.write().unwrap().insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryStateStore::new();
        assert_eq!(store.load_blob("user-pos-v1").await.unwrap(), None);

        store.save_blob("user-pos-v1", "null").await.unwrap();
        store.save_blob("user-pos-v1", r#"{"lat":-12.1,"lon":-77.0}"#).await.unwrap();

        let loaded = store.load_blob("user-pos-v1").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"lat":-12.1,"lon":-77.0}"#));
        assert_eq!(store.load_blob("filters-v1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStateStore::new();
        let other = store.clone();
        store.save_blob("a", "1").await.unwrap();
        assert_eq!(other.load_blob("a").await.unwrap().as_deref(), Some("1"));
    }
}
