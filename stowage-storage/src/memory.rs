//! In-memory storage backend.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{KeyValueStore, Result, validate_key};

/// Process-local store, lost when the process exits.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        validate_key(key)?;
        let value = self.items.read().await.get(key).cloned();
        debug!(key, found = value.is_some(), "Memory store read");
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        validate_key(key)?;
        self.items.write().await.insert(key.to_string(), value);
        debug!(key, "Memory store write");
        Ok(())
    }
}
