//! Key-value store trait.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::Result;

/// Persistent key-value store holding JSON values.
///
/// Implementations must make a single `set_item` atomic with respect to
/// `get_item` on the same key: readers observe either the previous value or
/// the new one, never a partial write.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored under the key.
    async fn get_item(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: Value) -> Result<()>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<()> {
        (**self).set_item(key, value).await
    }
}

/// Check that a key is usable by every backend.
///
/// Keys are non-empty, made of ASCII letters, digits, `.`, `_` and `-`, and do
/// not start with a dot.
pub fn validate_key(key: &str) -> Result<()> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');

    if key.is_empty() || key.starts_with('.') || !key.chars().all(allowed) {
        return Err(crate::StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
