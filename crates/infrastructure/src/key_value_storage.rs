use async_trait::async_trait;

use clubdesk_core::AppResult;

/// String key-value storage in the shape of a browser's local storage.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
}
