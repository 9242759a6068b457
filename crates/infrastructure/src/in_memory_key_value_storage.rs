use std::collections::HashMap;

use async_trait::async_trait;
use clubdesk_core::AppResult;
use tokio::sync::RwLock;

use crate::KeyValueStorage;

/// In-memory key-value storage, lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    /// Creates an empty storage profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
