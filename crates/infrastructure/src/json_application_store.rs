use std::sync::Arc;

use async_trait::async_trait;
use clubdesk_application::ApplicationStore;
use clubdesk_core::{AppError, AppResult};
use clubdesk_domain::MembershipApplication;
use tracing::debug;

use crate::KeyValueStorage;

/// Storage key holding the serialized application list.
pub const APPLICATIONS_STORAGE_KEY: &str = "applications";

/// Application store serializing the whole list as one JSON array.
///
/// The stored value carries no schema version; changing the record shape
/// breaks previously stored data.
#[derive(Clone)]
pub struct JsonApplicationStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl JsonApplicationStore {
    /// Creates a store using the default `applications` key.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, APPLICATIONS_STORAGE_KEY)
    }

    /// Creates a store using a custom key.
    #[must_use]
    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

#[async_trait]
impl ApplicationStore for JsonApplicationStore {
    async fn load_applications(&self) -> AppResult<Vec<MembershipApplication>> {
        let Some(raw) = self.storage.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };

        let applications: Vec<MembershipApplication> = serde_json::from_str(&raw)
            .map_err(|error| {
                AppError::Internal(format!("stored applications are malformed: {error}"))
            })?;
        debug!(count = applications.len(), "applications loaded");

        Ok(applications)
    }

    async fn replace_applications(&self, applications: &[MembershipApplication]) -> AppResult<()> {
        let raw = serde_json::to_string(applications).map_err(|error| {
            AppError::Internal(format!("failed to serialize applications: {error}"))
        })?;

        self.storage.set_item(&self.key, &raw).await
    }
}

#[cfg(test)]
mod tests;
