use std::sync::Arc;

use clubdesk_application::{
    ApplicationLedger, DashboardService, RegistrationService, ReviewService,
};
use clubdesk_core::AppResult;
use clubdesk_infrastructure::{
    DirectoryKeyValueStorage, InMemoryKeyValueStorage, JsonApplicationStore, KeyValueStorage,
};
use tracing::warn;

use crate::api_config::{ApiConfig, StorageBackendConfig};
use crate::state::AppState;

pub async fn build_app_state(config: &ApiConfig) -> AppResult<AppState> {
    let storage = build_key_value_storage(&config.storage).await?;
    Ok(app_state_from_storage(storage))
}

async fn build_key_value_storage(
    storage: &StorageBackendConfig,
) -> AppResult<Arc<dyn KeyValueStorage>> {
    match storage {
        StorageBackendConfig::Directory(root) => {
            Ok(Arc::new(DirectoryKeyValueStorage::open(root).await?))
        }
        StorageBackendConfig::Memory => {
            warn!("in-memory storage selected; applications are lost on restart");
            Ok(Arc::new(InMemoryKeyValueStorage::new()))
        }
    }
}

pub fn app_state_from_storage(storage: Arc<dyn KeyValueStorage>) -> AppState {
    let ledger = ApplicationLedger::new(Arc::new(JsonApplicationStore::new(storage)));

    AppState {
        registration_service: RegistrationService::new(ledger.clone()),
        review_service: ReviewService::new(ledger.clone()),
        dashboard_service: DashboardService::new(ledger),
    }
}
