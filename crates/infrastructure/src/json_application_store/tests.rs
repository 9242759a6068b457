use std::sync::Arc;

use chrono::{TimeZone, Utc};
use clubdesk_application::ApplicationStore;
use clubdesk_core::AppError;
use clubdesk_domain::{
    ApplicationId, ApplicationStatus, Department, MembershipApplication, RegistrationForm,
};

use super::{APPLICATIONS_STORAGE_KEY, JsonApplicationStore};
use crate::{InMemoryKeyValueStorage, KeyValueStorage};

fn application(id: i64, email: &str) -> MembershipApplication {
    let registration = RegistrationForm {
        name: Some("Applicant".to_owned()),
        email: Some(email.to_owned()),
        department: Some("media".to_owned()),
        reason: Some("photos".to_owned()),
    }
    .validate()
    .unwrap_or_else(|_| unreachable!());
    let created_at = Utc
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| unreachable!());

    MembershipApplication::register(ApplicationId::from_i64(id), registration, created_at)
}

#[tokio::test]
async fn missing_key_loads_empty_list() {
    let store = JsonApplicationStore::new(Arc::new(InMemoryKeyValueStorage::new()));

    let loaded = store.load_applications().await;
    assert_eq!(loaded.map(|loaded| loaded.len()).ok(), Some(0));
}

#[tokio::test]
async fn replace_writes_whole_list_under_one_key() {
    let storage = Arc::new(InMemoryKeyValueStorage::new());
    let store = JsonApplicationStore::new(storage.clone());
    let applications = vec![application(1, "a@example.com"), application(2, "b@example.com")];

    assert!(store.replace_applications(&applications).await.is_ok());

    let raw = storage
        .get_item(APPLICATIONS_STORAGE_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap_or_default();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["email"], "a@example.com");
    assert_eq!(value[0]["status"], "Pending");

    let loaded = store.load_applications().await;
    assert_eq!(loaded.ok(), Some(applications));
}

#[tokio::test]
async fn reads_records_written_by_older_clients() {
    let storage = Arc::new(InMemoryKeyValueStorage::new());
    let raw = r#"[{"id":1718000000000,"name":"Vy","email":"vy@example.com","department":"design","reason":"drawing","status":"Rejected","rejectionNote":"full","logs":["Admin rejected"]}]"#;
    assert!(storage.set_item(APPLICATIONS_STORAGE_KEY, raw).await.is_ok());

    let loaded = JsonApplicationStore::new(storage)
        .load_applications()
        .await
        .unwrap_or_default();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].status(), ApplicationStatus::Rejected);
    assert_eq!(loaded[0].department(), &Department::Design);
    assert_eq!(loaded[0].rejection_note(), Some("full"));
    assert_eq!(loaded[0].created_at(), "");
}

#[tokio::test]
async fn malformed_value_is_an_internal_error() {
    let storage = Arc::new(InMemoryKeyValueStorage::new());
    assert!(
        storage
            .set_item(APPLICATIONS_STORAGE_KEY, "{not json")
            .await
            .is_ok()
    );

    let loaded = JsonApplicationStore::new(storage).load_applications().await;
    assert!(matches!(loaded, Err(AppError::Internal(_))));
}
