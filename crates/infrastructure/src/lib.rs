//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod directory_key_value_storage;
mod in_memory_key_value_storage;
mod json_application_store;
mod key_value_storage;

pub use directory_key_value_storage::DirectoryKeyValueStorage;
pub use in_memory_key_value_storage::InMemoryKeyValueStorage;
pub use json_application_store::{APPLICATIONS_STORAGE_KEY, JsonApplicationStore};
pub use key_value_storage::KeyValueStorage;
