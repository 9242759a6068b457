use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use clubdesk_core::AppResult;
use clubdesk_domain::MembershipApplication;

/// Storage port holding the complete application list as one value.
///
/// There are no partial updates: every write replaces the whole list.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Loads every stored application. A missing value reads as empty.
    async fn load_applications(&self) -> AppResult<Vec<MembershipApplication>>;

    /// Replaces the stored list with `applications`.
    async fn replace_applications(&self, applications: &[MembershipApplication]) -> AppResult<()>;
}

/// Single-writer access to an [`ApplicationStore`].
///
/// Mutations run as load, modify, replace under one lock shared by every
/// clone, so concurrent requests never interleave their read-modify-write
/// cycles. Reads do not take the lock.
#[derive(Clone)]
pub struct ApplicationLedger {
    store: Arc<dyn ApplicationStore>,
    write_lock: Arc<Mutex<()>>,
}

impl ApplicationLedger {
    /// Wraps a store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Loads the full application list.
    pub async fn load(&self) -> AppResult<Vec<MembershipApplication>> {
        self.store.load_applications().await
    }

    /// Applies `change` to the full list and persists the result.
    ///
    /// Nothing is written when `change` returns an error.
    pub async fn mutate<T, F>(&self, change: F) -> AppResult<T>
    where
        F: FnOnce(&mut Vec<MembershipApplication>) -> AppResult<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut applications = self.store.load_applications().await?;
        let outcome = change(&mut applications)?;
        self.store.replace_applications(&applications).await?;
        debug!(count = applications.len(), "application list replaced");

        Ok(outcome)
    }
}
