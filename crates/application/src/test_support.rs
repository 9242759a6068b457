use async_trait::async_trait;
use tokio::sync::Mutex;

use clubdesk_core::AppResult;
use clubdesk_domain::{MembershipApplication, RegistrationForm};

use crate::ApplicationStore;

#[derive(Default)]
pub(crate) struct FakeApplicationStore {
    applications: Mutex<Vec<MembershipApplication>>,
    writes: Mutex<usize>,
}

impl FakeApplicationStore {
    pub(crate) async fn snapshot(&self) -> Vec<MembershipApplication> {
        self.applications.lock().await.clone()
    }

    pub(crate) async fn write_count(&self) -> usize {
        *self.writes.lock().await
    }
}

#[async_trait]
impl ApplicationStore for FakeApplicationStore {
    async fn load_applications(&self) -> AppResult<Vec<MembershipApplication>> {
        let applications = self.applications.lock().await.clone();
        // Gives other tasks a chance to run between load and replace.
        tokio::task::yield_now().await;
        Ok(applications)
    }

    async fn replace_applications(&self, applications: &[MembershipApplication]) -> AppResult<()> {
        *self.applications.lock().await = applications.to_vec();
        *self.writes.lock().await += 1;
        Ok(())
    }
}

pub(crate) fn form(name: &str, email: &str, department: &str) -> RegistrationForm {
    RegistrationForm {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        department: Some(department.to_owned()),
        reason: Some("I want to help run events".to_owned()),
    }
}
