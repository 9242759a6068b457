//! Public registration workflow.
//!
//! Validates the submitted form, rejects duplicate emails against the
//! stored list and appends a new pending application.

use chrono::Utc;
use tracing::{info, warn};

use clubdesk_core::{AppError, AppResult};
use clubdesk_domain::{ApplicationId, MembershipApplication, RegistrationForm};

use crate::ApplicationLedger;

/// Message shown after a successful submission.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration submitted successfully!";

/// Message shown when the email is already registered.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email has already been registered!";

/// Application service for applicant self-registration.
#[derive(Clone)]
pub struct RegistrationService {
    ledger: ApplicationLedger,
}

impl RegistrationService {
    /// Creates a registration service over the shared ledger.
    #[must_use]
    pub fn new(ledger: ApplicationLedger) -> Self {
        Self { ledger }
    }

    /// Registers a new applicant.
    ///
    /// Emails are compared exactly, so addresses differing only in case are
    /// treated as different applicants.
    pub async fn submit(&self, form: RegistrationForm) -> AppResult<MembershipApplication> {
        let registration = form.validate()?;

        let application = self
            .ledger
            .mutate(move |applications| {
                let email = registration.email().as_str();
                if applications
                    .iter()
                    .any(|existing| existing.email() == email)
                {
                    warn!(email, "registration rejected for duplicate email");
                    return Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_owned()));
                }

                let now = Utc::now();
                let id = ApplicationId::next_after(
                    now,
                    applications.iter().map(MembershipApplication::id),
                );
                let application = MembershipApplication::register(id, registration, now);
                applications.push(application.clone());

                Ok(application)
            })
            .await?;

        info!(application_id = %application.id(), "application registered");
        Ok(application)
    }
}
