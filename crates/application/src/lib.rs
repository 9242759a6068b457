//! Application services and ports.

#![forbid(unsafe_code)]

mod application_store;
mod dashboard_service;
mod registration_service;
mod review_service;

#[cfg(test)]
mod test_support;

pub use application_store::{ApplicationLedger, ApplicationStore};
pub use dashboard_service::DashboardService;
pub use registration_service::{
    DUPLICATE_EMAIL_MESSAGE, REGISTRATION_SUCCESS_MESSAGE, RegistrationService,
};
pub use review_service::{ConfirmationPrompt, ReviewAction, ReviewService};
