use clubdesk_application::{DashboardService, RegistrationService, ReviewService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registration_service: RegistrationService,
    pub review_service: ReviewService,
    pub dashboard_service: DashboardService,
}
