mod cors;

use axum::Router;
use axum::routing::{get, post};
use clubdesk_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let application_routes = Router::new()
        .route(
            "/api/applications",
            get(handlers::applications::list_applications_handler),
        )
        .route(
            "/api/applications/{application_id}/confirmation",
            get(handlers::applications::confirmation_handler),
        )
        .route(
            "/api/applications/{application_id}/approve",
            post(handlers::applications::approve_application_handler),
        )
        .route(
            "/api/applications/{application_id}/reject",
            post(handlers::applications::reject_application_handler),
        )
        .route(
            "/api/applications/{application_id}/note",
            post(handlers::applications::annotate_application_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/api/registrations",
            post(handlers::registrations::submit_registration_handler),
        )
        .route(
            "/api/dashboard",
            get(handlers::dashboard::dashboard_handler),
        )
        .merge(application_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
