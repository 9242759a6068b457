use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use clubdesk_application::ReviewAction;
use clubdesk_core::AppError;
use clubdesk_domain::{ApplicationId, ApplicationListQuery, MembershipApplication};

use crate::dto::{
    AnnotateApplicationRequest, ApplicationListParams, ApplicationPageResponse,
    ApplicationResponse, ConfirmationParams, ConfirmationPromptResponse, ReviewActionRequest,
    ReviewActionResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_applications_handler(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> ApiResult<Json<ApplicationPageResponse>> {
    let query = ApplicationListQuery::try_from(params)?;
    let page = state.review_service.list_applications(&query).await?;

    Ok(Json(ApplicationPageResponse::from(page)))
}

pub async fn confirmation_handler(
    State(state): State<AppState>,
    Path(application_id): Path<i64>,
    Query(params): Query<ConfirmationParams>,
) -> ApiResult<Json<ConfirmationPromptResponse>> {
    let action = ReviewAction::from_str(params.action.as_str())?;
    let prompt = state
        .review_service
        .confirmation(ApplicationId::from_i64(application_id), action)
        .await?;

    Ok(Json(ConfirmationPromptResponse::from(prompt)))
}

pub async fn approve_application_handler(
    State(state): State<AppState>,
    Path(application_id): Path<i64>,
    Json(payload): Json<ReviewActionRequest>,
) -> ApiResult<Json<ReviewActionResponse>> {
    let application_id = ApplicationId::from_i64(application_id);
    let updated = state
        .review_service
        .approve(application_id, payload.confirmed)
        .await?;

    review_response(application_id, ReviewAction::Approve, updated)
}

pub async fn reject_application_handler(
    State(state): State<AppState>,
    Path(application_id): Path<i64>,
    Json(payload): Json<ReviewActionRequest>,
) -> ApiResult<Json<ReviewActionResponse>> {
    let application_id = ApplicationId::from_i64(application_id);
    let updated = state
        .review_service
        .reject(application_id, payload.confirmed)
        .await?;

    review_response(application_id, ReviewAction::Reject, updated)
}

pub async fn annotate_application_handler(
    State(state): State<AppState>,
    Path(application_id): Path<i64>,
    Json(payload): Json<AnnotateApplicationRequest>,
) -> ApiResult<Json<ReviewActionResponse>> {
    let application_id = ApplicationId::from_i64(application_id);
    let updated = state
        .review_service
        .annotate(application_id, payload.note, payload.confirmed)
        .await?;

    review_response(application_id, ReviewAction::Annotate, updated)
}

fn review_response(
    application_id: ApplicationId,
    action: ReviewAction,
    updated: Option<MembershipApplication>,
) -> ApiResult<Json<ReviewActionResponse>> {
    let application = updated.ok_or_else(|| {
        AppError::NotFound(format!("application '{application_id}' does not exist"))
    })?;

    Ok(Json(ReviewActionResponse {
        message: action.success_message().to_owned(),
        application: ApplicationResponse::from(application),
    }))
}
