use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use clubdesk_application::REGISTRATION_SUCCESS_MESSAGE;

use crate::dto::{ApplicationResponse, RegisterApplicationRequest, RegistrationResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn submit_registration_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterApplicationRequest>,
) -> ApiResult<(StatusCode, Json<RegistrationResponse>)> {
    let application = state.registration_service.submit(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            message: REGISTRATION_SUCCESS_MESSAGE.to_owned(),
            application: ApplicationResponse::from(application),
        }),
    ))
}
