use axum::Json;
use axum::extract::State;

use crate::dto::DashboardResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardResponse>> {
    let statistics = state.dashboard_service.statistics().await?;
    Ok(Json(DashboardResponse::from(statistics)))
}
