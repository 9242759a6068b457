use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming registration form.
///
/// Missing and blank fields are reported per field rather than rejected by
/// the JSON extractor.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/register-application-request.ts"
)]
pub struct RegisterApplicationRequest {
    #[serde(default)]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub email: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub department: Option<String>,
    #[serde(default)]
    #[ts(optional)]
    pub reason: Option<String>,
}

/// Incoming approve/reject payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/review-action-request.ts"
)]
pub struct ReviewActionRequest {
    #[serde(default)]
    pub confirmed: bool,
}

/// Incoming rejection note payload.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/annotate-application-request.ts"
)]
pub struct AnnotateApplicationRequest {
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub note: String,
}

/// Admin table query string.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Confirmation prompt query string.
#[derive(Debug, Deserialize)]
pub struct ConfirmationParams {
    pub action: String,
}

/// API representation of a stored application.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/application-response.ts"
)]
pub struct ApplicationResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub department_label: String,
    pub team: Option<String>,
    pub reason: String,
    #[ts(type = "\"Pending\" | \"Approved\" | \"Rejected\"")]
    pub status: String,
    pub rejection_note: Option<String>,
    pub logs: Vec<String>,
    pub created_at: String,
}

/// One numbered admin table row.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/application-row-response.ts"
)]
pub struct ApplicationRowResponse {
    pub index: usize,
    pub application: ApplicationResponse,
}

/// One page of the admin table.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/application-page-response.ts"
)]
pub struct ApplicationPageResponse {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub rows: Vec<ApplicationRowResponse>,
}

/// Result of a successful registration.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/registration-response.ts"
)]
pub struct RegistrationResponse {
    pub message: String,
    pub application: ApplicationResponse,
}

/// Result of an applied review action.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/review-action-response.ts"
)]
pub struct ReviewActionResponse {
    pub message: String,
    pub application: ApplicationResponse,
}

/// Prompt shown before a review action.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/confirmation-prompt-response.ts"
)]
pub struct ConfirmationPromptResponse {
    #[ts(type = "number")]
    pub application_id: i64,
    #[ts(type = "\"approve\" | \"reject\" | \"annotate\"")]
    pub action: String,
    pub title: String,
}
