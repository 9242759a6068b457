mod applications;
mod common;
mod dashboard;

pub use applications::{
    AnnotateApplicationRequest, ApplicationListParams, ApplicationPageResponse,
    ApplicationResponse, ApplicationRowResponse, ConfirmationParams, ConfirmationPromptResponse,
    RegisterApplicationRequest, RegistrationResponse, ReviewActionRequest, ReviewActionResponse,
};
pub use common::HealthResponse;
pub use dashboard::{
    DashboardResponse, DepartmentBreakdownResponse, MonthlyStatResponse, NamedCountResponse,
};
