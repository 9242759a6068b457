mod conversions;
mod types;

pub use types::{
    AnnotateApplicationRequest, ApplicationListParams, ApplicationPageResponse,
    ApplicationResponse, ApplicationRowResponse, ConfirmationParams, ConfirmationPromptResponse,
    RegisterApplicationRequest, RegistrationResponse, ReviewActionRequest, ReviewActionResponse,
};
