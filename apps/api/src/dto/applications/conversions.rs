use std::str::FromStr;

use clubdesk_application::ConfirmationPrompt;
use clubdesk_core::{AppError, AppResult};
use clubdesk_domain::{
    ApplicationListQuery, ApplicationPage, ApplicationRow, ApplicationSort, ApplicationStatus,
    Department, MembershipApplication, PageRequest, RegistrationForm,
};

use super::types::{
    ApplicationListParams, ApplicationPageResponse, ApplicationResponse, ApplicationRowResponse,
    ConfirmationPromptResponse, RegisterApplicationRequest,
};

impl From<RegisterApplicationRequest> for RegistrationForm {
    fn from(value: RegisterApplicationRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            department: value.department,
            reason: value.reason,
        }
    }
}

impl TryFrom<ApplicationListParams> for ApplicationListQuery {
    type Error = AppError;

    fn try_from(value: ApplicationListParams) -> AppResult<Self> {
        let status = non_blank(value.status)
            .map(|status| ApplicationStatus::from_str(status.as_str()))
            .transpose()?;
        let department = non_blank(value.department)
            .map(|department| Department::parse_known(department.as_str()))
            .transpose()?;
        let sort = match non_blank(value.sort).as_deref() {
            None | Some("stored") => ApplicationSort::Stored,
            Some("name") | Some("name_ascending") => ApplicationSort::NameAscending,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "sort must be either 'stored' or 'name', got '{other}'"
                )));
            }
        };

        Ok(Self {
            keyword: non_blank(value.keyword),
            status,
            department,
            sort,
            page: PageRequest::new(value.page, value.page_size)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<MembershipApplication> for ApplicationResponse {
    fn from(value: MembershipApplication) -> Self {
        Self {
            id: value.id().as_i64(),
            name: value.name().to_owned(),
            email: value.email().to_owned(),
            department: value.department().code().to_owned(),
            department_label: value.department().label().to_owned(),
            team: value.team().map(ToOwned::to_owned),
            reason: value.reason().to_owned(),
            status: value.status().as_str().to_owned(),
            rejection_note: value.rejection_note().map(ToOwned::to_owned),
            logs: value.logs().to_vec(),
            created_at: value.created_at().to_owned(),
        }
    }
}

impl From<ApplicationRow> for ApplicationRowResponse {
    fn from(value: ApplicationRow) -> Self {
        Self {
            index: value.index,
            application: ApplicationResponse::from(value.application),
        }
    }
}

impl From<ApplicationPage> for ApplicationPageResponse {
    fn from(value: ApplicationPage) -> Self {
        Self {
            total: value.total,
            page: value.page,
            page_size: value.page_size,
            rows: value
                .rows
                .into_iter()
                .map(ApplicationRowResponse::from)
                .collect(),
        }
    }
}

impl From<ConfirmationPrompt> for ConfirmationPromptResponse {
    fn from(value: ConfirmationPrompt) -> Self {
        Self {
            application_id: value.application_id.as_i64(),
            action: value.action.as_str().to_owned(),
            title: value.title,
        }
    }
}
