//! Admin review workflow: approve, reject and rejection notes.
//!
//! Every mutation must be confirmed by the caller first. The service hands
//! out the confirmation prompt and refuses unconfirmed requests without
//! touching storage.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Utc;
use tracing::info;

use clubdesk_core::{AppError, AppResult};
use clubdesk_domain::{
    ApplicationId, ApplicationListQuery, ApplicationPage, MembershipApplication,
    search_applications,
};

use crate::ApplicationLedger;

/// Review actions an admin can take on one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewAction {
    /// Set status to approved.
    Approve,
    /// Set status to rejected.
    Reject,
    /// Record a rejection note.
    Annotate,
}

impl ReviewAction {
    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Annotate => "annotate",
        }
    }

    /// Returns the confirmation prompt title for an applicant.
    #[must_use]
    pub fn prompt_title(&self, applicant_name: &str) -> String {
        match self {
            Self::Approve => format!("Approve applicant {applicant_name}?"),
            Self::Reject => format!("Reject applicant {applicant_name}?"),
            Self::Annotate => format!("Rejection note - {applicant_name}"),
        }
    }

    /// Returns the message shown once the action is applied.
    #[must_use]
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Approve => "Approved!",
            Self::Reject => "Rejected!",
            Self::Annotate => "Note saved!",
        }
    }
}

impl FromStr for ReviewAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "annotate" => Ok(Self::Annotate),
            _ => Err(AppError::Validation(format!(
                "unknown review action '{value}'"
            ))),
        }
    }
}

impl Display for ReviewAction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Prompt the admin must accept before a review action is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Application the prompt refers to.
    pub application_id: ApplicationId,
    /// Action awaiting confirmation.
    pub action: ReviewAction,
    /// Prompt title.
    pub title: String,
}

/// Application service for the admin review workflow.
#[derive(Clone)]
pub struct ReviewService {
    ledger: ApplicationLedger,
}

impl ReviewService {
    /// Creates a review service over the shared ledger.
    #[must_use]
    pub fn new(ledger: ApplicationLedger) -> Self {
        Self { ledger }
    }

    /// Returns every stored application whose name, email or department
    /// contains `keyword`.
    pub async fn search(&self, keyword: &str) -> AppResult<Vec<MembershipApplication>> {
        let applications = self.ledger.load().await?;
        Ok(search_applications(&applications, keyword))
    }

    /// Runs an admin table query over the stored list.
    pub async fn list_applications(
        &self,
        query: &ApplicationListQuery,
    ) -> AppResult<ApplicationPage> {
        let applications = self.ledger.load().await?;
        Ok(query.apply(&applications))
    }

    /// Builds the confirmation prompt for an action.
    pub async fn confirmation(
        &self,
        application_id: ApplicationId,
        action: ReviewAction,
    ) -> AppResult<ConfirmationPrompt> {
        let applications = self.ledger.load().await?;
        let application = applications
            .iter()
            .find(|application| application.id() == application_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("application '{application_id}' does not exist"))
            })?;

        Ok(ConfirmationPrompt {
            application_id,
            action,
            title: action.prompt_title(application.name()),
        })
    }

    /// Approves an application. Returns `None` when the id is unknown.
    pub async fn approve(
        &self,
        application_id: ApplicationId,
        confirmed: bool,
    ) -> AppResult<Option<MembershipApplication>> {
        ensure_confirmed(confirmed)?;
        let updated = self
            .update_one(application_id, |application| {
                application.approve();
                Ok(())
            })
            .await?;

        if updated.is_some() {
            info!(%application_id, "application approved");
        }

        Ok(updated)
    }

    /// Rejects an application. Returns `None` when the id is unknown.
    pub async fn reject(
        &self,
        application_id: ApplicationId,
        confirmed: bool,
    ) -> AppResult<Option<MembershipApplication>> {
        ensure_confirmed(confirmed)?;
        let updated = self
            .update_one(application_id, |application| {
                application.reject();
                Ok(())
            })
            .await?;

        if updated.is_some() {
            info!(%application_id, "application rejected");
        }

        Ok(updated)
    }

    /// Stores a rejection note and appends it to the audit log.
    ///
    /// The application must currently be rejected.
    pub async fn annotate(
        &self,
        application_id: ApplicationId,
        note: String,
        confirmed: bool,
    ) -> AppResult<Option<MembershipApplication>> {
        ensure_confirmed(confirmed)?;
        let updated = self
            .update_one(application_id, move |application| {
                application.annotate_rejection(note, Utc::now())
            })
            .await?;

        if updated.is_some() {
            info!(%application_id, "rejection note recorded");
        }

        Ok(updated)
    }

    /// Places an approved applicant into a team.
    pub async fn assign_team(
        &self,
        application_id: ApplicationId,
        team: String,
    ) -> AppResult<Option<MembershipApplication>> {
        self.update_one(application_id, move |application| {
            application.assign_team(team)
        })
        .await
    }

    async fn update_one<F>(
        &self,
        application_id: ApplicationId,
        change: F,
    ) -> AppResult<Option<MembershipApplication>>
    where
        F: FnOnce(&mut MembershipApplication) -> AppResult<()> + Send,
    {
        self.ledger
            .mutate(move |applications| {
                let Some(application) = applications
                    .iter_mut()
                    .find(|application| application.id() == application_id)
                else {
                    return Ok(None);
                };

                change(application)?;
                Ok(Some(application.clone()))
            })
            .await
    }
}

fn ensure_confirmed(confirmed: bool) -> AppResult<()> {
    if confirmed {
        return Ok(());
    }

    Err(AppError::Validation("action must be confirmed".to_owned()))
}
