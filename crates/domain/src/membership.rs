//! Membership application records and their lifecycle.
//!
//! One [`MembershipApplication`] exists per registrant. Records are created
//! by registration and afterwards only change through admin review: status
//! transitions, the rejection note and the append-only audit log.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use clubdesk_core::{AppError, AppResult, FieldViolation, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Team name used for approved applicants without a team.
pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// Unique identifier of a membership application.
///
/// Values are milliseconds since the Unix epoch at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(i64);

impl ApplicationId {
    /// Creates an identifier from a raw value.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Derives a time-based identifier that does not collide with `existing`.
    ///
    /// Falls back to `max(existing) + 1` when the clock value is not ahead of
    /// every stored identifier.
    #[must_use]
    pub fn next_after(
        now: DateTime<Utc>,
        existing: impl IntoIterator<Item = ApplicationId>,
    ) -> Self {
        let candidate = now.timestamp_millis();
        let highest = existing.into_iter().map(|id| id.0).max();

        match highest {
            Some(highest) if highest >= candidate => Self(highest.saturating_add(1)),
            _ => Self(candidate),
        }
    }
}

impl Display for ApplicationId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Organizational track an applicant wants to join.
///
/// Registration only accepts the three known codes. Stored values outside
/// that set are kept verbatim in [`Department::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    /// Design track.
    Design,
    /// Development track.
    Dev,
    /// Media track.
    Media,
    /// Unrecognized stored department code.
    Other(String),
}

impl Department {
    /// Returns the known departments in display order.
    #[must_use]
    pub fn known() -> [Self; 3] {
        [Self::Design, Self::Dev, Self::Media]
    }

    /// Returns the stored department code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Design => "design",
            Self::Dev => "dev",
            Self::Media => "media",
            Self::Other(code) => code.as_str(),
        }
    }

    /// Returns the display label, or the raw code for unknown departments.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Design => "Design",
            Self::Dev => "Development",
            Self::Media => "Media",
            Self::Other(code) => code.as_str(),
        }
    }

    /// Returns whether this is one of the known departments.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Parses a known department code, rejecting anything else.
    pub fn parse_known(value: &str) -> AppResult<Self> {
        match Self::from(value.to_owned()) {
            Self::Other(code) => Err(AppError::Validation(format!(
                "unknown department '{code}'"
            ))),
            department => Ok(department),
        }
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        match value.as_str() {
            "design" => Self::Design,
            "dev" => Self::Dev,
            "media" => Self::Media,
            _ => Self::Other(value),
        }
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        match value {
            Department::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl Display for Department {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ApplicationStatus {
    /// Awaiting review.
    Pending,
    /// Accepted by an admin.
    Approved,
    /// Declined by an admin.
    Rejected,
}

impl ApplicationStatus {
    /// Returns every status in display order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Rejected]
    }

    /// Returns the stored status value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown application status '{value}'"
            ))),
        }
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Raw registration form input as submitted by an applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// Full name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Department code.
    pub department: Option<String>,
    /// Free-text motivation.
    pub reason: Option<String>,
}

/// Registration input that passed the required-field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    name: NonEmptyString,
    email: NonEmptyString,
    department: Department,
    reason: NonEmptyString,
}

impl ValidRegistration {
    /// Returns the applicant name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the applicant email.
    #[must_use]
    pub fn email(&self) -> &NonEmptyString {
        &self.email
    }

    /// Returns the chosen department.
    #[must_use]
    pub fn department(&self) -> &Department {
        &self.department
    }

    /// Returns the registration reason.
    #[must_use]
    pub fn reason(&self) -> &NonEmptyString {
        &self.reason
    }
}

impl RegistrationForm {
    /// Checks every required field and collects all violations at once.
    pub fn validate(self) -> AppResult<ValidRegistration> {
        let mut violations = Vec::new();

        let name = required(self.name, "name", "Please enter your full name", &mut violations);
        let email = required(self.email, "email", "Please enter your email", &mut violations);
        let department = required(
            self.department,
            "department",
            "Please choose a department",
            &mut violations,
        )
        .and_then(|value| match Department::parse_known(value.as_str().trim()) {
            Ok(department) => Some(department),
            Err(_) => {
                violations.push(FieldViolation::new(
                    "department",
                    "Please choose a department",
                ));
                None
            }
        });
        let reason = required(self.reason, "reason", "Please enter a reason", &mut violations);

        match (name, email, department, reason) {
            (Some(name), Some(email), Some(department), Some(reason)) if violations.is_empty() => {
                Ok(ValidRegistration {
                    name,
                    email,
                    department,
                    reason,
                })
            }
            _ => Err(AppError::InvalidFields(violations)),
        }
    }
}

fn required(
    value: Option<String>,
    field: &str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<NonEmptyString> {
    match value.map(NonEmptyString::new) {
        Some(Ok(value)) => Some(value),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}

/// One membership application as persisted in the storage profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipApplication {
    id: ApplicationId,
    name: String,
    email: String,
    department: Department,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    team: Option<String>,
    reason: String,
    status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejection_note: Option<String>,
    #[serde(default)]
    logs: Vec<String>,
    #[serde(default)]
    created_at: String,
}

impl MembershipApplication {
    /// Creates a pending application from validated registration input.
    #[must_use]
    pub fn register(
        id: ApplicationId,
        registration: ValidRegistration,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: registration.name.into(),
            email: registration.email.into(),
            department: registration.department,
            team: None,
            reason: registration.reason.into(),
            status: ApplicationStatus::Pending,
            rejection_note: None,
            logs: Vec::new(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the applicant name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the applicant email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the chosen department.
    #[must_use]
    pub fn department(&self) -> &Department {
        &self.department
    }

    /// Returns the assigned team, if any.
    #[must_use]
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    /// Returns the registration reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }

    /// Returns the review status.
    #[must_use]
    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns the rejection note, if one was recorded.
    #[must_use]
    pub fn rejection_note(&self) -> Option<&str> {
        self.rejection_note.as_deref()
    }

    /// Returns the audit log entries in insertion order.
    #[must_use]
    pub fn logs(&self) -> &[String] {
        self.logs.as_slice()
    }

    /// Returns the raw creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> &str {
        self.created_at.as_str()
    }

    /// Marks the application as approved.
    pub fn approve(&mut self) {
        self.status = ApplicationStatus::Approved;
    }

    /// Marks the application as rejected.
    pub fn reject(&mut self) {
        self.status = ApplicationStatus::Rejected;
    }

    /// Records the rejection reason and appends one audit entry.
    ///
    /// Only rejected applications accept a note.
    pub fn annotate_rejection(
        &mut self,
        note: impl Into<String>,
        at: DateTime<Utc>,
    ) -> AppResult<()> {
        if self.status != ApplicationStatus::Rejected {
            return Err(AppError::Conflict(
                "rejection notes can only be added to rejected applications".to_owned(),
            ));
        }

        let note = note.into();
        self.logs.push(format!(
            "Admin rejected on {} with reason: {note}",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        self.rejection_note = Some(note);

        Ok(())
    }

    /// Places an approved applicant into a team.
    pub fn assign_team(&mut self, team: impl Into<String>) -> AppResult<()> {
        if self.status != ApplicationStatus::Approved {
            return Err(AppError::Conflict(
                "teams can only be assigned to approved applications".to_owned(),
            ));
        }

        self.team = Some(NonEmptyString::new(team)?.into());
        Ok(())
    }
}
