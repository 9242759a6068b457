//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod dashboard;
mod listing;
mod membership;

pub use dashboard::{
    DashboardStatistics, DepartmentBreakdown, MonthlyStat, NamedCount, StatusTally,
    UNKNOWN_MONTH, month_name, percentage,
};
pub use listing::{
    ApplicationListQuery, ApplicationPage, ApplicationRow, ApplicationSort, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS, PageRequest, matches_keyword, search_applications,
};
pub use membership::{
    ApplicationId, ApplicationStatus, Department, MembershipApplication, RegistrationForm,
    UNASSIGNED_TEAM, ValidRegistration,
};
