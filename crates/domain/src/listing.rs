use clubdesk_core::{AppError, AppResult};

use crate::{ApplicationStatus, Department, MembershipApplication};

/// Page sizes offered by the admin table.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns whether the keyword occurs in the name, email or department code.
///
/// Matching is a case-insensitive substring test. An empty keyword matches
/// every application.
#[must_use]
pub fn matches_keyword(application: &MembershipApplication, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    if keyword.is_empty() {
        return true;
    }

    [
        application.name(),
        application.email(),
        application.department().code(),
    ]
    .into_iter()
    .any(|value| value.to_lowercase().contains(keyword.as_str()))
}

/// Filters applications by keyword without touching stored data.
#[must_use]
pub fn search_applications(
    applications: &[MembershipApplication],
    keyword: &str,
) -> Vec<MembershipApplication> {
    applications
        .iter()
        .filter(|application| matches_keyword(application, keyword))
        .cloned()
        .collect()
}

/// Sort orders supported by the admin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationSort {
    /// Keep storage order.
    Stored,
    /// Applicant name ascending, ignoring case.
    NameAscending,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a page request; pages below 1 clamp to the first page.
    pub fn new(page: Option<usize>, page_size: Option<usize>) -> AppResult<Self> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(AppError::Validation(format!(
                "page_size must be one of {PAGE_SIZE_OPTIONS:?}, got {page_size}"
            )));
        }

        Ok(Self {
            page: page.unwrap_or(1).max(1),
            page_size,
        })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of rows per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Admin table query over the stored application list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationListQuery {
    /// Search keyword.
    pub keyword: Option<String>,
    /// Exact status filter.
    pub status: Option<ApplicationStatus>,
    /// Exact department filter.
    pub department: Option<Department>,
    /// Row order.
    pub sort: ApplicationSort,
    /// Pagination window.
    pub page: PageRequest,
}

impl Default for ApplicationListQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            status: None,
            department: None,
            sort: ApplicationSort::Stored,
            page: PageRequest::default(),
        }
    }
}

/// One table row with its running index across pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    /// 1-based position across the whole filtered list.
    pub index: usize,
    /// Application shown in the row.
    pub application: MembershipApplication,
}

/// One page of filtered applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPage {
    /// Number of applications matching the filters.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows on this page.
    pub rows: Vec<ApplicationRow>,
}

impl ApplicationListQuery {
    /// Applies filters, ordering and pagination to the full list.
    #[must_use]
    pub fn apply(&self, applications: &[MembershipApplication]) -> ApplicationPage {
        let keyword = self.keyword.as_deref().unwrap_or_default();
        let mut matching: Vec<&MembershipApplication> = applications
            .iter()
            .filter(|application| matches_keyword(application, keyword))
            .filter(|application| {
                self.status
                    .is_none_or(|status| application.status() == status)
            })
            .filter(|application| {
                self.department
                    .as_ref()
                    .is_none_or(|department| application.department() == department)
            })
            .collect();

        if self.sort == ApplicationSort::NameAscending {
            matching.sort_by_cached_key(|application| application.name().to_lowercase());
        }

        let offset = self.page.offset();
        let rows = matching
            .iter()
            .enumerate()
            .skip(offset)
            .take(self.page.page_size())
            .map(|(position, application)| ApplicationRow {
                index: position + 1,
                application: (*application).clone(),
            })
            .collect();

        ApplicationPage {
            total: matching.len(),
            page: self.page.page(),
            page_size: self.page.page_size(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{ApplicationId, RegistrationForm};

    fn application(id: i64, name: &str, email: &str, department: &str) -> MembershipApplication {
        let registration = RegistrationForm {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            department: Some(department.to_owned()),
            reason: Some("reason".to_owned()),
        }
        .validate()
        .unwrap_or_else(|_| unreachable!());
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| unreachable!());

        MembershipApplication::register(ApplicationId::from_i64(id), registration, created_at)
    }

    fn sample() -> Vec<MembershipApplication> {
        vec![
            application(1, "Thanh", "thanh@example.com", "dev"),
            application(2, "Bao", "bao@example.com", "media"),
            application(3, "hoa", "HOA@EXAMPLE.COM", "design"),
            application(4, "Khoa", "khoa@club.org", "media"),
        ]
    }

    #[test]
    fn search_matches_name_email_and_department_ignoring_case() {
        let applications = sample();

        let names: Vec<String> = search_applications(&applications, "AN")
            .iter()
            .map(|application| application.name().to_owned())
            .collect();
        assert_eq!(names, vec!["Thanh".to_owned()]);

        let by_department = search_applications(&applications, "Media");
        assert_eq!(by_department.len(), 2);

        let by_email = search_applications(&applications, "hoa@example");
        assert_eq!(by_email.len(), 1);
    }

    #[test]
    fn empty_keyword_keeps_everything() {
        assert_eq!(search_applications(&sample(), "").len(), 4);
    }

    #[test]
    fn page_size_must_be_offered() {
        assert!(PageRequest::new(Some(1), Some(7)).is_err());
        let clamped = PageRequest::new(Some(0), Some(5));
        assert_eq!(clamped.map(|page| page.page()).unwrap_or_default(), 1);
    }

    #[test]
    fn list_query_filters_sorts_and_paginates() {
        let query = ApplicationListQuery {
            keyword: None,
            status: Some(ApplicationStatus::Pending),
            department: None,
            sort: ApplicationSort::NameAscending,
            page: PageRequest::new(Some(2), Some(5)).unwrap_or_default(),
        };
        let page = query.apply(&sample());
        assert_eq!(page.total, 4);
        assert!(page.rows.is_empty());

        let first_page = ApplicationListQuery {
            page: PageRequest::new(Some(1), Some(5)).unwrap_or_default(),
            ..query
        }
        .apply(&sample());
        let names: Vec<&str> = first_page
            .rows
            .iter()
            .map(|row| row.application.name())
            .collect();
        assert_eq!(names, vec!["Bao", "hoa", "Khoa", "Thanh"]);
        assert_eq!(first_page.rows[3].index, 4);
    }

    #[test]
    fn department_filter_is_exact() {
        let query = ApplicationListQuery {
            department: Some(Department::Media),
            ..ApplicationListQuery::default()
        };
        let page = query.apply(&sample());
        assert_eq!(page.total, 2);
        assert_eq!(page.rows[0].index, 1);
        assert_eq!(page.rows[1].application.id(), ApplicationId::from_i64(4));
    }
}
