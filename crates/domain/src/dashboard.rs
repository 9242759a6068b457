//! Statistics derived from the full application list.
//!
//! Everything here is recomputed from scratch on every call; nothing is
//! cached or persisted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{ApplicationStatus, Department, MembershipApplication, UNASSIGNED_TEAM};

/// Month bucket for applications whose creation time cannot be read.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Named count used by pie-style charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCount {
    /// Display name of the slice.
    pub name: String,
    /// Number of applications, or a percentage for status shares.
    pub value: usize,
}

/// Per-status tallies of one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    /// Applications in the bucket.
    pub total: usize,
    /// Approved applications in the bucket.
    pub approved: usize,
    /// Rejected applications in the bucket.
    pub rejected: usize,
    /// Pending applications in the bucket.
    pub pending: usize,
}

impl StatusTally {
    fn record(&mut self, status: ApplicationStatus) {
        self.total += 1;
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Approved => self.approved += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
        }
    }

    fn count(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Pending => self.pending,
            ApplicationStatus::Approved => self.approved,
            ApplicationStatus::Rejected => self.rejected,
        }
    }
}

/// Applications created in one calendar month name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStat {
    /// English month name.
    pub name: String,
    /// Status tallies for the month.
    pub tally: StatusTally,
}

/// Status breakdown restricted to one known department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentBreakdown {
    /// Department display label.
    pub department: String,
    /// Status tallies for the department.
    pub tally: StatusTally,
}

/// Summary shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStatistics {
    /// Number of stored applications.
    pub total_applications: usize,
    /// Pending applications.
    pub pending: usize,
    /// Approved applications.
    pub approved: usize,
    /// Rejected applications.
    pub rejected: usize,
    /// Rounded share of each status, in percent.
    pub status_percentages: Vec<NamedCount>,
    /// Applications per department, first appearance order.
    pub department_stats: Vec<NamedCount>,
    /// Approved applications per team, first appearance order.
    pub team_stats: Vec<NamedCount>,
    /// Applications per creation month, first appearance order.
    pub monthly_stats: Vec<MonthlyStat>,
    /// Status breakdown for each known department.
    pub department_status_breakdown: Vec<DepartmentBreakdown>,
}

impl DashboardStatistics {
    /// Aggregates the full application list.
    #[must_use]
    pub fn from_applications(applications: &[MembershipApplication]) -> Self {
        let mut overall = StatusTally::default();
        let mut departments: Vec<(String, usize)> = Vec::new();
        let mut teams: Vec<(String, usize)> = Vec::new();
        let mut months: Vec<MonthlyStat> = Vec::new();

        for application in applications {
            overall.record(application.status());
            increment(&mut departments, application.department().code());

            if application.status() == ApplicationStatus::Approved {
                let team = application.team().unwrap_or(UNASSIGNED_TEAM);
                increment(&mut teams, capitalize_first(team).as_str());
            }

            let month = month_name(application.created_at());
            match months.iter_mut().find(|stat| stat.name == month) {
                Some(stat) => stat.tally.record(application.status()),
                None => {
                    let mut tally = StatusTally::default();
                    tally.record(application.status());
                    months.push(MonthlyStat { name: month, tally });
                }
            }
        }

        let status_percentages = ApplicationStatus::all()
            .into_iter()
            .map(|status| NamedCount {
                name: status.as_str().to_owned(),
                value: percentage(overall.count(status), overall.total),
            })
            .collect();

        let department_status_breakdown = Department::known()
            .into_iter()
            .map(|department| {
                let mut tally = StatusTally::default();
                applications
                    .iter()
                    .filter(|application| application.department() == &department)
                    .for_each(|application| tally.record(application.status()));

                DepartmentBreakdown {
                    department: department.label().to_owned(),
                    tally,
                }
            })
            .collect();

        Self {
            total_applications: overall.total,
            pending: overall.pending,
            approved: overall.approved,
            rejected: overall.rejected,
            status_percentages,
            department_stats: departments
                .into_iter()
                .map(|(code, value)| NamedCount {
                    name: Department::from(code).label().to_owned(),
                    value,
                })
                .collect(),
            team_stats: into_named_counts(teams),
            monthly_stats: months,
            department_status_breakdown,
        }
    }
}

/// Returns `round(count / total * 100)` with halves rounded up, or 0 when
/// `total` is 0.
#[must_use]
pub fn percentage(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }

    (count * 200 + total) / (total * 2)
}

/// Resolves the English month name of a stored creation timestamp.
#[must_use]
pub fn month_name(created_at: &str) -> String {
    let created_at = created_at.trim();
    let date = DateTime::parse_from_rfc3339(created_at)
        .map(|value| value.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|value| value.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(created_at, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B").to_string(),
        Err(_) => UNKNOWN_MONTH.to_owned(),
    }
}

fn increment(counts: &mut Vec<(String, usize)>, name: &str) {
    match counts.iter_mut().find(|(existing, _)| existing == name) {
        Some((_, count)) => *count += 1,
        None => counts.push((name.to_owned(), 1)),
    }
}

fn into_named_counts(counts: Vec<(String, usize)>) -> Vec<NamedCount> {
    counts
        .into_iter()
        .map(|(name, value)| NamedCount { name, value })
        .collect()
}

fn capitalize_first(value: &str) -> String {
    let mut characters = value.chars();
    match characters.next() {
        Some(first) => first.to_uppercase().chain(characters).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn stored(
        status: &str,
        department: &str,
        created_at: &str,
        team: Option<&str>,
    ) -> MembershipApplication {
        let mut value = json!({
            "id": 1,
            "name": "Applicant",
            "email": "applicant@example.com",
            "department": department,
            "reason": "reason",
            "status": status,
            "createdAt": created_at,
        });
        if let Some(team) = team {
            value["team"] = json!(team);
        }

        serde_json::from_value(value).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn two_application_example() {
        let applications = vec![
            stored("Pending", "dev", "2024-01-10T08:00:00.000Z", None),
            stored("Approved", "design", "2024-01-11T08:00:00.000Z", None),
        ];

        let statistics = DashboardStatistics::from_applications(&applications);

        assert_eq!(statistics.total_applications, 2);
        assert_eq!(statistics.pending, 1);
        assert_eq!(statistics.approved, 1);
        assert_eq!(statistics.rejected, 0);
        assert_eq!(
            statistics.department_stats,
            vec![
                NamedCount {
                    name: "Development".to_owned(),
                    value: 1
                },
                NamedCount {
                    name: "Design".to_owned(),
                    value: 1
                },
            ]
        );
        assert_eq!(
            statistics.team_stats,
            vec![NamedCount {
                name: "Unassigned".to_owned(),
                value: 1
            }]
        );
    }

    #[test]
    fn empty_list_yields_zero_percentages() {
        let statistics = DashboardStatistics::from_applications(&[]);

        assert_eq!(statistics.total_applications, 0);
        assert!(statistics.status_percentages.iter().all(|share| share.value == 0));
        assert!(statistics.monthly_stats.is_empty());
        assert_eq!(statistics.department_status_breakdown.len(), 3);
    }

    #[test]
    fn unknown_department_codes_pass_through() {
        let applications = vec![stored("Pending", "photography", "", None)];
        let statistics = DashboardStatistics::from_applications(&applications);

        assert_eq!(statistics.department_stats[0].name, "photography");
        assert!(
            statistics
                .department_status_breakdown
                .iter()
                .all(|breakdown| breakdown.tally.total == 0)
        );
    }

    #[test]
    fn departments_group_by_stored_code() {
        let applications = vec![
            stored("Pending", "dev", "2024-03-01", None),
            stored("Pending", "Development", "2024-03-02", None),
            stored("Approved", "dev", "2024-03-03", None),
        ];
        let statistics = DashboardStatistics::from_applications(&applications);

        assert_eq!(
            statistics.department_stats,
            vec![
                NamedCount {
                    name: "Development".to_owned(),
                    value: 2
                },
                NamedCount {
                    name: "Development".to_owned(),
                    value: 1
                },
            ]
        );
        assert_eq!(statistics.department_status_breakdown[1].tally.total, 2);
    }

    #[test]
    fn team_stats_count_only_approved_and_capitalize() {
        let applications = vec![
            stored("Approved", "dev", "2024-02-01", Some("backend")),
            stored("Approved", "dev", "2024-02-02", Some("backend")),
            stored("Rejected", "dev", "2024-02-03", Some("frontend")),
            stored("approved", "media", "2024-02-04", None),
        ];
        let statistics = DashboardStatistics::from_applications(&applications);

        assert_eq!(
            statistics.team_stats,
            vec![
                NamedCount {
                    name: "Backend".to_owned(),
                    value: 2
                },
                NamedCount {
                    name: "Unassigned".to_owned(),
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn monthly_stats_bucket_by_month_name() {
        let applications = vec![
            stored("Pending", "dev", "2024-03-01T10:00:00.000Z", None),
            stored("Rejected", "dev", "2023-03-15T10:00:00", None),
            stored("Approved", "media", "2024-04-02", None),
            stored("Pending", "media", "not a date", None),
        ];
        let statistics = DashboardStatistics::from_applications(&applications);

        let names: Vec<&str> = statistics
            .monthly_stats
            .iter()
            .map(|stat| stat.name.as_str())
            .collect();
        assert_eq!(names, vec!["March", "April", UNKNOWN_MONTH]);
        assert_eq!(
            statistics.monthly_stats[0].tally,
            StatusTally {
                total: 2,
                approved: 0,
                rejected: 1,
                pending: 1,
            }
        );
    }

    #[test]
    fn department_breakdown_covers_known_departments_in_order() {
        let applications = vec![
            stored("Rejected", "media", "2024-01-01", None),
            stored("Approved", "media", "2024-01-01", None),
            stored("Pending", "design", "2024-01-01", None),
        ];
        let statistics = DashboardStatistics::from_applications(&applications);

        let labels: Vec<&str> = statistics
            .department_status_breakdown
            .iter()
            .map(|breakdown| breakdown.department.as_str())
            .collect();
        assert_eq!(labels, vec!["Design", "Development", "Media"]);
        assert_eq!(
            statistics.department_status_breakdown[2].tally,
            StatusTally {
                total: 2,
                approved: 1,
                rejected: 1,
                pending: 0,
            }
        );
    }

    #[test]
    fn percentages_round_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn month_name_reads_generated_timestamps() {
        let created_at = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 0, 0)
            .single()
            .unwrap_or_else(|| unreachable!())
            .to_rfc3339();
        assert_eq!(month_name(created_at.as_str()), "December");
    }

    fn status_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("Pending"), Just("Approved"), Just("Rejected"), Just("pending")]
    }

    fn department_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("design"), Just("dev"), Just("media"), Just("other")]
    }

    proptest! {
        #[test]
        fn status_counts_sum_to_total(
            entries in proptest::collection::vec((status_strategy(), department_strategy()), 0..64)
        ) {
            let applications: Vec<MembershipApplication> = entries
                .iter()
                .map(|(status, department)| stored(status, department, "2024-05-05", None))
                .collect();
            let statistics = DashboardStatistics::from_applications(&applications);

            prop_assert_eq!(
                statistics.pending + statistics.approved + statistics.rejected,
                statistics.total_applications
            );
            prop_assert_eq!(statistics.total_applications, applications.len());

            let percent_sum: usize = statistics
                .status_percentages
                .iter()
                .map(|share| share.value)
                .sum();
            if applications.is_empty() {
                prop_assert_eq!(percent_sum, 0);
            } else {
                prop_assert!((99..=101).contains(&percent_sum));
            }

            let department_sum: usize = statistics
                .department_stats
                .iter()
                .map(|count| count.value)
                .sum();
            prop_assert_eq!(department_sum, statistics.total_applications);
        }
    }
}
