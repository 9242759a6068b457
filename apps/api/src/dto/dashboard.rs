use clubdesk_domain::{
    DashboardStatistics, DepartmentBreakdown, MonthlyStat, NamedCount, StatusTally,
};
use serde::Serialize;
use ts_rs::TS;

/// Named value used by the dashboard charts.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/named-count-response.ts"
)]
pub struct NamedCountResponse {
    pub name: String,
    pub value: usize,
}

/// Applications created in one month.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/monthly-stat-response.ts"
)]
pub struct MonthlyStatResponse {
    pub name: String,
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
}

/// Status counts restricted to one department.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/department-breakdown-response.ts"
)]
pub struct DepartmentBreakdownResponse {
    pub department: String,
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
}

/// Dashboard statistics payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/dashboard-response.ts"
)]
pub struct DashboardResponse {
    pub total_applications: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub status_percentages: Vec<NamedCountResponse>,
    pub department_stats: Vec<NamedCountResponse>,
    pub team_stats: Vec<NamedCountResponse>,
    pub monthly_stats: Vec<MonthlyStatResponse>,
    pub department_status_breakdown: Vec<DepartmentBreakdownResponse>,
}

impl From<NamedCount> for NamedCountResponse {
    fn from(value: NamedCount) -> Self {
        Self {
            name: value.name,
            value: value.value,
        }
    }
}

impl From<MonthlyStat> for MonthlyStatResponse {
    fn from(value: MonthlyStat) -> Self {
        let StatusTally {
            total,
            approved,
            rejected,
            pending,
        } = value.tally;

        Self {
            name: value.name,
            total,
            approved,
            rejected,
            pending,
        }
    }
}

impl From<DepartmentBreakdown> for DepartmentBreakdownResponse {
    fn from(value: DepartmentBreakdown) -> Self {
        let StatusTally {
            total,
            approved,
            rejected,
            pending,
        } = value.tally;

        Self {
            department: value.department,
            total,
            approved,
            rejected,
            pending,
        }
    }
}

impl From<DashboardStatistics> for DashboardResponse {
    fn from(value: DashboardStatistics) -> Self {
        Self {
            total_applications: value.total_applications,
            pending: value.pending,
            approved: value.approved,
            rejected: value.rejected,
            status_percentages: collect(value.status_percentages),
            department_stats: collect(value.department_stats),
            team_stats: collect(value.team_stats),
            monthly_stats: collect(value.monthly_stats),
            department_status_breakdown: collect(value.department_status_breakdown),
        }
    }
}

fn collect<T, R: From<T>>(values: Vec<T>) -> Vec<R> {
    values.into_iter().map(R::from).collect()
}
