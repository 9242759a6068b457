use clubdesk_core::AppResult;
use clubdesk_domain::DashboardStatistics;

use crate::ApplicationLedger;

/// Read-only service computing dashboard statistics from storage.
#[derive(Clone)]
pub struct DashboardService {
    ledger: ApplicationLedger,
}

impl DashboardService {
    /// Creates a dashboard service over the shared ledger.
    #[must_use]
    pub fn new(ledger: ApplicationLedger) -> Self {
        Self { ledger }
    }

    /// Recomputes statistics from the full stored list.
    pub async fn statistics(&self) -> AppResult<DashboardStatistics> {
        let applications = self.ledger.load().await?;
        Ok(DashboardStatistics::from_applications(&applications))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::test_support::{FakeApplicationStore, form};
    use crate::{ApplicationLedger, RegistrationService, ReviewService};

    use super::DashboardService;

    #[tokio::test]
    async fn statistics_follow_stored_applications() {
        let ledger = ApplicationLedger::new(Arc::new(FakeApplicationStore::default()));
        let registration = RegistrationService::new(ledger.clone());
        let review = ReviewService::new(ledger.clone());
        let dashboard = DashboardService::new(ledger);

        let empty = dashboard.statistics().await;
        assert_eq!(
            empty.map(|statistics| statistics.total_applications).ok(),
            Some(0)
        );

        let pending = registration
            .submit(form("Lan", "lan@example.com", "dev"))
            .await;
        assert!(pending.is_ok());
        let approved = registration
            .submit(form("Bao", "bao@example.com", "design"))
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(review.approve(approved.id(), true).await.is_ok());

        let statistics = dashboard
            .statistics()
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(statistics.total_applications, 2);
        assert_eq!(statistics.pending, 1);
        assert_eq!(statistics.approved, 1);
        assert_eq!(statistics.rejected, 0);
        assert_eq!(statistics.team_stats.len(), 1);
        assert_eq!(statistics.team_stats[0].name, "Unassigned");
    }
}
