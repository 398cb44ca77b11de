//! Driven port for dashboard aggregates.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::dashboard::{ActivityEvent, DashboardStats};

use super::PortError;

/// Read-only port for per-user dashboard data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Aggregate stats for the user's dashboard.
    async fn stats(&self, user_id: Uuid) -> Result<DashboardStats, PortError>;

    /// Most recent activity events for a user, newest first.
    async fn recent_activity(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<ActivityEvent>, PortError>;
}

/// Stub repository: the dashboard is empty until storage exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubDashboardRepository;

#[async_trait]
impl DashboardRepository for StubDashboardRepository {
    async fn stats(&self, user_id: Uuid) -> Result<DashboardStats, PortError> {
        Ok(DashboardStats {
            user_id,
            total_items: 0,
            active_items: 0,
            last_activity_at: None,
        })
    }

    async fn recent_activity(
        &self,
        _user_id: Uuid,
        _limit: usize,
    ) -> Result<Vec<ActivityEvent>, PortError> {
        Ok(Vec::new())
    }
}
