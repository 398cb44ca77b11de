//! Dashboard use-cases: stats and recent activity.

use std::sync::Arc;

use uuid::Uuid;

use super::dashboard::{ActivityEvent, DashboardStats};
use super::ports::{DashboardRepository, PortError, StubDashboardRepository};

/// Activity entries returned when the caller does not ask for a count.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;

/// Dashboard read service wired to its driven port.
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    /// Construct a service over an explicit repository.
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Construct a service over the stub repository.
    pub fn stubbed() -> Self {
        Self::new(Arc::new(StubDashboardRepository))
    }

    /// Aggregate stats for the user's dashboard.
    ///
    /// # Errors
    /// Propagates port failures.
    pub async fn stats(&self, user_id: Uuid) -> Result<DashboardStats, PortError> {
        self.repository.stats(user_id).await
    }

    /// Most recent activity events, newest first. `limit` defaults to
    /// [`DEFAULT_ACTIVITY_LIMIT`].
    ///
    /// # Errors
    /// Propagates port failures.
    pub async fn recent_activity(
        &self,
        user_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<ActivityEvent>, PortError> {
        self.repository
            .recent_activity(user_id, limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT))
            .await
    }
}
