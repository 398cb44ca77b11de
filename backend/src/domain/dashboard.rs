//! Dashboard domain types: read-only aggregates scoped to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// User the stats are scoped to.
    pub user_id: Uuid,
    /// Total items the user owns.
    pub total_items: u64,
    /// Items currently active.
    pub active_items: u64,
    /// Most recent activity, if the user has any.
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// A single entry in the user's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    /// Event identifier.
    pub id: Uuid,
    /// User the event belongs to.
    pub user_id: Uuid,
    /// Event category, e.g. `item.created`.
    pub kind: String,
    /// Human-readable summary.
    pub description: String,
    /// When the event happened.
    pub occurred_at: DateTime<Utc>,
}
