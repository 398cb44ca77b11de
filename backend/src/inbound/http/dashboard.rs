//! Dashboard API handlers.
//!
//! ```text
//! GET /api/dashboard/stats
//! GET /api/dashboard/activity?limit=20
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::dashboard::{ActivityEvent, DashboardStats};

use super::error::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;

/// Query parameters for the activity feed.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ActivityQuery {
    /// Maximum events to return; defaults to 20.
    pub limit: Option<usize>,
}

/// Aggregate stats for the signed-in user.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard stats", body = DashboardStats),
        (status = 401, description = "Login required"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["dashboard"],
    operation_id = "getDashboardStats"
)]
#[get("/dashboard/stats")]
pub async fn get_stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardStats>> {
    let user_id = session.require_user_id()?;
    let stats = state.dashboard.stats(user_id).await?;
    Ok(web::Json(stats))
}

/// Recent activity for the signed-in user, newest first.
#[utoipa::path(
    get,
    path = "/api/dashboard/activity",
    params(ActivityQuery),
    responses(
        (status = 200, description = "Activity feed", body = [ActivityEvent]),
        (status = 401, description = "Login required"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["dashboard"],
    operation_id = "getRecentActivity"
)]
#[get("/dashboard/activity")]
pub async fn get_activity(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ActivityQuery>,
) -> ApiResult<web::Json<Vec<ActivityEvent>>> {
    let user_id = session.require_user_id()?;
    let events = state.dashboard.recent_activity(user_id, query.limit).await?;
    Ok(web::Json(events))
}
