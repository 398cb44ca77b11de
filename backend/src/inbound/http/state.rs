//! Shared state handed to HTTP handlers.

use std::sync::Arc;

use crate::domain::{AuthService, BillingService, DashboardService};

/// Feature services available to handlers via `web::Data`.
#[derive(Clone)]
pub struct HttpState {
    /// Authentication use-cases.
    pub auth: Arc<AuthService>,
    /// Billing use-cases.
    pub billing: Arc<BillingService>,
    /// Dashboard read use-cases.
    pub dashboard: Arc<DashboardService>,
}

impl HttpState {
    /// Wire every service to its stub ports. This is the only wiring that
    /// exists until persistence and the third-party SDKs land.
    pub fn stubbed() -> Self {
        Self {
            auth: Arc::new(AuthService::stubbed()),
            billing: Arc::new(BillingService::stubbed()),
            dashboard: Arc::new(DashboardService::stubbed()),
        }
    }
}
