//! Driven port for subscription records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::billing::Subscription;

use super::PortError;

/// Lookup port for billing subscriptions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Active subscription for a user, if any. `Ok(None)` means the user is
    /// on the free tier.
    async fn find_for_user(&self, user_id: Uuid) -> Result<Option<Subscription>, PortError>;
}

/// Stub repository: nobody has a paid subscription yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubSubscriptionRepository;

#[async_trait]
impl SubscriptionRepository for StubSubscriptionRepository {
    async fn find_for_user(&self, _user_id: Uuid) -> Result<Option<Subscription>, PortError> {
        Ok(None)
    }
}
