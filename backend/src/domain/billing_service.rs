//! Billing use-cases: subscription lookup, checkout, webhook handling.
//!
//! The payment-provider SDK is not wired in; checkout returns a placeholder
//! redirect URL and webhook branches are recognised no-ops. Signature
//! verification and idempotency are future work and out of scope.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::billing::{BillingError, PlanTier, Subscription, WebhookEvent};
use super::ports::{PortError, StubSubscriptionRepository, SubscriptionRepository};

/// Redirect target handed out until the payment provider is integrated.
const PLACEHOLDER_CHECKOUT_URL: &str = "https://checkout.stripe.com/placeholder";

/// Failure raised by [`BillingService`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingServiceError {
    /// A domain-level billing failure; mapped to a 4xx at the boundary.
    #[error(transparent)]
    Billing(#[from] BillingError),
    /// A port failed; surfaced as an opaque 500 at the boundary.
    #[error("billing backend failure: {0}")]
    Backend(#[from] PortError),
}

/// Billing service wired to its driven ports.
pub struct BillingService {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl BillingService {
    /// Construct a service over an explicit subscription repository.
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    /// Construct a service over the stub repository.
    pub fn stubbed() -> Self {
        Self::new(Arc::new(StubSubscriptionRepository))
    }

    /// Active subscription for a user; `None` means the free tier.
    ///
    /// # Errors
    /// Propagates port failures as [`BillingServiceError::Backend`].
    pub async fn subscription_for(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, BillingServiceError> {
        Ok(self.subscriptions.find_for_user(user_id).await?)
    }

    /// Create a checkout session and return the redirect URL.
    ///
    /// # Errors
    /// [`BillingError::PlanNotFound`] for the free tier, which has nothing to
    /// bill.
    pub async fn create_checkout_session(
        &self,
        user_id: Uuid,
        plan: PlanTier,
    ) -> Result<String, BillingServiceError> {
        if plan == PlanTier::Free {
            return Err(BillingError::PlanNotFound(
                "Cannot create a checkout session for the free plan.".to_owned(),
            )
            .into());
        }

        debug!(%user_id, ?plan, "creating checkout session");
        Ok(PLACEHOLDER_CHECKOUT_URL.to_owned())
    }

    /// Handle an incoming payment-provider webhook event.
    ///
    /// Recognised event types are no-ops until persistence exists;
    /// unrecognised types are logged and ignored. Always succeeds.
    pub async fn handle_webhook_event(&self, event: &WebhookEvent) {
        match event.event_type.as_str() {
            "customer.subscription.updated" => {
                debug!("webhook: subscription updated");
            }
            "customer.subscription.deleted" => {
                debug!("webhook: subscription deleted");
            }
            "invoice.payment_failed" => {
                debug!("webhook: invoice payment failed");
            }
            other => {
                info!(event_type = other, "unhandled billing webhook");
            }
        }
    }
}
