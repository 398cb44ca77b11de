//! Billing domain types.
//!
//! Billing is a separate feature module; auth types never bleed in here. A
//! user reference is always a bare [`Uuid`], not the `User` aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Plan a subscription is billed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// No paid features; never has a checkout session.
    Free,
    /// Standard paid tier.
    Pro,
    /// Custom-contract tier.
    Enterprise,
}

/// Lifecycle state of a subscription, mirroring the payment provider's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In good standing.
    Active,
    /// In a trial period.
    Trialing,
    /// A renewal payment failed and is being retried.
    PastDue,
    /// Cancelled by the user or by dunning.
    Canceled,
    /// Retries exhausted without payment.
    Unpaid,
    /// Collection paused by an operator.
    Paused,
}

/// A user's paid subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Billed plan.
    pub plan: PlanTier,
    /// Current lifecycle state.
    pub status: SubscriptionStatus,
    /// Start of the current billing period.
    pub current_period_start: DateTime<Utc>,
    /// End of the current billing period.
    pub current_period_end: DateTime<Utc>,
    /// Whether the subscription ends rather than renews at period end.
    pub cancel_at_period_end: bool,
}

/// Collection state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet finalised.
    Draft,
    /// Awaiting payment.
    Open,
    /// Settled.
    Paid,
    /// Written off.
    Void,
    /// Given up on.
    Uncollectible,
}

/// An invoice raised against a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice identifier.
    pub id: Uuid,
    /// Subscription this invoice bills.
    pub subscription_id: Uuid,
    /// Amount due, in the smallest currency unit.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Collection state.
    pub status: InvoiceStatus,
    /// Payment deadline.
    pub due_date: DateTime<Utc>,
    /// When the invoice was settled, if it has been.
    pub paid_at: Option<DateTime<Utc>>,
}

/// Incoming payment-provider webhook payload, deserialised but unverified.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WebhookEvent {
    /// Provider event type, e.g. `customer.subscription.updated`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Provider-defined event payload, passed through untyped.
    pub data: Value,
}

/// Billing failure raised by the billing service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// The provider rejected or failed a payment.
    #[error("{0}")]
    PaymentFailed(String),
    /// No subscription exists where one was required.
    #[error("{0}")]
    SubscriptionNotFound(String),
    /// The requested plan cannot be billed.
    #[error("{0}")]
    PlanNotFound(String),
}

impl BillingError {
    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PaymentFailed(_) => "PaymentFailed",
            Self::SubscriptionNotFound(_) => "SubscriptionNotFound",
            Self::PlanNotFound(_) => "PlanNotFound",
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn plan_tier_serialises_lowercase() {
        let json = serde_json::to_string(&PlanTier::Enterprise).expect("serialise plan");
        assert_eq!(json, "\"enterprise\"");
    }

    #[test]
    fn subscription_status_serialises_snake_case() {
        let json = serde_json::to_string(&SubscriptionStatus::PastDue).expect("serialise status");
        assert_eq!(json, "\"past_due\"");
    }

    #[test]
    fn webhook_event_reads_provider_shape() {
        let event: WebhookEvent = serde_json::from_str(
            r#"{"type":"invoice.payment_failed","data":{"id":"in_123"}}"#,
        )
        .expect("deserialise webhook");
        assert_eq!(event.event_type, "invoice.payment_failed");
        assert_eq!(event.data["id"], "in_123");
    }
}
