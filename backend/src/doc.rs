//! OpenAPI surface aggregated from handler annotations.

use utoipa::OpenApi;

/// API documentation for tooling and client generation.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::register,
        crate::inbound::http::billing::get_subscription,
        crate::inbound::http::billing::create_checkout,
        crate::inbound::http::billing::webhook,
        crate::inbound::http::dashboard::get_stats,
        crate::inbound::http::dashboard::get_activity,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::auth::User,
        crate::domain::auth::UserRole,
        crate::domain::auth::Session,
        crate::domain::billing::PlanTier,
        crate::domain::billing::Subscription,
        crate::domain::billing::SubscriptionStatus,
        crate::domain::billing::Invoice,
        crate::domain::billing::InvoiceStatus,
        crate::domain::billing::WebhookEvent,
        crate::domain::dashboard::DashboardStats,
        crate::domain::dashboard::ActivityEvent,
        crate::inbound::http::validation::LoginRequest,
        crate::inbound::http::validation::RegisterRequest,
        crate::inbound::http::auth::AuthResponse,
        crate::inbound::http::billing::SubscriptionResponse,
        crate::inbound::http::billing::CheckoutRequest,
        crate::inbound::http::billing::CheckoutResponse,
    )),
    tags(
        (name = "auth", description = "Login and registration"),
        (name = "billing", description = "Subscriptions and checkout"),
        (name = "dashboard", description = "Per-user aggregates"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;
