//! Billing API handlers.
//!
//! ```text
//! GET  /api/billing/subscription
//! POST /api/billing/checkout {"plan":"pro"}
//! POST /api/billing/webhook  {"type":"invoice.payment_failed","data":{...}}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::billing::{PlanTier, Subscription, WebhookEvent};

use super::error::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;

/// Subscription lookup payload; `subscription` is null on the free tier.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    /// Active subscription, if any.
    pub subscription: Option<Subscription>,
}

/// Checkout request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckoutRequest {
    /// Plan to purchase.
    pub plan: PlanTier,
}

/// Checkout response carrying the provider redirect URL.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    /// URL the user is redirected to for payment.
    pub url: String,
}

/// Current user's subscription, if any.
#[utoipa::path(
    get,
    path = "/api/billing/subscription",
    responses(
        (status = 200, description = "Subscription state", body = SubscriptionResponse),
        (status = 401, description = "Login required"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["billing"],
    operation_id = "getSubscription"
)]
#[get("/billing/subscription")]
pub async fn get_subscription(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SubscriptionResponse>> {
    let user_id = session.require_user_id()?;
    let subscription = state.billing.subscription_for(user_id).await?;
    Ok(web::Json(SubscriptionResponse { subscription }))
}

/// Create a checkout session for a paid plan.
#[utoipa::path(
    post,
    path = "/api/billing/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Checkout session created", body = CheckoutResponse),
        (status = 400, description = "Plan cannot be billed"),
        (status = 401, description = "Login required"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["billing"],
    operation_id = "createCheckoutSession"
)]
#[post("/billing/checkout")]
pub async fn create_checkout(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CheckoutRequest>,
) -> ApiResult<web::Json<CheckoutResponse>> {
    let user_id = session.require_user_id()?;
    let url = state
        .billing
        .create_checkout_session(user_id, payload.plan)
        .await?;
    Ok(web::Json(CheckoutResponse { url }))
}

/// Receive a payment-provider webhook.
///
/// Signature verification is future work; until then the payload is accepted
/// as-is and recognised events are no-ops.
#[utoipa::path(
    post,
    path = "/api/billing/webhook",
    request_body = WebhookEvent,
    responses(
        (status = 200, description = "Event accepted"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["billing"],
    operation_id = "handleWebhook",
    security([])
)]
#[post("/billing/webhook")]
pub async fn webhook(
    state: web::Data<HttpState>,
    payload: web::Json<WebhookEvent>,
) -> ApiResult<HttpResponse> {
    state.billing.handle_webhook_event(&payload).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    //! Handler-level coverage; full flows live in the integration suite.
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use serde_json::{json, Value};

    use crate::inbound::http::test_utils::test_session_middleware;

    use super::*;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::stubbed()))
            .wrap(test_session_middleware())
            .service(
                web::scope("/api")
                    .service(get_subscription)
                    .service(create_checkout)
                    .service(webhook),
            )
    }

    #[actix_web::test]
    async fn subscription_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/billing/subscription")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn webhook_accepts_unrecognised_events() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/billing/webhook")
            .set_json(json!({ "type": "charge.refunded", "data": {} }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({}));
    }
}
