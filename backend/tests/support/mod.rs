//! Shared harness for endpoint integration tests.

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App};
use serde_json::Value;

use groundwork::inbound::http::health::HealthState;
use groundwork::inbound::http::state::HttpState;
use groundwork::server::build_app;

/// The application as production wires it, with an ephemeral session key and
/// non-secure cookies so tests can run over plain HTTP.
pub fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    build_app(
        health_state,
        web::Data::new(HttpState::stubbed()),
        Key::generate(),
        false,
    )
}

/// Register an account and return the session cookie it sets.
pub async fn register_and_capture_cookie<S, B>(service: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(serde_json::json!({
            "email": "ada@example.com",
            "password": "Password1",
            "name": "Ada Lovelace",
        }))
        .to_request();
    let response = test::call_service(service, request).await;
    assert!(response.status().is_success(), "registration must succeed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("registration sets a session cookie")
        .into_owned()
}

/// Parse a response body as JSON.
pub async fn json_body<B>(response: ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
