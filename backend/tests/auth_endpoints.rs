//! End-to-end auth flows over the real application factory.
//!
//! These exercise the full path: JSON parsing, schema validation, the auth
//! service stubs, error mapping, and the session cookie contract.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod support;

use actix_web::cookie::SameSite;
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use rstest_bdd_macros::{given, then, when};
use serde_json::{json, Value};

use support::{app, json_body, register_and_capture_cookie};

async fn post_login(email: &str, password: &str) -> (StatusCode, Value) {
    let service = test::init_service(app()).await;
    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let response = test::call_service(&service, request).await;
    let status = response.status();
    (status, json_body(response).await)
}

#[rstest]
#[case(json!({ "email": "not-an-email", "password": "Password1" }), "email")]
#[case(json!({ "email": "user@nodot", "password": "Password1" }), "email")]
#[case(json!({ "email": "user@example.com", "password": "short" }), "password")]
#[actix_web::test]
async fn login_validation_failures_report_the_offending_field(
    #[case] payload: Value,
    #[case] field: &str,
) {
    let service = test::init_service(app()).await;
    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(payload)
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Validation failed");
    assert!(
        body["details"][field].is_array(),
        "expected a {field} entry in {body}"
    );
}

#[actix_web::test]
async fn login_for_unknown_account_is_user_not_found() {
    let (status, body) = post_login("nobody@example.com", "Password1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UserNotFound");
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("No account")));
}

// Until a real user store exists, a wrong password for a "known" address is
// indistinguishable from a missing account; both codes are valid outcomes.
#[actix_web::test]
async fn login_with_wrong_password_fails_with_an_auth_code() {
    let (status, body) = post_login("user@example.com", "WrongPassword1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let code = body["code"].as_str().unwrap_or_default();
    assert!(
        code == "UserNotFound" || code == "InvalidCredentials",
        "unexpected code {code}"
    );
}

#[rstest]
#[case(json!({ "email": "ada@example.com", "password": "password1", "name": "Ada" }))]
#[case(json!({ "email": "ada@example.com", "password": "Passwords", "name": "Ada" }))]
#[case(json!({ "email": "ada@example.com", "password": "Password1", "name": "A" }))]
#[actix_web::test]
async fn register_validation_enforces_password_and_name_rules(#[case] payload: Value) {
    let service = test::init_service(app()).await;
    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(payload)
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

type RegisterOutcome = (StatusCode, Value, Option<actix_web::cookie::Cookie<'static>>);

async fn register_ada() -> RegisterOutcome {
    let service = test::init_service(app()).await;
    let request = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": "ada@example.com",
            "password": "Password1",
            "name": "Ada Lovelace",
        }))
        .to_request();
    let response = test::call_service(&service, request).await;
    let status = response.status();
    let cookie = response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(|cookie| cookie.into_owned());
    (status, json_body(response).await, cookie)
}

#[given("a freshly registered account")]
fn a_freshly_registered_account(outcome: RegisterOutcome) -> RegisterOutcome {
    assert_eq!(outcome.0, StatusCode::OK, "registration must succeed");
    outcome
}

#[when("the registration response is inspected")]
fn the_registration_response_is_inspected(outcome: RegisterOutcome) -> Value {
    outcome.1
}

#[then("the new user holds the member role")]
fn the_new_user_holds_the_member_role(body: Value) {
    assert_eq!(body["user"]["role"], "member");
}

#[actix_web::test]
async fn register_returns_a_member_user() {
    let outcome = a_freshly_registered_account(register_ada().await);
    let body = the_registration_response_is_inspected(outcome);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Ada Lovelace");
    the_new_user_holds_the_member_role(body);
}

#[actix_web::test]
async fn register_sets_a_guarded_session_cookie() {
    let outcome = a_freshly_registered_account(register_ada().await);
    let cookie = outcome.2.expect("session cookie present");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    // Non-production test wiring leaves the cookie usable over plain HTTP.
    assert_ne!(cookie.secure(), Some(true));
}

#[actix_web::test]
async fn session_cookie_grants_access_to_protected_endpoints() {
    let service = test::init_service(app()).await;
    let cookie = register_and_capture_cookie(&service).await;

    let denied = test::call_service(
        &service,
        test::TestRequest::get().uri("/api/dashboard/stats").to_request(),
    )
    .await;
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

    let granted = test::call_service(
        &service,
        test::TestRequest::get()
            .uri("/api/dashboard/stats")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(granted.status(), StatusCode::OK);
}

#[actix_web::test]
async fn error_responses_carry_a_request_id() {
    let service = test::init_service(app()).await;
    let request = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "Password1" }))
        .to_request();
    let response = test::call_service(&service, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let header = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .expect("header is ascii")
        .to_owned();

    let body = json_body(response).await;
    assert_eq!(body["requestId"], header);
}
