//! Auth API handlers.
//!
//! ```text
//! POST /api/auth/login    {"email":"ada@example.com","password":"Password1"}
//! POST /api/auth/register {"email":"ada@example.com","password":"Password1","name":"Ada"}
//! ```
//!
//! Handlers have three responsibilities only: validate input, call the auth
//! service, return a response. No business logic lives here.

use actix_web::{post, web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::auth::User;

use super::error::{ApiError, ApiResult};
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::{validate_login, validate_register, LoginRequest, RegisterRequest};

/// Successful login or registration payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Authentication failed"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = validate_login(payload.into_inner())
        .map_err(|fields| ApiError::validation(&fields))?;
    let result = state.auth.login(&credentials).await?;
    session.persist(&result.session)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user: result.user }))
}

/// Register a new account and sign it in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration success", body = AuthResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = validate_register(payload.into_inner())
        .map_err(|fields| ApiError::validation(&fields))?;
    let result = state.auth.register(&registration).await?;
    session.persist(&result.session)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user: result.user }))
}

#[cfg(test)]
mod tests {
    //! Handler-level coverage; full flows live in the integration suite.
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, web, App};
    use serde_json::Value;

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
            .service(web::scope("/api").service(login).service(register))
    }

    #[actix_web::test]
    async fn login_with_malformed_email_is_a_field_error() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&LoginRequest {
                email: "not-an-email".into(),
                password: "Password1".into(),
            })
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"]["email"].is_array());
    }

    #[actix_web::test]
    async fn login_against_stubs_is_unauthorised_with_domain_code() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&LoginRequest {
                email: "nobody@example.com".into(),
                password: "Password1".into(),
            })
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "UserNotFound");
    }

    #[actix_web::test]
    async fn register_returns_member_user_and_session_cookie() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&RegisterRequest {
                email: "new@example.com".into(),
                password: "Password1".into(),
                name: "New User".into(),
            })
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .response()
            .cookies()
            .any(|cookie| cookie.name() == "session"));

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["user"]["role"], "member");
        assert_eq!(body["user"]["email"], "new@example.com");
    }
}
