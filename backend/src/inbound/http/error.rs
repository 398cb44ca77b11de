//! HTTP error envelope and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating service errors
//! into Actix responses here. This is the only place a status code is chosen:
//! validation failures become 400 with a field-error map, auth failures 401
//! with their domain code, billing failures the closest 4xx, and anything
//! unrecognised an opaque 500 with the detail kept server-side.

use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::auth::AuthError;
use crate::domain::billing::BillingError;
use crate::domain::ports::PortError;
use crate::domain::{AuthServiceError, BillingServiceError};
use crate::middleware::request_id::RequestId;

/// Ordered map from field name to the list of rule violations for it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error envelope returned by every handler.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: Option<&'static str>,
    message: String,
    details: Option<Value>,
}

/// Serialised shape of [`ApiError`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl ApiError {
    /// A 400 carrying the field-error map produced by schema validation.
    pub fn validation(field_errors: &FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: None,
            message: "Validation failed".to_owned(),
            details: serde_json::to_value(field_errors).ok(),
        }
    }

    /// An opaque 500. The real cause must already have been logged.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: None,
            message: "Internal server error".to_owned(),
            details: None,
        }
    }

    /// A 401 for a request lacking a valid session.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code: Some("Unauthorized"),
            message: message.into(),
            details: None,
        }
    }

    /// Status the envelope renders with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable code, when the failure has one.
    pub fn code(&self) -> Option<&'static str> {
        self.code
    }

    fn from_port_error(error: &PortError) -> Self {
        error!(%error, "port failure reached the HTTP boundary");
        Self::internal()
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(value: AuthServiceError) -> Self {
        match value {
            AuthServiceError::Auth(auth) => Self {
                status: StatusCode::UNAUTHORIZED,
                code: Some(auth.code()),
                message: auth.to_string(),
                details: None,
            },
            AuthServiceError::Backend(port) => Self::from_port_error(&port),
        }
    }
}

impl From<BillingServiceError> for ApiError {
    fn from(value: BillingServiceError) -> Self {
        match value {
            BillingServiceError::Billing(billing) => {
                let status = match billing {
                    BillingError::PlanNotFound(_) => StatusCode::BAD_REQUEST,
                    BillingError::SubscriptionNotFound(_) => StatusCode::NOT_FOUND,
                    BillingError::PaymentFailed(_) => StatusCode::PAYMENT_REQUIRED,
                };
                Self {
                    status,
                    code: Some(billing.code()),
                    message: billing.to_string(),
                    details: None,
                }
            }
            BillingServiceError::Backend(port) => Self::from_port_error(&port),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(value: AuthError) -> Self {
        AuthServiceError::Auth(value).into()
    }
}

impl From<PortError> for ApiError {
    fn from(value: PortError) -> Self {
        Self::from_port_error(&value)
    }
}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to API error");
        Self::internal()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let redact = self.status.is_server_error();
        let message = if redact {
            "Internal server error"
        } else {
            self.message.as_str()
        };
        let body = ErrorBody {
            error: message,
            code: if redact { None } else { self.code },
            details: if redact { None } else { self.details.as_ref() },
            request_id: RequestId::current().map(|id| id.to_string()),
        };
        HttpResponse::build(self.status).json(body)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn body_of(error: ApiError) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("error payload is JSON")
    }

    #[tokio::test]
    async fn validation_errors_render_field_details() {
        let mut fields = FieldErrors::new();
        fields.insert(
            "email".to_owned(),
            vec!["Must be a valid email address".to_owned()],
        );
        let error = ApiError::validation(&fields);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);

        let body = body_of(error).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"]["email"][0], "Must be a valid email address");
        assert!(body.get("code").is_none());
    }

    #[tokio::test]
    async fn auth_errors_map_to_unauthorised_with_code() {
        let error: ApiError =
            AuthServiceError::Auth(AuthError::UserNotFound("no account".to_owned())).into();
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);

        let body = body_of(error).await;
        assert_eq!(body["error"], "no account");
        assert_eq!(body["code"], "UserNotFound");
    }

    #[tokio::test]
    async fn backend_failures_are_redacted() {
        let error: ApiError =
            AuthServiceError::Backend(PortError::unavailable("db password leaked")).into();
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(error).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("code").is_none());
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn billing_errors_pick_the_closest_status() {
        let cases = [
            (
                BillingError::PlanNotFound("no plan".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                BillingError::SubscriptionNotFound("none".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (
                BillingError::PaymentFailed("declined".to_owned()),
                StatusCode::PAYMENT_REQUIRED,
            ),
        ];
        for (billing, status) in cases {
            let code = billing.code();
            let error: ApiError = BillingServiceError::Billing(billing).into();
            assert_eq!(error.status(), status, "{code}");
            assert_eq!(error.code(), Some(code));
        }
    }
}
