//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! A thin wrapper around Actix's cookie session so handlers deal in domain
//! operations: persist an issued session, or require an authenticated user.

use actix_session::Session as ActixSession;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::domain::auth::Session;

use super::error::ApiError;

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const TOKEN_KEY: &str = "token";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(ActixSession);

impl SessionContext {
    /// Wrap the underlying Actix session.
    pub fn new(session: ActixSession) -> Self {
        Self(session)
    }

    /// Persist an issued session into the cookie.
    ///
    /// # Errors
    /// Internal error when the session state cannot be serialised.
    pub fn persist(&self, session: &Session) -> Result<(), ApiError> {
        self.0
            .insert(USER_ID_KEY, session.user_id)
            .and_then(|()| self.0.insert(TOKEN_KEY, &session.token))
            .map_err(|error| {
                tracing::error!(%error, "failed to persist session");
                ApiError::internal()
            })
    }

    /// Current user id, if the cookie carries a valid one.
    ///
    /// # Errors
    /// Internal error when the cookie state cannot be read.
    pub fn user_id(&self) -> Result<Option<Uuid>, ApiError> {
        self.0.get::<Uuid>(USER_ID_KEY).map_err(|error| {
            tracing::error!(%error, "failed to read session");
            ApiError::internal()
        })
    }

    /// Require an authenticated user id or fail with 401.
    ///
    /// # Errors
    /// Unauthorized when no user id is present.
    pub fn require_user_id(&self) -> Result<Uuid, ApiError> {
        self.user_id()?
            .ok_or_else(|| ApiError::unauthorized("Login required."))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = ActixSession::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
