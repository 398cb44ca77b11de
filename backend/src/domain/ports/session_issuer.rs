//! Driven port for session issuance.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::auth::Session;

use super::PortError;

/// Sessions live for a week from issuance.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Issues a session for an authenticated user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionIssuer: Send + Sync {
    /// Create a session for `user_id`.
    async fn issue(&self, user_id: Uuid) -> Result<Session, PortError>;
}

/// Stub issuer returning a fixed token until real signing or a session store
/// exists. The expiry offset is the real contract and is preserved.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSessionIssuer;

/// Token handed out by [`PlaceholderSessionIssuer`].
pub(crate) const PLACEHOLDER_TOKEN: &str = "session-token-placeholder";

#[async_trait]
impl SessionIssuer for PlaceholderSessionIssuer {
    async fn issue(&self, user_id: Uuid) -> Result<Session, PortError> {
        Ok(Session {
            user_id,
            token: PLACEHOLDER_TOKEN.to_owned(),
            expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
        })
    }
}
