//! Authentication domain types.
//!
//! Inbound payload validation happens at the HTTP boundary; these types
//! assume shape-checked input and carry it through the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Default role for self-registered accounts.
    Member,
    /// Read-only access.
    Viewer,
}

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Uuid,
    /// Address the user signs in with.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Access role.
    pub role: UserRole,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Access grant issued on login or registration, carried via cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Owning user.
    pub user_id: Uuid,
    /// Opaque session token.
    pub token: String,
    /// Instant after which the session is no longer honoured.
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The authenticated user.
    pub user: User,
    /// The freshly issued session.
    pub session: Session,
}

/// Shape-checked login input.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Wrap boundary-validated credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email address used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Shape-checked registration input.
#[derive(Debug, Clone)]
pub struct RegisterPayload {
    email: String,
    password: Zeroizing<String>,
    name: String,
}

impl RegisterPayload {
    /// Wrap boundary-validated registration fields.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
            name: name.into(),
        }
    }

    /// Email address for the new account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Authentication failure raised by the auth service.
///
/// Each variant is a terminal outcome for the current request; the HTTP
/// boundary is the only place that translates one into a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Credentials do not match an account.
    #[error("{0}")]
    InvalidCredentials(String),
    /// No account exists for the given email.
    #[error("{0}")]
    UserNotFound(String),
    /// A presented session token has expired.
    #[error("{0}")]
    TokenExpired(String),
    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),
}

impl AuthError {
    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials(_) => "InvalidCredentials",
            Self::UserNotFound(_) => "UserNotFound",
            Self::TokenExpired(_) => "TokenExpired",
            Self::Unauthorized(_) => "Unauthorized",
        }
    }
}
