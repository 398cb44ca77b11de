//! Authentication use-cases: login and registration.
//!
//! The service knows nothing about HTTP. It receives shape-checked inputs,
//! talks to its ports, and returns typed results or raises typed errors.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::auth::{AuthError, AuthResult, LoginCredentials, RegisterPayload, User, UserRole};
use super::ports::{
    PasswordVerifier, PlaceholderSessionIssuer, PortError, SessionIssuer, StubPasswordVerifier,
    StubUserRepository, UserRepository,
};

/// Failure raised by [`AuthService`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthServiceError {
    /// A domain-level authentication failure; mapped to 401 at the boundary.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// A port failed; surfaced as an opaque 500 at the boundary.
    #[error("authentication backend failure: {0}")]
    Backend(#[from] PortError),
}

/// Authentication service wired to its driven ports.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordVerifier>,
    sessions: Arc<dyn SessionIssuer>,
}

impl AuthService {
    /// Construct a service over explicit port implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordVerifier>,
        sessions: Arc<dyn SessionIssuer>,
    ) -> Self {
        Self {
            users,
            passwords,
            sessions,
        }
    }

    /// Construct a service over the stub ports used until persistence and a
    /// hashing library are wired in.
    pub fn stubbed() -> Self {
        Self::new(
            Arc::new(StubUserRepository),
            Arc::new(StubPasswordVerifier),
            Arc::new(PlaceholderSessionIssuer),
        )
    }

    /// Authenticate a user with email and password.
    ///
    /// # Errors
    /// - [`AuthError::UserNotFound`] when no account matches the email.
    /// - [`AuthError::InvalidCredentials`] when the password does not match.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResult, AuthServiceError> {
        let stored = self
            .users
            .find_by_email(credentials.email())
            .await?
            .ok_or_else(|| {
                AuthError::UserNotFound("No account found with that email address.".to_owned())
            })?;

        let matches = self
            .passwords
            .verify(credentials.password(), &stored.password_hash)
            .await?;
        if !matches {
            return Err(AuthError::InvalidCredentials("Incorrect password.".to_owned()).into());
        }

        let session = self.sessions.issue(stored.user.id).await?;
        debug!(user_id = %stored.user.id, "login succeeded");
        Ok(AuthResult {
            user: stored.user,
            session,
        })
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    /// [`AuthError::InvalidCredentials`] when the email is already taken; the
    /// code deliberately matches the wrong-password failure so responses do
    /// not reveal which addresses have accounts.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthResult, AuthServiceError> {
        if self.users.find_by_email(payload.email()).await?.is_some() {
            return Err(AuthError::InvalidCredentials(
                "An account with this email already exists.".to_owned(),
            )
            .into());
        }

        let user = User {
            id: Uuid::new_v4(),
            email: payload.email().to_owned(),
            name: payload.name().to_owned(),
            role: UserRole::Member,
            created_at: Utc::now(),
        };

        let session = self.sessions.issue(user.id).await?;
        debug!(user_id = %user.id, "registration succeeded");
        Ok(AuthResult { user, session })
    }
}
