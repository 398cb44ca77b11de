//! Driven port for user lookups.

use async_trait::async_trait;

use crate::domain::auth::User;

use super::PortError;

/// A user record as persisted, including the credential hash that never
/// leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    /// The user as exposed to the rest of the application.
    pub user: User,
    /// Hash of the user's password. Placeholder until a hashing library is
    /// wired in.
    pub password_hash: String,
}

/// Lookup port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an account by email address. `Ok(None)` means no such account.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, PortError>;
}

/// Stub repository used until persistence exists: no account is ever found.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubUserRepository;

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<StoredUser>, PortError> {
        Ok(None)
    }
}
