//! Driven port for password verification.

use async_trait::async_trait;

use super::PortError;

/// Compares a plaintext password against a stored hash.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// Return whether `plain` matches `hash`.
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, PortError>;
}

/// Stub verifier used until a hashing library is wired in: every comparison
/// fails, so no stored hash can accidentally authenticate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubPasswordVerifier;

#[async_trait]
impl PasswordVerifier for StubPasswordVerifier {
    async fn verify(&self, _plain: &str, _hash: &str) -> Result<bool, PortError> {
        Ok(false)
    }
}
