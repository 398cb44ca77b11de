//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (user storage, password hashing, session issuance, billing records). Each
//! trait is consumed as `Arc<dyn …>` so a real adapter can replace the stub
//! without touching the services that call it. Until persistence and the
//! third-party SDKs are wired in, every port ships with a stub that returns
//! the empty or failing answer.

mod dashboard_repository;
mod password_verifier;
mod session_issuer;
mod subscription_repository;
mod user_repository;

use thiserror::Error;

pub use dashboard_repository::{DashboardRepository, StubDashboardRepository};
pub use password_verifier::{PasswordVerifier, StubPasswordVerifier};
pub use session_issuer::{PlaceholderSessionIssuer, SessionIssuer, SESSION_TTL_DAYS};
pub use subscription_repository::{StubSubscriptionRepository, SubscriptionRepository};
pub use user_repository::{StoredUser, StubUserRepository, UserRepository};

#[cfg(test)]
pub use dashboard_repository::MockDashboardRepository;
#[cfg(test)]
pub use password_verifier::MockPasswordVerifier;
#[cfg(test)]
pub use session_issuer::MockSessionIssuer;
#[cfg(test)]
pub use subscription_repository::MockSubscriptionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

/// Failure surfaced by a driven adapter.
///
/// Stubs never fail; real adapters map their infrastructure errors into
/// these variants so services stay free of backend-specific error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// The backing store or SDK could not be reached.
    #[error("backend unavailable: {message}")]
    Unavailable {
        /// Adapter-provided description of the failure.
        message: String,
    },
    /// The adapter returned data the domain could not interpret.
    #[error("backend returned malformed data: {message}")]
    Malformed {
        /// Adapter-provided description of the failure.
        message: String,
    },
}

impl PortError {
    /// Helper for connectivity failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Helper for corrupt or unexpected adapter data.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
