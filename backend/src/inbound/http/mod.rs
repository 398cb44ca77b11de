//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::{ApiError, ApiResult, FieldErrors};
