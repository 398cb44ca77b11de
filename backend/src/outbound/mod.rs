//! Outbound adapters for third-party services.

pub mod http_client;

pub use http_client::{ApiClient, ApiClientError, ApiClientOptions};
