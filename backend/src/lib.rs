//! Groundwork backend library modules.
//!
//! A starter backend for a SaaS-style web application. Feature services are
//! placeholder stubs behind narrow port seams; the HTTP boundary, validation,
//! error taxonomy, and configuration are the real contracts.

pub mod config;
pub mod doc;
pub mod domain;
pub mod formatting;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::RequestIdLayer;
