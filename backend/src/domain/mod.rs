//! Domain types and services.
//!
//! Purpose: define strongly typed feature entities and the use-cases over
//! them, free of transport concerns. Inbound adapters validate raw input
//! before it reaches this layer; driven ports isolate the (future)
//! persistence and SDK integrations.

pub mod auth;
mod auth_service;
pub mod billing;
mod billing_service;
pub mod dashboard;
mod dashboard_service;
pub mod ports;

pub use auth_service::{AuthService, AuthServiceError};
pub use billing_service::{BillingService, BillingServiceError};
pub use dashboard_service::{DashboardService, DEFAULT_ACTIVITY_LIMIT};
