//! Orchestration probes over the server lifecycle.
//!
//! The process moves through three phases: starting (configuration validated,
//! socket not yet bound), ready (serving traffic), draining (shutting down).
//! [`crate::server::create_server`] advances the phase once the bind
//! succeeds; probes report it without locking.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{get, http::header, web, HttpResponse};
use serde_json::json;

/// Phase of the server lifecycle, as reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecyclePhase {
    /// Configuration validated, socket not yet bound.
    Starting = 0,
    /// Bound and serving traffic.
    Ready = 1,
    /// Shutting down; traffic should move elsewhere.
    Draining = 2,
}

impl LifecyclePhase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Ready,
            2 => Self::Draining,
            _ => Self::Starting,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Ready => "ready",
            Self::Draining => "draining",
        }
    }
}

/// Shared lifecycle phase, stored as a single atomic.
#[derive(Debug, Default)]
pub struct HealthState {
    phase: AtomicU8,
}

impl HealthState {
    /// New state in the starting phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the socket is bound and traffic can be served.
    pub fn mark_ready(&self) {
        self.phase.store(LifecyclePhase::Ready as u8, Ordering::Release);
    }

    /// Record that the process is shutting down so probes fail fast.
    pub fn begin_drain(&self) {
        self.phase
            .store(LifecyclePhase::Draining as u8, Ordering::Release);
    }

    /// Phase the process is currently in.
    pub fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::from_raw(self.phase.load(Ordering::Acquire))
    }
}

fn probe_response(healthy: bool, phase: LifecyclePhase) -> HttpResponse {
    let mut builder = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "phase": phase.name() }))
}

/// Readiness probe: 200 only while serving traffic.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    probe_response(phase == LifecyclePhase::Ready, phase)
}

/// Liveness probe: 200 until the process starts draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    probe_response(phase != LifecyclePhase::Draining, phase)
}
