//! Server construction and middleware wiring.

use std::net::SocketAddr;

use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{time, Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use crate::config::AppConfig;
use crate::domain::ports::SESSION_TTL_DAYS;
use crate::inbound::http::auth::{login, register};
use crate::inbound::http::billing::{create_checkout, get_subscription, webhook};
use crate::inbound::http::dashboard::{get_activity, get_stats};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::middleware::RequestIdLayer;

/// Cookie and binding settings derived from the validated [`AppConfig`].
pub struct ServerConfig {
    key: Key,
    cookie_secure: bool,
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Derive server settings from the application configuration.
    #[must_use]
    pub fn new(config: &AppConfig, bind_addr: SocketAddr) -> Self {
        Self {
            // The auth secret is length-checked at load time, which is the
            // minimum `derive_from` requires.
            key: Key::derive_from(config.auth_secret().as_bytes()),
            cookie_secure: config.cookie_secure(),
            bind_addr,
        }
    }

    /// Address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Session middleware matching the session contract: an `HttpOnly`, lax,
/// path-`/` cookie named `session` living as long as the issued session.
fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default().session_ttl(time::Duration::days(SESSION_TTL_DAYS)),
        )
        .build()
}

/// Assemble the application: feature routes under `/api`, probes outside it.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .wrap(session_middleware(key, cookie_secure))
        .service(login)
        .service(register)
        .service(get_subscription)
        .service(create_checkout)
        .service(webhook)
        .service(get_stats)
        .service(get_activity);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestIdLayer)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct the HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::stubbed());
    let server_health_state = health_state.clone();
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            key.clone(),
            cookie_secure,
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
