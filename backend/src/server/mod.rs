//! Server construction and middleware wiring.

mod config;
mod session_key;
mod state_builders;

pub use config::{AppSettings, ServerConfig, session_flags_from_env};
pub use session_key::{BuildMode, load_session_key};

use state_builders::build_controller;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite, time::Duration};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use dad_rental::Trace;
use dad_rental::domain::Controller;
use dad_rental::inbound::http::configure;
use dad_rental::inbound::http::health::{HealthState, live, ready};

/// Name of the cookie carrying the signed-in state.
const SESSION_COOKIE: &str = "session";
/// Idle lifetime of a session cookie.
const SESSION_TTL_HOURS: i64 = 2;

/// Cookie settings shared by every worker.
#[derive(Clone)]
struct CookiePolicy {
    key: Key,
    secure: bool,
    same_site: SameSite,
}

impl CookiePolicy {
    /// Private, HTTP-only cookie session over `/`.
    fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE.to_owned())
            .cookie_path("/".to_owned())
            .cookie_secure(self.secure)
            .cookie_http_only(true)
            .cookie_content_security(CookieContentSecurity::Private)
            .cookie_same_site(self.same_site)
            .session_lifecycle(
                PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
            )
            .build()
    }
}

/// Health probes outside the session; everything else through the controller.
fn build_app(
    health_state: web::Data<HealthState>,
    controller: web::Data<Controller>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let pages = web::scope("")
        .wrap(session)
        .app_data(controller)
        .configure(configure);

    App::new()
        .app_data(health_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .service(pages)
}

/// Bind the HTTP server and mark the service ready.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let controller = build_controller(&config);
    let cookies = CookiePolicy {
        key: config.key,
        secure: config.cookie_secure,
        same_site: config.same_site,
    };
    let probes = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(probes.clone(), controller.clone(), cookies.middleware())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
