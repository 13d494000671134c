//! Shared harness for end-to-end page flows.
//!
//! Builds the real application around an in-memory store and a minimum-cost
//! password hasher, and carries the session cookie between requests the way
//! a browser would.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};

use dad_rental::Trace;
use dad_rental::domain::{Controller, ControllerPorts};
use dad_rental::inbound::http::configure;
use dad_rental::outbound::memory::InMemoryRentalStore;
use dad_rental::outbound::password::Argon2PasswordHasher;

/// Session cookie name used by the application.
pub const SESSION_COOKIE: &str = "session";
/// Password satisfying every registration rule.
pub const GOOD_PASSWORD: &str = "Abcd123!";

/// Fresh store seeded with the sample dads.
pub fn sample_store() -> Arc<InMemoryRentalStore> {
    Arc::new(InMemoryRentalStore::with_sample_dads())
}

/// The application wired to `store`.
pub fn rental_app(
    store: &Arc<InMemoryRentalStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let ports = ControllerPorts {
        clients: store.clone(),
        dads: store.clone(),
        appointments: store.clone(),
        hasher: Arc::new(Argon2PasswordHasher::new(0)),
    };
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build();

    App::new()
        .wrap(Trace)
        .wrap(session)
        .app_data(web::Data::new(Controller::new(ports)))
        .configure(configure)
}

/// `GET /?action=<action>`.
pub fn get_action(action: &str) -> TestRequest {
    TestRequest::get().uri(&format!("/?action={}", urlencoding::encode(action)))
}

/// `POST /` with a form body including `action`.
pub fn post_action(action: &str, fields: &[(&str, &str)]) -> TestRequest {
    let mut body = vec![("action", action)];
    body.extend_from_slice(fields);
    TestRequest::post().uri("/").set_form(body)
}

/// Registration form for `username` with valid remaining fields.
pub fn registration(username: &str) -> TestRequest {
    post_action(
        "Register",
        &[
            ("username", username),
            ("password", GOOD_PASSWORD),
            ("confirm_password", GOOD_PASSWORD),
            ("first_name", "Bob"),
            ("last_name", "Smith"),
            ("email", "bob@example.com"),
        ],
    )
}

/// `Location` header of a redirect.
pub fn location(response: &ServiceResponse) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Response body as text.
pub async fn body_text(response: ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Browser-like holder for the session cookie.
#[derive(Debug, Default)]
pub struct CookieJar {
    session: Option<Cookie<'static>>,
}

impl CookieJar {
    /// Attach the current cookie, if any, to `request`.
    pub fn attach(&self, request: TestRequest) -> TestRequest {
        match &self.session {
            Some(cookie) => request.cookie(cookie.clone()),
            None => request,
        }
    }

    /// Apply any `Set-Cookie` for the session from `response`.
    pub fn absorb(&mut self, response: &ServiceResponse) {
        let update = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(Cookie::into_owned);
        if let Some(cookie) = update {
            self.session = (!cookie.value().is_empty()).then_some(cookie);
        }
    }

    /// Whether a session cookie is held.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
