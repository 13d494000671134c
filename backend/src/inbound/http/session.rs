//! Bridge between the actix cookie session and [`ClientSession`].
//!
//! Handlers load a [`ClientSession`] before dispatch and hand the result back
//! afterwards; only changed state is written to the cookie.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::{ClientSession, Error};

pub(crate) const IS_VALID_USER_KEY: &str = "is_valid_user";
pub(crate) const USERNAME_KEY: &str = "username";

/// Newtype over the actix session exposing client-session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap the underlying actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Read the client session; unreadable values count as absent.
    pub fn load(&self) -> ClientSession {
        let is_valid_user = self.read::<bool>(IS_VALID_USER_KEY).unwrap_or(false);
        let username = self.read::<String>(USERNAME_KEY);
        ClientSession::from_parts(is_valid_user, username)
    }

    /// Persist `current` when it differs from `loaded`.
    ///
    /// An emptied session purges the cookie. A newly authenticated session
    /// renews it.
    pub fn store(&self, loaded: &ClientSession, current: &ClientSession) -> Result<(), Error> {
        if loaded == current {
            return Ok(());
        }
        if current.is_empty() {
            self.0.purge();
            return Ok(());
        }
        if current.is_valid_user() && !loaded.is_valid_user() {
            self.0.renew();
        }
        self.insert(IS_VALID_USER_KEY, current.is_valid_user())?;
        match current.username() {
            Some(username) => self.insert(USERNAME_KEY, username),
            None => {
                self.0.remove(USERNAME_KEY);
                Ok(())
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0.get::<T>(key).unwrap_or_else(|error| {
            warn!(%key, %error, "ignoring unreadable session value");
            None
        })
    }

    fn insert(&self, key: &str, value: impl serde::Serialize) -> Result<(), Error> {
        self.0
            .insert(key, value)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{HttpResponse, test, web};

    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, session_test_app};

    async fn sign_in(session: SessionContext) -> Result<HttpResponse, Error> {
        let loaded = session.load();
        let mut current = loaded.clone();
        current.sign_in("bob");
        session.store(&loaded, &current)?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> HttpResponse {
        let current = session.load();
        HttpResponse::Ok().body(current.authenticated_username().unwrap_or("-").to_owned())
    }

    async fn sign_out(session: SessionContext) -> Result<HttpResponse, Error> {
        let loaded = session.load();
        let mut current = loaded.clone();
        current.clear();
        session.store(&loaded, &current)?;
        Ok(HttpResponse::Ok().finish())
    }

    #[actix_web::test]
    async fn round_trips_client_session() {
        let app = test::init_service(
            session_test_app()
                .route("/in", web::get().to(sign_in))
                .route("/me", web::get().to(whoami))
                .route("/out", web::get().to(sign_out)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/in").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/me")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "bob");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/out").cookie(cookie).to_request(),
        )
        .await;
        let removal = session_cookie(&res).expect("removal cookie");
        assert_eq!(removal.value(), "");
    }

    #[actix_web::test]
    async fn unchanged_session_sets_no_cookie() {
        let app = test::init_service(session_test_app().route("/me", web::get().to(whoami))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;

        assert!(session_cookie(&res).is_none());
        assert_eq!(test::read_body(res).await, "-");
    }
}
