//! HTTP inbound adapter: one server-rendered endpoint plus health probes.

pub mod dispatch;
pub mod error;
pub mod health;
pub mod session;
#[cfg(test)]
pub mod test_utils;
pub mod views;

use actix_web::web;

/// Register the application endpoint on `cfg`.
///
/// The caller supplies `web::Data<Controller>` and the session middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(dispatch::dispatch))
            .route(web::post().to(dispatch::dispatch)),
    );
}
