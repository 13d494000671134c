//! Middleware giving every request a trace identifier and an access log line.
//!
//! The identifier lives in task-local storage for the duration of the
//! request (see [`TraceId`]) and is echoed in the `trace-id` response header.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Trace middleware factory.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use dad_rental::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let started = Instant::now();
        // The inner call must run inside the scope so extractors and handlers
        // observe the identifier.
        Box::pin(TraceId::scope(trace_id, {
            let fut = TraceId::sync_scope(trace_id, || self.service.call(req));
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, %trace_id, "failed to encode trace identifier header");
                    }
                }
                info!(
                    %trace_id,
                    %method,
                    %path,
                    status = res.status().as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "request handled"
                );
                Ok(res)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, test, web};

    use super::*;
    use crate::domain::Error as DomainError;

    async fn call_traced<F, Fut, Res>(handler: F) -> (ServiceResponse, String)
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app =
            test::init_service(App::new().wrap(Trace).route("/", web::get().to(handler))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let trace_id = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace id header")
            .to_owned();
        (res, trace_id)
    }

    #[actix_web::test]
    async fn handler_sees_the_header_trace_id() {
        let (res, trace_id) = call_traced(|| async {
            let id = TraceId::current().expect("trace id in scope");
            HttpResponse::Ok().body(id.to_string())
        })
        .await;

        let body = test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8"), trace_id);
    }

    #[actix_web::test]
    async fn errors_carry_the_request_trace_id() {
        let (res, trace_id) = call_traced(|| async {
            Err::<HttpResponse, _>(DomainError::internal("boom"))
        })
        .await;

        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8");
        assert!(body.contains(&trace_id));
        assert!(!body.contains("boom"));
    }
}
