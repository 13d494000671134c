//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("valid UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(trace_id: TraceId) {
    let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(err.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
fn display_uses_message() {
    let err = Error::not_found("no such dad").with_trace_id("abc");
    assert_eq!(err.to_string(), "no such dad");
    assert_eq!(err.trace_id(), Some("abc"));
}

#[rstest]
fn code_names_are_snake_case() {
    assert_eq!(ErrorCode::ServiceUnavailable.as_str(), "service_unavailable");
}
