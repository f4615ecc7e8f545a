//! Tests for the error payload constructors and serialisation contract.

use super::*;
use crate::domain::TraceId;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unprocessable("not a number"), ErrorCode::UnprocessableEntity)]
#[case(Error::unauthorized("no auth"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
    assert_eq!(err.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn new_substitutes_a_generic_message_for_blank_input() {
    let err = Error::new(ErrorCode::NotFound, "  ");
    assert_eq!(err.message(), "Not found");
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        Error::try_new(ErrorCode::InternalError, "boom")
            .expect("validation accepts non-empty message")
    })
    .await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn try_from_error_dto_clears_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let dto = ErrorDto {
        code: ErrorCode::InvalidRequest,
        message: "bad".to_owned(),
        trace_id: None,
        details: None,
    };

    let error = TraceId::scope(trace_id, async move {
        Error::try_from(dto).expect("conversion succeeds for valid payload without trace")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_and_omits_empty_fields(expected_trace_id: String) {
    let bare = serde_json::to_value(Error::not_found("missing")).expect("serialise");
    assert_eq!(bare, json!({"code": "not_found", "message": "missing"}));

    let full = serde_json::to_value(
        Error::unprocessable("count must be an integer")
            .with_trace_id(expected_trace_id.clone())
            .with_details(json!({"field": "count"})),
    )
    .expect("serialise");
    assert_eq!(
        full,
        json!({
            "code": "unprocessable_entity",
            "message": "count must be an integer",
            "traceId": expected_trace_id,
            "details": {"field": "count"}
        })
    );
}

#[rstest]
#[case(json!({"code": "invalid_request", "message": "bad", "trace_id": "abc"}), Some("abc"))]
#[case(json!({"code": "invalid_request", "message": "bad", "traceId": "abc"}), Some("abc"))]
#[case(json!({"code": "invalid_request", "message": "bad"}), None)]
fn deserialises_trace_id_spellings(
    #[case] payload: serde_json::Value,
    #[case] expected: Option<&str>,
) {
    let error: Error = serde_json::from_value(payload).expect("deserialise");
    assert_eq!(error.trace_id(), expected);
}

#[rstest]
#[case(json!({"code": "invalid_request", "message": "  "}))]
#[case(json!({"code": "invalid_request", "message": "bad", "traceId": " "}))]
#[case(json!({"code": "teapot", "message": "bad"}))]
fn deserialisation_rejects_invalid_payloads(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}
