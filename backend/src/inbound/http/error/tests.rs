//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde::Deserialize;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn render(error: Error) -> (StatusCode, Option<String>, ErrorEnvelope) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("error envelope deserialises");
    (status, trace_id, envelope)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_renders_message_and_trace_header() {
    let error = Error::not_found("could not find user 'ghost'.").with_trace_id(TRACE_ID);

    let (status, trace_id, envelope) = render(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(
        envelope,
        ErrorEnvelope {
            error: "could not find user 'ghost'.".to_owned()
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("connection string leaked").with_trace_id(TRACE_ID);

    let (status, trace_id, envelope) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(envelope.error, "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn errors_without_trace_id_omit_the_header() {
    let (_, trace_id, _) = render(Error::invalid_request("bad")).await;
    assert!(trace_id.is_none());
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "only deserialised")]
    uri: String,
}

async fn accept(_: web::Json<Payload>) -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[rstest]
#[case::malformed("{not json")]
#[case::missing_field("{}")]
#[actix_web::test]
async fn json_config_renders_body_errors_as_bad_request(#[case] body: &'static str) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(accept)),
    )
    .await;
    let req = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();

    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = actix_test::read_body_json(res).await;
    assert!(envelope.error.starts_with("invalid request body"));
}
