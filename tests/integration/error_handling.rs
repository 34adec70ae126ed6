//! Error mapping through the full request path.

use crate::integration::mock_server::{MockServerFixture, REQUEST_ID};
use coffeehouse::lydia::{CREATE_SESSION_PATH, GET_SESSION_PATH, THINK_PATH};
use coffeehouse::transport::TransportError;
use coffeehouse::{ApiErrorKind, Error, LydiaAi};
use serde_json::json;

#[tokio::test]
async fn test_mapped_statuses_raise_their_kind() {
    let cases = [
        (400u16, ApiErrorKind::SessionInvalid),
        (401, ApiErrorKind::InvalidApiKey),
        (403, ApiErrorKind::ApiSuspended),
        (404, ApiErrorKind::SessionNotFound),
        (503, ApiErrorKind::AiError),
    ];

    for (status, expected) in cases {
        let fixture = MockServerFixture::new().await;
        let body = json!({"success": false, "message": format!("failure {status}")});
        let _mock = fixture
            .mock_raw(GET_SESSION_PATH, status as usize, &body.to_string(), Some(REQUEST_ID))
            .await;

        let err = fixture.lydia().get_session("abc123").await.unwrap_err();
        let api_err = err.api_error().expect("expected an API error");
        assert_eq!(api_err.kind, expected, "status {status}");
        assert_eq!(api_err.status_code, status);
        assert_eq!(api_err.content.as_ref(), Some(&body));
        assert_eq!(api_err.request_id.as_deref(), Some(REQUEST_ID));
        assert_eq!(api_err.message, format!("failure {status}"));
    }
}

#[tokio::test]
async fn test_invalid_api_key_message() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw(CREATE_SESSION_PATH, 401, r#"{"message": "bad key"}"#, None)
        .await;

    let err = fixture.lydia().create_session().await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::InvalidApiKey));
    let api_err = err.api_error().unwrap();
    assert_eq!(api_err.message, "bad key");
    assert_eq!(api_err.status_code, 401);
    assert!(api_err.request_id.is_none());
}

#[tokio::test]
async fn test_unmapped_status_is_unknown() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw(THINK_PATH, 500, r#"{"error": "boom"}"#, Some("r-500"))
        .await;

    let err = fixture.lydia().think_thought("s", "x").await.unwrap_err();
    let api_err = err.api_error().unwrap();
    assert_eq!(api_err.kind, ApiErrorKind::Unknown);
    assert_eq!(api_err.status_code, 500);
    assert_eq!(api_err.message, "Unknown");
    assert_eq!(err.request_id(), Some("r-500"));
}

#[tokio::test]
async fn test_non_json_body_is_unknown_without_content() {
    for status in [200usize, 404, 502] {
        let fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_raw(THINK_PATH, status, "<html>gateway</html>", None)
            .await;

        let err = fixture.lydia().think_thought("s", "x").await.unwrap_err();
        let api_err = err.api_error().unwrap();
        assert_eq!(api_err.kind, ApiErrorKind::Unknown, "status {status}");
        assert_eq!(api_err.status_code as usize, status);
        assert!(api_err.content.is_none());
        assert_eq!(api_err.message, "Unknown");
    }
}

#[tokio::test]
async fn test_missing_payload_is_malformed() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw(THINK_PATH, 200, r#"{"success": true}"#, Some(REQUEST_ID))
        .await;

    let err = fixture.lydia().think_thought("s", "x").await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }), "{err:?}");
    assert_eq!(err.request_id(), Some(REQUEST_ID));
}

fn field_path(err: &Error) -> Option<&str> {
    err.context().and_then(|c| c.field_path.as_deref())
}

#[tokio::test]
async fn test_missing_output_is_malformed() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw(THINK_PATH, 200, r#"{"payload": {"reply": "hi"}}"#, Some(REQUEST_ID))
        .await;

    let err = fixture.lydia().think_thought("s", "x").await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }), "{err:?}");
    assert!(err.kind().is_none());
    assert_eq!(field_path(&err), Some("payload.output"));
    assert_eq!(err.request_id(), Some(REQUEST_ID));
}

#[tokio::test]
async fn test_incomplete_session_payload_is_malformed() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw(
            CREATE_SESSION_PATH,
            200,
            r#"{"payload": {"session_id": "abc", "language": "en"}}"#,
            Some("rid-9"),
        )
        .await;

    let err = fixture.lydia().create_session().await.unwrap_err();
    assert_eq!(err.request_id(), Some("rid-9"));
    match err {
        Error::MalformedResponse { context, .. } => {
            assert_eq!(context.field_path.as_deref(), Some("payload.available"));
            assert_eq!(context.source.as_deref(), Some("lydia"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_mistyped_session_field_is_named() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"payload": {
        "session_id": "abc",
        "language": "en",
        "available": "yes",
        "expires": 1999999999
    }});
    let _mock = fixture
        .mock_raw(GET_SESSION_PATH, 200, &body.to_string(), Some(REQUEST_ID))
        .await;

    let err = fixture.lydia().get_session("abc").await.unwrap_err();
    assert_eq!(field_path(&err), Some("payload.available"));
    assert_eq!(err.request_id(), Some(REQUEST_ID));
}

#[tokio::test]
async fn test_fractional_expiry_is_accepted() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"payload": {
        "session_id": "abc",
        "language": "en",
        "available": true,
        "expires": 1999999999.0
    }});
    let _mock = fixture
        .mock_raw(GET_SESSION_PATH, 200, &body.to_string(), None)
        .await;

    let lydia = fixture.lydia();
    let session = lydia.get_session("abc").await.unwrap();
    assert_eq!(session.expires(), 1999999999);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // nothing listens on the discard port
    let lydia = LydiaAi::from_api(
        coffeehouse::Api::builder()
            .access_key("k")
            .endpoint("http://127.0.0.1:9")
            .build()
            .unwrap(),
    );
    let err = lydia.think_thought("s", "x").await.unwrap_err();
    assert!(
        matches!(err, Error::Transport(TransportError::Http(_))),
        "{err:?}"
    );
}
