use crate::support::{ScriptedTransport, configuration};
use assert_json_diff::assert_json_eq;
use tracking3_client::prelude::*;

#[test]
fn test_timeout_outcome() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new("", 0, 28, "timed out"));
    let configuration = configuration().with_timeout(42);
    let err = executor
        .do_request(Method::GET, "https://x/v1", &configuration, None, None, None)
        .unwrap_err();

    assert_eq!(err, RequestError::Timeout { timeout_secs: 42 });
    assert_eq!(err.code(), TIMEOUT_ERROR_CODE);
    assert!(err.to_string().contains("42"));
    assert_eq!(executor.transport().closed, 1);
}

#[test]
fn test_connection_outcome() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new(
        "",
        502,
        35,
        "SSL connect error",
    ));
    let err = executor
        .do_request(Method::GET, "https://x/v1", &configuration(), None, None, None)
        .unwrap_err();

    assert_eq!(
        err,
        RequestError::Connection {
            code: 35,
            message: "SSL connect error".to_string()
        }
    );
    assert_eq!(executor.transport().closed, 1);
}

#[test]
fn test_success_outcome() {
    let mut executor =
        RequestExecutor::new(ScriptedTransport::new("ABCDEF{\"ok\":true}", 200, 0, ""));
    let envelope = executor
        .do_request(Method::GET, "https://x/v1", &configuration(), None, None, None)
        .unwrap();

    assert_eq!(
        envelope,
        ResponseEnvelope {
            status: 200,
            body: "{\"ok\":true}".to_string()
        }
    );
    assert_json_eq!(envelope.json().unwrap(), json!({"ok": true}));
    assert_eq!(executor.transport().executed, 1);
    assert_eq!(executor.transport().closed, 1);
}

#[test]
fn test_http_error_status_is_not_an_error() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new(
        ")]}',\n{\"message\":\"unauthorized\"}",
        401,
        0,
        "",
    ));
    let envelope = executor
        .do_request(Method::GET, "https://x/v1", &configuration(), None, None, None)
        .unwrap();
    assert_eq!(envelope.status, 401);
    assert_json_eq!(envelope.json().unwrap(), json!({"message": "unauthorized"}));
}

#[test]
fn test_json_body_passed_through() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new("ABCDEF", 204, 0, ""));
    let body = json!({"title": "Lorem", "nested": {"list": [1, 2]}});
    executor
        .do_request(Method::POST, "https://x/v1", &configuration(), Some(&body), None, None)
        .unwrap();

    match executor.transport().body() {
        Some(RequestBody::Json(sent)) => assert_json_eq!(sent, body),
        other => panic!("Expected JSON body, got {other:?}"),
    }
}

#[test]
fn test_multipart_request() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new("ABCDEF{}", 201, 0, ""));
    let file = FileAttachment::new("/home/me/photo.png", vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    let custom: HeaderSet = [("X-Custom", "1")].into_iter().collect();
    executor
        .do_request(
            Method::POST,
            "https://x/v1/upload",
            &configuration().with_access_token("AT"),
            Some(&json!({"meta": {"caption": "sunset"}})),
            Some(&file),
            Some(&custom),
        )
        .unwrap();

    let transport = executor.transport();
    let headers = transport.headers();
    assert!(headers.contains(&"Authorization: Bearer AT".to_string()));
    assert!(headers.contains(&"X-Custom: 1".to_string()));
    let content_type = headers
        .iter()
        .find_map(|line| line.strip_prefix("Content-Type: multipart/form-data; boundary="))
        .expect("multipart content type");

    let Some(RequestBody::Multipart(bytes)) = transport.body() else {
        panic!("Expected multipart body");
    };
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with(&format!("--{content_type}\r\n")));
    assert!(text.contains("name=\"meta[caption]\"\r\n\r\nsunset\r\n"));
    assert!(text.contains("filename=\"photo.png\"\r\nContent-Type: image/png\r\n"));
    assert!(text.ends_with(&format!("--{content_type}--\r\n")));
}

#[test]
fn test_executor_is_reusable_after_close() {
    let mut executor = RequestExecutor::new(ScriptedTransport::new("ABCDEFx", 200, 0, ""));
    for _ in 0..3 {
        let envelope = executor
            .do_request(Method::GET, "https://x/v1", &configuration(), None, None, None)
            .unwrap();
        assert_eq!(envelope.body, "x");
    }
    let transport = executor.into_transport();
    assert_eq!(transport.executed, 3);
    assert_eq!(transport.closed, 3);
}
