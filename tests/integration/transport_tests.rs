use crate::common::{
    closed_address, create_test_configuration, create_test_executor, silent_listener,
};
use mockito::Matcher;
use tracking3_client::prelude::*;
use tracking3_client::transport::codes;

#[test]
fn test_get_request_reaches_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/user/self")
        .match_header("accept", "application/json")
        .match_header("authorization", "Bearer test-access-token")
        .match_header("x-strip-leading-brackets", "false")
        .match_header("x-id-application", "integration-tests")
        .match_header(
            "user-agent",
            Matcher::Regex(r"^Tracking3 Core Rust Client \d+\.\d+\.\d+$".to_string()),
        )
        .with_status(200)
        .with_body(")]}',\n{\"id\":\"u-1\"}")
        .create();

    let mut executor = create_test_executor();
    let envelope = executor
        .do_request(
            Method::GET,
            &format!("{}/v1/user/self", server.url()),
            &create_test_configuration(),
            None,
            None,
            None,
        )
        .unwrap();

    mock.assert();
    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.json().unwrap()["id"], "u-1");
    assert!(!executor.transport().is_open());
}

#[test]
fn test_json_body_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/project")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Alpha", "tags": ["a", "b"]})))
        .with_status(201)
        .with_body("......{\"id\":7}")
        .create();

    let mut executor = create_test_executor();
    let envelope = executor
        .do_request(
            Method::POST,
            &format!("{}/v1/project", server.url()),
            &create_test_configuration(),
            Some(&json!({"name": "Alpha", "tags": ["a", "b"]})),
            None,
            None,
        )
        .unwrap();

    mock.assert();
    assert_eq!(envelope.status, 201);
    assert_eq!(envelope.body, "{\"id\":7}");
}

#[test]
fn test_multipart_upload_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/document")
        .match_header(
            "content-type",
            Matcher::Regex(r"^multipart/form-data; boundary=-{21}[0-9a-f]{32}$".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="meta\[title\]"\r\n\r\nQuarterly\r\n"#.to_string()),
            Matcher::Regex(
                r#"name="file"; filename="report.txt"\r\nContent-Type: text/plain\r\n\r\nnumbers\r\n"#
                    .to_string(),
            ),
        ]))
        .with_status(201)
        .with_body("......{}")
        .create();

    let file = FileAttachment::new("/var/tmp/report.txt", b"numbers".to_vec());
    let mut executor = create_test_executor();
    let envelope = executor
        .do_request(
            Method::POST,
            &format!("{}/v1/document", server.url()),
            &create_test_configuration(),
            Some(&json!({"meta": {"title": "Quarterly"}})),
            Some(&file),
            None,
        )
        .unwrap();

    mock.assert();
    assert_eq!(envelope.status, 201);
    assert_eq!(envelope.body, "{}");
}

#[test]
fn test_server_error_is_an_envelope() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/v1/project/1")
        .with_status(503)
        .with_body(")]}',\nunavailable")
        .create();

    let mut executor = create_test_executor();
    let envelope = executor
        .do_request(
            Method::DELETE,
            &format!("{}/v1/project/1", server.url()),
            &create_test_configuration(),
            None,
            None,
            None,
        )
        .unwrap();

    mock.assert();
    assert_eq!(envelope.status, 503);
    assert_eq!(envelope.body, "unavailable");
}

#[test]
fn test_refused_connection_is_connection_error() {
    let address = closed_address();
    let mut executor = create_test_executor();
    let err = executor
        .do_request(
            Method::GET,
            &format!("http://{address}/v1/user/self"),
            &create_test_configuration(),
            None,
            None,
            None,
        )
        .unwrap_err();

    match err {
        RequestError::Connection { code, message } => {
            assert_eq!(code, codes::COULDNT_CONNECT);
            assert!(!message.is_empty());
        }
        other => panic!("Expected connection error, got {other:?}"),
    }
}

#[test]
fn test_silent_server_times_out() {
    let (_listener, address) = silent_listener();
    let mut executor = create_test_executor();
    let configuration = create_test_configuration().with_timeout(1);
    let err = executor
        .do_request(
            Method::GET,
            &format!("http://{address}/v1/slow"),
            &configuration,
            None,
            None,
            None,
        )
        .unwrap_err();

    assert_eq!(err, RequestError::Timeout { timeout_secs: 1 });
    assert_eq!(err.code(), TIMEOUT_ERROR_CODE);
}
