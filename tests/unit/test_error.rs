use tracking3_client::prelude::*;

#[test]
fn test_timeout_error_display_and_code() {
    let error = RequestError::Timeout { timeout_secs: 60 };
    assert_eq!(error.to_string(), "Request exceeded timeout of 60");
    assert_eq!(error.code(), 1592833821);
    assert!(error.is_timeout());
}

#[test]
fn test_connection_error_display_and_code() {
    let error = RequestError::Connection {
        code: 6,
        message: "Could not resolve host: api.invalid".to_string(),
    };
    assert_eq!(error.to_string(), "Could not resolve host: api.invalid");
    assert_eq!(error.code(), 6);
    assert!(!error.is_timeout());
}

#[test]
fn test_config_error_codes() {
    assert_eq!(ConfigError::MissingPassword.code(), 1592824383);
    assert_eq!(ConfigError::MissingEmail.code(), 1592824491);
    assert_eq!(ConfigError::MissingEmail.to_string(), "missing email");
}

#[test]
fn test_app_error_from_request_error() {
    let app_error: AppError = RequestError::Timeout { timeout_secs: 5 }.into();
    match app_error {
        AppError::Request(RequestError::Timeout { timeout_secs }) => assert_eq!(timeout_secs, 5),
        _ => panic!("Expected Request error"),
    }
}

fn parse_envelope(envelope: &ResponseEnvelope) -> Result<Value, AppError> {
    Ok(envelope.json()?)
}

fn load_attachment(path: &str) -> Result<FileAttachment, AppError> {
    Ok(FileAttachment::read(path)?)
}

#[test]
fn test_unparsable_envelope_body_is_json_error() {
    let envelope = ResponseEnvelope {
        status: 502,
        body: "<html>Bad Gateway</html>".to_string(),
    };
    let err = parse_envelope(&envelope).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.to_string().starts_with("json error: "));
}

#[test]
fn test_missing_attachment_is_io_error() {
    let err = load_attachment("/nonexistent/tracking3/upload.pdf").unwrap_err();
    match err {
        AppError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_error_wrapped_in_app_error() {
    let err: AppError = Configuration::new("john@example.com", "").unwrap_err().into();
    assert_eq!(err.to_string(), "configuration error: missing password");
    assert!(matches!(err, AppError::Config(ConfigError::MissingPassword)));
}
