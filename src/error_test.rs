use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status { status: 400 }.to_string(), "unexpected status: 400");
}

#[test]
fn request_error_keeps_cause() {
    let err = ApiError::Request("connection refused".to_owned());
    assert_eq!(err.to_string(), "request failed: connection refused");
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}
