use super::*;

#[test]
fn detail_string_is_surfaced_verbatim() {
    let body = r#"{"detail": "File must be a CSV"}"#;
    assert_eq!(error_detail(400, body, RequestKind::Upload), "File must be a CSV");
}

#[test]
fn missing_detail_falls_back_to_status_for_json_requests() {
    assert_eq!(error_detail(500, "{}", RequestKind::Json), "HTTP error! status: 500");
    assert_eq!(error_detail(404, r#"{"message": "nope"}"#, RequestKind::Json), "HTTP error! status: 404");
}

#[test]
fn missing_detail_falls_back_to_status_for_uploads() {
    assert_eq!(error_detail(413, "{}", RequestKind::Upload), "Upload failed: 413");
}

#[test]
fn non_json_body_uses_generic_message() {
    assert_eq!(error_detail(502, "<html>Bad Gateway</html>", RequestKind::Json), "Unknown error");
    assert_eq!(error_detail(502, "<html>Bad Gateway</html>", RequestKind::Upload), "Upload failed");
}

#[test]
fn empty_body_uses_generic_message() {
    assert_eq!(error_detail(500, "", RequestKind::Json), "Unknown error");
    assert_eq!(error_detail(413, "", RequestKind::Upload), "Upload failed");
}

#[test]
fn blank_or_null_detail_uses_fallback() {
    assert_eq!(error_detail(500, r#"{"detail": "  "}"#, RequestKind::Json), "HTTP error! status: 500");
    assert_eq!(error_detail(500, r#"{"detail": null}"#, RequestKind::Upload), "Upload failed: 500");
}

#[test]
fn structured_detail_renders_as_json() {
    let body = r#"{"detail": [{"loc": ["body", "role"], "msg": "field required"}]}"#;
    assert_eq!(
        error_detail(422, body, RequestKind::Json),
        r#"[{"loc":["body","role"],"msg":"field required"}]"#
    );
}

#[test]
fn server_error_displays_detail_only() {
    let err = ApiError::from_response(400, r#"{"detail": "Missing required field: role"}"#, RequestKind::Json);
    assert_eq!(err.to_string(), "Missing required field: role");
    assert!(matches!(err, ApiError::Server { status: 400, .. }));
}

#[test]
fn decode_error_is_prefixed() {
    assert_eq!(ApiError::Decode("expected value".to_owned()).to_string(), "invalid response body: expected value");
}
