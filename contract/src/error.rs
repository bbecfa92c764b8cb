//! API error model shared by the browser and terminal clients.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried or classified beyond what callers need to render a
//! status line: the display text of every variant is the message shown to
//! the student.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Which request helper produced a failure; selects the fallback wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// JSON request/response (`/health`, `/generate-scenarios`, results lookup).
    Json,
    /// Multipart upload (`/upload-*`, `/submit-response`).
    Upload,
}

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the server's error text or a fallback.
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("{0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Rejected locally before sending.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a failed response's status and body.
    #[must_use]
    pub fn from_response(status: u16, body: &str, kind: RequestKind) -> Self {
        Self::Server { status, detail: error_detail(status, body, kind) }
    }
}

/// Extract the user-facing error text from a failed response body.
///
/// Uses the JSON `detail` field when present. A string detail is returned
/// verbatim; structured details (validation error lists) are rendered as
/// compact JSON. A JSON body without a usable `detail` falls back to a
/// status-based message. A body that is not JSON at all (proxy HTML, empty)
/// yields `"Unknown error"` or `"Upload failed"`.
#[must_use]
pub fn error_detail(status: u16, body: &str, kind: RequestKind) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return unparsed_message(kind).to_owned();
    };

    match json.get("detail") {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        Some(Value::Null | Value::String(_)) | None => fallback_message(status, kind),
        Some(other) => other.to_string(),
    }
}

fn unparsed_message(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::Json => "Unknown error",
        RequestKind::Upload => "Upload failed",
    }
}

fn fallback_message(status: u16, kind: RequestKind) -> String {
    match kind {
        RequestKind::Json => format!("HTTP error! status: {status}"),
        RequestKind::Upload => format!("Upload failed: {status}"),
    }
}
