//! Shared REST contract for the readiness simulator backend.
//!
//! This crate owns the request/response shapes used by both `client` (browser)
//! and `cli` (terminal). The backend is owned externally, so every decoded type
//! tolerates missing fields and falls back to empty defaults.

pub mod endpoints;
pub mod error;
pub mod present;
pub mod types;

pub use endpoints::UploadKind;
pub use error::{ApiError, RequestKind};
pub use types::*;

/// Default backend base URL when `READINESS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
