//! Response envelope types shared by every API handler.
//!
//! Successful responses are `{ "status": "success", "data": ... }`; failures
//! are `{ "status": "failure", "error": { "code", "kind", "message" } }`.
//! Use [`DataResponse::new`] instead of ad-hoc `serde_json::json!` so the
//! envelope stays consistent.

use axum::http::StatusCode;
use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Standard failure envelope.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    pub status: &'static str,
    pub error: ErrorBody,
}

/// Error payload inside [`FailureResponse`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric HTTP status code.
    pub code: u16,
    /// Machine-readable error kind, e.g. `NOT_FOUND`.
    pub kind: &'static str,
    /// Human-readable message, safe to show to clients.
    pub message: String,
}

impl FailureResponse {
    pub fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status: "failure",
            error: ErrorBody {
                code: status.as_u16(),
                kind,
                message,
            },
        }
    }
}
