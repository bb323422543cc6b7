//! Response envelopes

use serde::Serialize;

/// Current time as an ISO-8601 string, generated fresh for every body.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Success envelope: `status: "success"`, the payload fields, and a timestamp.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(flatten)]
    pub data: T,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
            timestamp: timestamp(),
        }
    }
}

/// Error envelope shared by every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            timestamp: timestamp(),
        }
    }
}
