//! Core error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::response::ErrorResponse;

pub const NOT_FOUND_MESSAGE: &str = "Endpoint non trouvé";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur";

/// Errors a handler can surface to the caller.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    /// Generic not-found used for unmatched routes.
    pub fn endpoint_not_found() -> Self {
        CoreError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
