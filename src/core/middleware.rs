//! Core middleware

use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error::{CoreError, INTERNAL_ERROR_MESSAGE};

/// Runs each request inside a `request` span carrying a fresh request id,
/// then logs status and latency once the response is ready.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let start = Instant::now();
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if response.status().is_server_error() {
            warn!(status, elapsed_ms, "request failed");
        } else {
            info!(status, elapsed_ms, "request served");
        }
        response
    }
    .instrument(span)
    .await
}

/// Turns a handler panic into the 500 envelope. Used with `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "handler panicked");

    CoreError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string()).into_response()
}
