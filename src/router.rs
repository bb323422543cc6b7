//! Route table

use axum::{middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::app::{
    catalog::handler::{get_product, get_stats, list_products, search},
    system::handler::{health, home, not_found},
    AppState,
};
use crate::core::middleware::{handle_panic, request_logging_middleware};

/// Method and path pairs served, for the startup banner.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/data"),
    ("GET", "/data/:item_id"),
    ("GET", "/stats"),
    ("GET", "/api/v1/search"),
];

/// Build the full router. Unknown paths and unsupported methods both get the not-found body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/data", get(list_products).fallback(not_found))
        .route("/data/:item_id", get(get_product).fallback(not_found))
        .route("/stats", get(get_stats).fallback(not_found))
        .route("/api/v1/search", get(search).fallback(not_found))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
