//! # DevOps data API
//!
//! A small JSON service over a fixed catalog of five products:
//! health check, listing, lookup by id, aggregate stats and name search.
//!
//! Layers follow the usual split:
//! - `app`: handlers, services and models per feature
//! - `core`: error type, response envelopes, middleware
//! - `infrastructure`: logging setup
//! - `config`: environment-driven settings

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::AppState;
pub use config::{AppConfig, API_VERSION};
pub use router::create_router;
