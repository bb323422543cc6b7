//! Core layer: errors, envelopes, middleware

pub mod error;
pub mod middleware;
pub mod response;
