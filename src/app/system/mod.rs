//! Service-level endpoints

pub mod handler;
