//! Product catalog: listing, lookup, stats, search

pub mod handler;
pub mod model;
pub mod service;
