//! Infrastructure layer

pub mod logger;
