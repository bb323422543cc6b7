//! Logging infrastructure

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset. The service always runs verbose.
pub const DEFAULT_FILTER: &str = "devops_data_api=debug,tower_http=debug,info";

pub struct Logger;

impl Logger {
    /// `directives` comes from the loaded config, so a `RUST_LOG` in `.env` applies.
    pub fn init(directives: Option<&str>) {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(Self::filter(directives))
            .init();
    }

    pub fn filter(directives: Option<&str>) -> EnvFilter {
        directives
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directives_win() {
        assert!(Logger::filter(Some("warn")).to_string().contains("warn"));
    }

    #[test]
    fn falls_back_to_verbose_default() {
        let filter = Logger::filter(None).to_string();
        assert!(filter.contains("devops_data_api=debug"));
    }
}
