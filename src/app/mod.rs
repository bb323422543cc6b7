//! Application layer

use std::sync::Arc;

use crate::config::AppConfig;

pub mod catalog;
pub mod system;

use catalog::service::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            catalog_service: CatalogService::new(),
        }
    }
}
