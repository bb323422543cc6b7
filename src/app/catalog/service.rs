//! Catalog service over the fixed product list

use super::model::{CatalogStats, Product, SearchableProduct};
use crate::config::{AppConfig, API_VERSION};
use crate::core::error::CoreError;

pub const TOTAL_PRODUCTS: usize = 5;
pub const AVERAGE_PRICE: f64 = 47.99;
pub const TOTAL_STOCK: u32 = 575;

#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Rebuilt on every call; nothing is cached or shared between requests.
    fn products(&self) -> Vec<Product> {
        [
            (1, "Produit A", 29.99, 150),
            (2, "Produit B", 49.99, 75),
            (3, "Produit C", 19.99, 200),
            (4, "Produit D", 99.99, 30),
            (5, "Produit E", 39.99, 120),
        ]
        .into_iter()
        .map(|(id, name, price, stock)| Product {
            id,
            name: name.to_string(),
            price,
            stock,
        })
        .collect()
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products()
    }

    pub fn product_not_found(id: impl std::fmt::Display) -> CoreError {
        CoreError::NotFound(format!("Produit avec ID {} non trouvé", id))
    }

    pub fn get_product(&self, id: u64) -> Result<Product, CoreError> {
        self.products()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::product_not_found(id))
    }

    /// Case-insensitive substring match on the product name, in catalog order.
    pub fn search_products(&self, query: &str) -> Result<Vec<SearchableProduct>, CoreError> {
        if query.is_empty() {
            return Err(CoreError::BadRequest(
                "Paramètre de recherche \"q\" requis".to_string(),
            ));
        }

        let needle = query.to_lowercase();
        Ok(self
            .products()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(SearchableProduct::from)
            .collect())
    }

    pub fn stats(&self, config: &AppConfig) -> CatalogStats {
        CatalogStats {
            total_products: TOTAL_PRODUCTS,
            average_price: AVERAGE_PRICE,
            total_stock: TOTAL_STOCK,
            api_version: API_VERSION.to_string(),
            environment: config.env.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: Vec<u64> = CatalogService::new()
            .list_products()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn get_product_finds_each_id() {
        let service = CatalogService::new();
        for id in 1..=5 {
            assert_eq!(service.get_product(id).unwrap().id, id);
        }
    }

    #[test]
    fn get_product_reports_missing_id() {
        let err = CatalogService::new().get_product(42).unwrap_err();
        match err {
            CoreError::NotFound(msg) => assert_eq!(msg, "Produit avec ID 42 non trouvé"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let service = CatalogService::new();
        assert_eq!(service.search_products("produit").unwrap().len(), 5);
        assert_eq!(service.search_products("PRODUIT").unwrap().len(), 5);

        let hits = service.search_products("it c").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
        assert_eq!(hits[0].name, "Produit C");
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(CatalogService::new().search_products("ZZZ").unwrap().is_empty());
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(
            CatalogService::new().search_products(""),
            Err(CoreError::BadRequest(_))
        ));
    }

    #[test]
    fn reported_stats_agree_with_catalog() {
        let products = CatalogService::new().list_products();
        let stock: u32 = products.iter().map(|p| p.stock).sum();
        let average = products.iter().map(|p| p.price).sum::<f64>() / products.len() as f64;

        assert_eq!(products.len(), TOTAL_PRODUCTS);
        assert_eq!(stock, TOTAL_STOCK);
        assert!((average - AVERAGE_PRICE).abs() < 1e-9);
    }

    #[test]
    fn stats_carry_version_and_environment() {
        let config = AppConfig {
            env: "staging".to_string(),
            ..AppConfig::default()
        };
        let stats = CatalogService::new().stats(&config);
        assert_eq!(stats.api_version, "2.0.0");
        assert_eq!(stats.environment, "staging");
    }
}
