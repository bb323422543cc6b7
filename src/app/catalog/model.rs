//! Catalog data model

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "prix")]
    pub price: f64,
    pub stock: u32,
}

/// The fields returned by search: a product without its stock level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchableProduct {
    pub id: u64,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "prix")]
    pub price: f64,
}

impl From<Product> for SearchableProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub average_price: f64,
    pub total_stock: u32,
    pub api_version: String,
    pub environment: String,
}

/// `GET /data` payload.
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub data: Vec<Product>,
}

/// `GET /data/{id}` payload.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub data: Product,
}

/// `GET /stats` payload.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub stats: CatalogStats,
}

/// `GET /api/v1/search` payload.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchableProduct>,
}
