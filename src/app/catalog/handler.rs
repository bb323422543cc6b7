//! Catalog handlers

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use super::model::{ProductDetail, ProductList, SearchResults, StatsReport};
use super::service::CatalogService;
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<ProductList>> {
    let data = state.catalog_service.list_products();
    Json(ApiResponse::success(ProductList {
        count: data.len(),
        data,
    }))
}

/// Only plain decimal digits count as an item id; anything else is an unknown route.
/// Returns the digits without leading zeros.
fn parse_item_id(segment: &str) -> Option<&str> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match segment.trim_start_matches('0') {
        "" => Some("0"),
        digits => Some(digits),
    }
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, CoreError> {
    let digits = parse_item_id(&item_id).ok_or_else(CoreError::endpoint_not_found)?;
    // Too large for u64 means no product can match.
    let id = digits
        .parse::<u64>()
        .map_err(|_| CatalogService::product_not_found(digits))?;
    let data = state.catalog_service.get_product(id)?;
    Ok(Json(ApiResponse::success(ProductDetail { data })))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<StatsReport>> {
    let stats = state.catalog_service.stats(&state.config);
    Json(ApiResponse::success(StatsReport { stats }))
}

pub async fn search(
    State(state): State<AppState>,
    params: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<ApiResponse<SearchResults>>, CoreError> {
    // First `q` wins when the parameter is repeated.
    let query = params
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "q"))
        .map(|(_, value)| value)
        .unwrap_or_default();
    let results = state.catalog_service.search_products(&query)?;
    Ok(Json(ApiResponse::success(SearchResults {
        query,
        count: results.len(),
        results,
    })))
}

#[cfg(test)]
mod tests {
    use super::parse_item_id;

    #[test]
    fn item_id_accepts_digits_only() {
        assert_eq!(parse_item_id("3"), Some("3"));
        assert_eq!(parse_item_id("007"), Some("7"));
        assert_eq!(parse_item_id("000"), Some("0"));
        assert_eq!(
            parse_item_id("0099999999999999999999999"),
            Some("99999999999999999999999")
        );
        assert_eq!(parse_item_id("-1"), None);
        assert_eq!(parse_item_id("+1"), None);
        assert_eq!(parse_item_id("abc"), None);
        assert_eq!(parse_item_id(""), None);
    }
}
