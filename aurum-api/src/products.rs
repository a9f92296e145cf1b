use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use aurum_catalog::filter::{price_catalog, FilterCriteria};
use crate::{error::AppError, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

/// Raw query parameters for `GET /products`.
///
/// Bounds arrive as strings so that a present-but-unparseable value can be
/// dropped instead of rejecting the request. The consumer treats filters as
/// best-effort hints; a typo'd bound means "no bound", not a 400.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    min_price: Option<String>,
    max_price: Option<String>,
    min_popularity: Option<String>,
    max_popularity: Option<String>,
}

impl ProductsQuery {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            min_price: parse_bound(self.min_price),
            max_price: parse_bound(self.max_price),
            min_popularity: parse_bound(self.min_popularity),
            max_popularity: parse_bound(self.max_popularity),
        }
    }
}

fn parse_bound(raw: Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

// ============================================================================
// Handlers
// ============================================================================

/// Catalog and spot price both move slowly relative to request volume, so
/// shared caches may serve this for a short window.
const CACHE_CONTROL_VALUE: &str = "public, s-maxage=300, stale-while-revalidate=600";

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products))
}

/// GET /products
/// Price the catalog at the current gold rate and apply the range filters.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let quote = state.gold.quote().await;
    let priced = price_catalog(&state.catalog, quote.per_gram(), &query.into_criteria());

    tracing::debug!(
        "Serving {} of {} products at {}/g",
        priced.len(),
        state.catalog.len(),
        quote.per_gram()
    );

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
        Json(priced),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_parse_plain_numbers() {
        assert_eq!(parse_bound(Some("195".to_string())), Some(195.0));
        assert_eq!(parse_bound(Some(" 0.6 ".to_string())), Some(0.6));
        assert_eq!(parse_bound(Some("-5".to_string())), Some(-5.0));
    }

    #[test]
    fn missing_or_malformed_bounds_are_absent() {
        assert_eq!(parse_bound(None), None);
        assert_eq!(parse_bound(Some("abc".to_string())), None);
        assert_eq!(parse_bound(Some("".to_string())), None);
        assert_eq!(parse_bound(Some("NaN".to_string())), None);
        assert_eq!(parse_bound(Some("inf".to_string())), None);
    }

    #[test]
    fn query_maps_to_criteria_field_by_field() {
        let query = ProductsQuery {
            min_price: Some("100".to_string()),
            max_price: Some("oops".to_string()),
            min_popularity: Some("0.6".to_string()),
            max_popularity: None,
        };
        let criteria = query.into_criteria();

        assert_eq!(criteria.min_price, Some(100.0));
        assert_eq!(criteria.max_price, None);
        assert_eq!(criteria.min_popularity, Some(0.6));
        assert_eq!(criteria.max_popularity, None);
    }
}
