use crate::pricing::compute_price;
use crate::product::{CatalogItem, PricedItem};

/// Optional inclusive bounds applied to the priced catalog.
///
/// An absent bound imposes no constraint. No relationship between min and
/// max is enforced: an inverted pair simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_popularity: Option<f64>,
    pub max_popularity: Option<f64>,
}

impl FilterCriteria {
    /// True when every active bound holds for the item, inclusively.
    pub fn matches(&self, priced: &PricedItem) -> bool {
        if let Some(min) = self.min_price {
            if priced.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if priced.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_popularity {
            if priced.item.popularity_score < min {
                return false;
            }
        }
        if let Some(max) = self.max_popularity {
            if priced.item.popularity_score > max {
                return false;
            }
        }
        true
    }
}

/// Price every catalog item at the given per-gram rate and drop the ones
/// failing an active bound.
///
/// The reference price is resolved once by the caller, not per item, and
/// catalog order is preserved. An empty result is a normal outcome.
pub fn price_catalog(
    items: &[CatalogItem],
    price_per_gram: f64,
    criteria: &FilterCriteria,
) -> Vec<PricedItem> {
    items
        .iter()
        .map(|item| PricedItem {
            price: compute_price(item.popularity_score, item.weight, price_per_gram),
            item: item.clone(),
        })
        .filter(|priced| criteria.matches(priced))
        .collect()
}
