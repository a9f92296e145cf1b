use serde::{Deserialize, Serialize};

/// Image variants for the three gold finishes a piece is offered in.
/// Which finish is shown is a client concern; the server always ships all three.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSet {
    pub yellow: String,
    pub rose: String,
    pub white: String,
}

/// One entry of the fixed catalog, as loaded at startup.
///
/// Invariants (`popularity_score` in [0, 1], `weight` strictly positive,
/// both finite) are enforced once at load via [`CatalogItem::validate`];
/// the pricing path relies on them and re-checks nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub name: String,
    pub popularity_score: f64,
    /// Mass in grams.
    pub weight: f64,
    pub images: ImageSet,
}

impl CatalogItem {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.popularity_score.is_finite()
            || !(0.0..=1.0).contains(&self.popularity_score)
        {
            return Err(CatalogError::PopularityOutOfRange {
                name: self.name.clone(),
                value: self.popularity_score,
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                name: self.name.clone(),
                value: self.weight,
            });
        }
        Ok(())
    }
}

/// A catalog item with its price derived for the current request.
/// Never persisted; rebuilt from (item, reference price) on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    /// USD, cent precision.
    pub price: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product {name:?} has popularity score {value}, expected [0, 1]")]
    PopularityOutOfRange { name: String, value: f64 },

    #[error("product {name:?} has weight {value}, expected a positive number of grams")]
    InvalidWeight { name: String, value: f64 },
}
