use async_trait::async_trait;

/// Round to cent precision, half-up.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive an item price from its catalog attributes and the gold reference
/// price per gram.
///
/// The popularity score in [0, 1] becomes a multiplier in [1, 2], so more
/// popular pieces cost proportionally more for the same material. Pure and
/// total: inputs are validated at catalog load, nothing is rejected here.
pub fn compute_price(popularity_score: f64, weight: f64, price_per_gram: f64) -> f64 {
    round_to_cents((popularity_score + 1.0) * weight * price_per_gram)
}

/// A resolved gold reference price, per gram.
///
/// Both variants collapse to a plain number at the pipeline boundary via
/// [`GoldQuote::per_gram`]; the `Fallback` reason exists so "why did we
/// price against the constant" survives into the logs without leaking into
/// the response contract.
#[derive(Debug, Clone, PartialEq)]
pub enum GoldQuote {
    /// Live spot price fetched from the upstream source.
    Live(f64),
    /// Fixed substitute used after a failed or malformed fetch.
    Fallback { per_gram: f64, reason: String },
}

impl GoldQuote {
    pub fn per_gram(&self) -> f64 {
        match self {
            GoldQuote::Live(per_gram) => *per_gram,
            GoldQuote::Fallback { per_gram, .. } => *per_gram,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GoldQuote::Fallback { .. })
    }
}

/// Source of the gold reference price.
///
/// Implementations must not fail outward: whatever happens upstream, the
/// catalog has to render a price, so a failed fetch resolves to
/// [`GoldQuote::Fallback`] rather than an error.
#[async_trait]
pub trait ReferencePriceProvider: Send + Sync {
    async fn quote(&self) -> GoldQuote;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formula_matches_popularity_weight_gold() {
        // (0.5 + 1) * 2.0 * 65.0
        assert_eq!(compute_price(0.5, 2.0, 65.0), 195.0);
        // zero popularity still prices the material
        assert_eq!(compute_price(0.0, 1.0, 65.0), 65.0);
        // full popularity doubles it
        assert_eq!(compute_price(1.0, 1.0, 65.0), 130.0);
    }

    #[test]
    fn price_rounds_half_up_at_the_cent() {
        // 1.5 * 1.0 * 64.67666... = 97.015 -> 97.02 after rounding
        assert_eq!(compute_price(0.5, 1.0, 64.67667), 97.02);
        assert_eq!(round_to_cents(97.015), 97.02);
        assert_eq!(round_to_cents(97.014), 97.01);
    }

    #[test]
    fn price_is_monotone_in_each_argument() {
        let base = compute_price(0.5, 2.0, 65.0);
        assert!(compute_price(0.6, 2.0, 65.0) >= base);
        assert!(compute_price(0.5, 2.5, 65.0) >= base);
        assert!(compute_price(0.5, 2.0, 70.0) >= base);
    }

    #[test]
    fn quote_collapses_to_per_gram() {
        assert_eq!(GoldQuote::Live(100.0).per_gram(), 100.0);

        let fallback = GoldQuote::Fallback {
            per_gram: 65.0,
            reason: "upstream returned status 503".to_string(),
        };
        assert_eq!(fallback.per_gram(), 65.0);
        assert!(fallback.is_fallback());
        assert!(!GoldQuote::Live(100.0).is_fallback());
    }
}
