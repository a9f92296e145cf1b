use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use aurum_catalog::pricing::{round_to_cents, GoldQuote, ReferencePriceProvider};

/// Grams per troy ounce. The upstream source quotes per ounce, pricing
/// works per gram.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Price per gram substituted whenever the upstream source is unusable.
/// Availability over accuracy: the catalog must always render a price.
pub const FALLBACK_PER_GRAM: f64 = 65.0;

const USER_AGENT: &str = "Aurum-Storefront/1.0";

/// Raw spot payload. Both fields optional so a shape mismatch surfaces as
/// a validation failure instead of a deserialization error.
#[derive(Debug, Deserialize)]
struct SpotPayload {
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GoldPriceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream payload missing a usable price or symbol mismatch")]
    UnexpectedPayload,
}

/// Client for the external gold spot-price source.
///
/// One attempt per call, no retry or backoff. The transport's own timeout
/// bounds the request.
pub struct GoldPriceClient {
    client: Client,
    base_url: String,
    symbol: String,
}

impl GoldPriceClient {
    pub fn new(base_url: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            symbol: symbol.into(),
        }
    }

    async fn fetch_per_gram(&self) -> Result<f64, GoldPriceError> {
        let url = format!(
            "{}/price/{}",
            self.base_url.trim_end_matches('/'),
            self.symbol
        );
        debug!("Fetching gold spot price from {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GoldPriceError::Status(response.status().as_u16()));
        }

        let payload: SpotPayload = response.json().await?;
        per_gram_from_payload(&payload, &self.symbol)
    }
}

/// Validate the spot payload and convert ounce price to a per-gram price
/// at cent precision.
fn per_gram_from_payload(payload: &SpotPayload, expected_symbol: &str) -> Result<f64, GoldPriceError> {
    match (payload.price, payload.symbol.as_deref()) {
        (Some(price), Some(symbol))
            if symbol == expected_symbol && price.is_finite() && price > 0.0 =>
        {
            Ok(round_to_cents(price / GRAMS_PER_TROY_OUNCE))
        }
        _ => Err(GoldPriceError::UnexpectedPayload),
    }
}

#[async_trait]
impl ReferencePriceProvider for GoldPriceClient {
    async fn quote(&self) -> GoldQuote {
        match self.fetch_per_gram().await {
            Ok(per_gram) => GoldQuote::Live(per_gram),
            Err(err) => {
                warn!("Gold spot fetch failed, pricing against fallback: {}", err);
                GoldQuote::Fallback {
                    per_gram: FALLBACK_PER_GRAM,
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: Option<f64>, symbol: Option<&str>) -> SpotPayload {
        SpotPayload {
            price,
            symbol: symbol.map(|s| s.to_string()),
        }
    }

    #[test]
    fn converts_ounce_price_to_per_gram_cents() {
        // 3110.35 / 31.1035 is exactly 100
        let per_gram = per_gram_from_payload(&payload(Some(3110.35), Some("XAU")), "XAU").unwrap();
        assert_eq!(per_gram, 100.0);
    }

    #[test]
    fn rounds_converted_price_to_two_decimals() {
        // 2000 / 31.1035 = 64.3014...
        let per_gram = per_gram_from_payload(&payload(Some(2000.0), Some("XAU")), "XAU").unwrap();
        assert_eq!(per_gram, 64.3);
    }

    #[test]
    fn rejects_missing_price() {
        assert!(per_gram_from_payload(&payload(None, Some("XAU")), "XAU").is_err());
    }

    #[test]
    fn rejects_symbol_mismatch() {
        assert!(per_gram_from_payload(&payload(Some(3110.35), Some("XAG")), "XAU").is_err());
        assert!(per_gram_from_payload(&payload(Some(3110.35), None), "XAU").is_err());
    }

    #[test]
    fn rejects_non_positive_or_non_finite_price() {
        assert!(per_gram_from_payload(&payload(Some(0.0), Some("XAU")), "XAU").is_err());
        assert!(per_gram_from_payload(&payload(Some(-12.0), Some("XAU")), "XAU").is_err());
        assert!(per_gram_from_payload(&payload(Some(f64::NAN), Some("XAU")), "XAU").is_err());
    }

    #[test]
    fn spot_payload_tolerates_extra_fields() {
        let parsed: SpotPayload =
            serde_json::from_str(r#"{"price": 3110.35, "symbol": "XAU", "updatedAt": "now"}"#)
                .unwrap();
        assert_eq!(parsed.price, Some(3110.35));
    }

    #[tokio::test]
    async fn unreachable_source_resolves_to_fallback_quote() {
        // Nothing listens on the discard port; the connect fails fast.
        let client = GoldPriceClient::new("http://127.0.0.1:9", "XAU");
        let quote = client.quote().await;

        assert!(quote.is_fallback());
        assert_eq!(quote.per_gram(), FALLBACK_PER_GRAM);
    }
}
