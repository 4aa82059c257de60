//! Promotions data source.
//!
//! The storefront has no backend; the mock source sleeps for a configured
//! delay and hands back the built-in banners.

use std::time::Duration;
use thiserror::Error;
use crate::domain::aggregates::Promotion;
use crate::fixtures;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromotionsError {
    #[error("Promotions unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed promotions payload: {0}")]
    Malformed(String),
}

/// Anything that can produce the current list of promotions.
pub trait PromotionSource {
    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, PromotionsError>;
}

#[derive(Clone, Debug)]
pub struct MockPromotionSource {
    delay: Duration,
}

impl MockPromotionSource {
    pub fn new(delay: Duration) -> Self { Self { delay } }
}

impl Default for MockPromotionSource {
    fn default() -> Self { Self::new(Duration::from_millis(500)) }
}

impl PromotionSource for MockPromotionSource {
    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, PromotionsError> {
        tokio::time::sleep(self.delay).await;
        Ok(fixtures::sample_promotions())
    }
}

/// Source backed by a JSON payload, as a real endpoint would return it.
#[derive(Clone, Debug)]
pub struct JsonPromotionSource {
    payload: String,
}

impl JsonPromotionSource {
    pub fn new(payload: impl Into<String>) -> Self { Self { payload: payload.into() } }
}

impl PromotionSource for JsonPromotionSource {
    async fn fetch_promotions(&self) -> Result<Vec<Promotion>, PromotionsError> {
        serde_json::from_str(&self.payload).map_err(|e| PromotionsError::Malformed(e.to_string()))
    }
}
