//! Runtime configuration read from the environment.

use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use crate::domain::value_objects::Money;
use crate::{Result, StorefrontError};

pub const CATALOG_PATH: &str = "STOREFRONT_CATALOG_PATH";
pub const DELIVERY_FEE: &str = "STOREFRONT_DELIVERY_FEE";
pub const CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const PROMOTIONS_DELAY_MS: &str = "STOREFRONT_PROMOTIONS_DELAY_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Flat charge added at checkout.
    pub delivery_fee: Money,
    pub currency_symbol: String,
    /// Simulated latency of the mock promotions source.
    pub promotions_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            delivery_fee: Money::from_major(50),
            currency_symbol: "₹".to_string(),
            promotions_delay: Duration::from_millis(500),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(CATALOG_PATH).filter(|p| !p.is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(fee) = lookup(DELIVERY_FEE) {
            config.delivery_fee = Money::new(parse::<Decimal>(DELIVERY_FEE, &fee)?);
        }
        if let Some(symbol) = lookup(CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }
        if let Some(ms) = lookup(PROMOTIONS_DELAY_MS) {
            config.promotions_delay = Duration::from_millis(parse(PROMOTIONS_DELAY_MS, &ms)?);
        }
        if config.delivery_fee.is_negative() {
            return Err(StorefrontError::Config { key: DELIVERY_FEE, value: config.delivery_fee.to_string() });
        }
        Ok(config)
    }

    pub fn format_price(&self, amount: Money) -> String { format!("{}{}", self.currency_symbol, amount) }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| StorefrontError::Config { key, value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format_price(Money::from_major(45)), "₹45.00");
    }
    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (DELIVERY_FEE, "12.5"),
            (CURRENCY_SYMBOL, "$"),
            (PROMOTIONS_DELAY_MS, "0"),
            (CATALOG_PATH, "data/catalog.json"),
        ])).unwrap();
        assert_eq!(config.delivery_fee, Money::new(Decimal::new(125, 1)));
        assert_eq!(config.promotions_delay, Duration::ZERO);
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(config.format_price(Money::from_major(3)), "$3.00");
    }
    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(Config::from_lookup(lookup(&[(DELIVERY_FEE, "lots")])), Err(StorefrontError::Config { key: DELIVERY_FEE, .. })));
        assert!(Config::from_lookup(lookup(&[(DELIVERY_FEE, "-5")])).is_err());
        assert!(Config::from_lookup(lookup(&[(PROMOTIONS_DELAY_MS, "-1")])).is_err());
    }
}
