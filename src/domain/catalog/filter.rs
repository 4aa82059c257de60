//! Filter options for catalog browsing.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::aggregates::Product;
use crate::domain::value_objects::Money;

/// Category entry that disables the category restriction.
pub const ALL_CATEGORIES: &str = "All";

/// Upper bound of the price slider when filters are cleared.
pub const DEFAULT_MAX_PRICE: i64 = 1000;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_price_range", skip_on_field_errors = false))]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self { Self { min, max } }

    pub fn contains(&self, price: Money) -> bool { self.min <= price && price <= self.max }
}

impl Default for PriceRange {
    fn default() -> Self { Self::new(Money::ZERO, Money::from_major(DEFAULT_MAX_PRICE)) }
}

fn validate_price_range(range: &PriceRange) -> Result<(), ValidationError> {
    if range.min.is_negative() { return Err(ValidationError::new("negative_min_price")); }
    if range.min > range.max { return Err(ValidationError::new("min_above_max")); }
    Ok(())
}

/// Filters applied on top of the search text.
///
/// The default value is the "clear filters" state: every category, prices
/// from 0 to [`DEFAULT_MAX_PRICE`], no rating floor, out-of-stock included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub category: Vec<String>,
    #[validate]
    pub price_range: PriceRange,
    /// Minimum rating, inclusive. Zero disables the filter.
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    pub in_stock: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self { category: vec![ALL_CATEGORIES.to_string()], price_range: PriceRange::default(), rating: 0.0, in_stock: false }
    }
}

impl FilterOptions {
    pub fn all_categories(&self) -> bool { self.category.iter().any(|c| c == ALL_CATEGORIES) }

    /// Selects the category if it is not selected yet, deselects it otherwise.
    pub fn toggle_category(&mut self, name: &str) {
        match self.category.iter().position(|c| c == name) {
            Some(pos) => { self.category.remove(pos); }
            None => self.category.push(name.to_string()),
        }
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.all_categories() || self.category.iter().any(|c| c == product.category())
    }
    pub fn matches_price(&self, product: &Product) -> bool { self.price_range.contains(product.price()) }
    pub fn matches_rating(&self, product: &Product) -> bool { product.rating() >= self.rating }
    pub fn matches_stock(&self, product: &Product) -> bool { !self.in_stock || product.is_in_stock() }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_price(product) && self.matches_rating(product) && self.matches_stock(product)
    }
}

/// Case-insensitive substring match against name and category. An empty
/// search matches everything.
pub fn matches_search(search: &str, product: &Product) -> bool {
    let needle = search.to_lowercase();
    product.name().to_lowercase().contains(&needle) || product.category().to_lowercase().contains(&needle)
}

/// Whether the results header should offer a "clear filters" action.
pub fn has_active_filters(search: &str, filters: &FilterOptions) -> bool {
    !search.is_empty() || filters.category.len() > 1 || filters.rating > 0.0 || filters.in_stock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProductId;

    fn milk() -> Product {
        Product::new(ProductId::new("3").unwrap(), "Fresh Milk 1L", Money::from_major(55), "Dairy").with_rating(4.3, 156)
    }

    #[test]
    fn test_defaults_match_everything_in_range() {
        let filters = FilterOptions::default();
        assert!(filters.matches(&milk()));
        assert!(filters.validate().is_ok());
    }
    #[test]
    fn test_toggle_category() {
        let mut filters = FilterOptions::default();
        filters.toggle_category("Dairy");
        assert_eq!(filters.category, vec!["All", "Dairy"]);
        filters.toggle_category(ALL_CATEGORIES);
        assert_eq!(filters.category, vec!["Dairy"]);
        assert!(filters.matches_category(&milk()));
        filters.toggle_category("Dairy");
        assert!(!filters.matches_category(&milk()));
    }
    #[test]
    fn test_search_is_case_insensitive_on_name_and_category() {
        assert!(matches_search("MILK", &milk()));
        assert!(matches_search("dai", &milk()));
        assert!(matches_search("", &milk()));
        assert!(!matches_search("bread", &milk()));
    }
    #[test]
    fn test_price_bounds_are_inclusive() {
        let range = PriceRange::new(Money::from_major(55), Money::from_major(55));
        assert!(range.contains(Money::from_major(55)));
        assert!(!range.contains(Money::from_major(56)));
    }
    #[test]
    fn test_validation_rejects_inverted_range_and_bad_rating() {
        let filters = FilterOptions {
            price_range: PriceRange::new(Money::from_major(100), Money::from_major(10)),
            rating: 7.0,
            ..Default::default()
        };
        let errors = filters.validate().unwrap_err();
        assert!(errors.errors().contains_key("price_range"));
        assert!(errors.errors().contains_key("rating"));
    }
    #[test]
    fn test_has_active_filters() {
        let mut filters = FilterOptions::default();
        assert!(!has_active_filters("", &filters));
        assert!(has_active_filters("rice", &filters));
        filters.in_stock = true;
        assert!(has_active_filters("", &filters));
        filters = FilterOptions { rating: 4.0, ..Default::default() };
        assert!(has_active_filters("", &filters));
    }
}
