//! Product Aggregate
//!
//! Products come from the catalog data source and are read-only afterwards;
//! there is no product CRUD in the storefront.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::value_objects::{Money, ProductId};

/// Highest unit price a catalog product may carry.
pub const MAX_PRICE: i64 = 1_000_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_original_price", skip_on_field_errors = false))]
pub struct Product {
    id: ProductId,
    #[validate(length(min = 1))]
    name: String,
    #[validate(custom = "validate_price")]
    price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    original_price: Option<Money>,
    #[serde(default)]
    image: String,
    #[validate(length(min = 1))]
    category: String,
    #[validate(range(min = 0.0, max = 5.0))]
    rating: f64,
    #[serde(default)]
    reviews: u32,
    in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 100))]
    discount: Option<u8>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            id, name: name.into(), price, original_price: None, image: String::new(),
            category: category.into(), rating: 0.0, reviews: 0, in_stock: true, discount: None,
        }
    }

    pub fn with_original_price(mut self, original: Money) -> Self { self.original_price = Some(original); self }
    pub fn with_image(mut self, uri: impl Into<String>) -> Self { self.image = uri.into(); self }
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self { self.rating = rating; self.reviews = reviews; self }
    pub fn with_stock(mut self, in_stock: bool) -> Self { self.in_stock = in_stock; self }
    pub fn with_discount(mut self, percent: u8) -> Self { self.discount = Some(percent); self }

    pub fn id(&self) -> &ProductId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> Money { self.price }
    pub fn original_price(&self) -> Option<Money> { self.original_price }
    pub fn image(&self) -> &str { &self.image }
    pub fn category(&self) -> &str { &self.category }
    pub fn rating(&self) -> f64 { self.rating }
    pub fn reviews(&self) -> u32 { self.reviews }
    pub fn is_in_stock(&self) -> bool { self.in_stock }
    pub fn discount(&self) -> Option<u8> { self.discount }
}

fn validate_price(price: &Money) -> Result<(), ValidationError> {
    if price.is_negative() { return Err(ValidationError::new("negative_price")); }
    if *price > Money::from_major(MAX_PRICE) { return Err(ValidationError::new("price_out_of_range")); }
    Ok(())
}

fn validate_original_price(product: &Product) -> Result<(), ValidationError> {
    match product.original_price {
        Some(original) if original < product.price => Err(ValidationError::new("original_price_below_price")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn tomatoes() -> Product {
        Product::new(ProductId::new("1").unwrap(), "Fresh Organic Tomatoes", Money::from_major(45), "Vegetables")
            .with_original_price(Money::from_major(60))
            .with_rating(4.5, 128)
            .with_discount(25)
    }

    #[test]
    fn test_product_valid() {
        assert!(tomatoes().validate().is_ok());
    }
    #[test]
    fn test_product_rejects_bad_rating_and_discount() {
        let p = tomatoes().with_rating(5.5, 1).with_discount(120);
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("rating"));
        assert!(fields.contains_key("discount"));
    }
    #[test]
    fn test_product_rejects_negative_price_and_low_original() {
        let p = Product::new(ProductId::new("x").unwrap(), "X", Money::new(Decimal::new(-1, 0)), "Misc");
        assert!(p.validate().is_err());
        let p = Product::new(ProductId::new("y").unwrap(), "Y", Money::from_major(10), "Misc")
            .with_original_price(Money::from_major(5));
        assert!(p.validate().is_err());
    }
    #[test]
    fn test_product_rejects_price_above_max() {
        let p = Product::new(ProductId::new("z").unwrap(), "Z", Money::from_major(MAX_PRICE + 1), "Misc");
        assert!(p.validate().unwrap_err().field_errors().contains_key("price"));
        let p = Product::new(ProductId::new("z").unwrap(), "Z", Money::from_major(MAX_PRICE), "Misc");
        assert!(p.validate().is_ok());
    }
    #[test]
    fn test_product_json_fields() {
        let json = r#"{"id":"4","name":"Organic Spinach","price":35,"originalPrice":45,
            "image":"spinach.jpg","category":"Vegetables","rating":4.2,"reviews":67,"inStock":false,"discount":22}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id().as_str(), "4");
        assert_eq!(p.original_price(), Some(Money::from_major(45)));
        assert!(!p.is_in_stock());
        assert_eq!(p.discount(), Some(22));
    }
}
