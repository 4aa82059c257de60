//! Catalog Store
//!
//! Read-only product list plus the browsing query engine over it.

pub mod filter;
pub mod query;
pub mod sort;

pub use filter::{has_active_filters, FilterOptions, PriceRange, ALL_CATEGORIES, DEFAULT_MAX_PRICE};
pub use query::{query, ProductQuery};
pub use sort::{SortKey, SortOrder, SortSpec};

use std::collections::HashSet;
use std::path::Path;
use validator::Validate;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::ProductId;
use crate::{Result, StorefrontError};

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates every product and rejects duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate().map_err(|source| StorefrontError::InvalidProduct { id: product.id().clone(), source })?;
            if !seen.insert(product.id().clone()) {
                return Err(StorefrontError::DuplicateProduct(product.id().clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.as_ref().display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in mock catalog.
    pub fn sample() -> Self { Self { products: crate::fixtures::sample_products() } }

    pub fn products(&self) -> &[Product] { &self.products }
    pub fn get(&self, id: &ProductId) -> Option<&Product> { self.products.iter().find(|p| p.id() == id) }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products.iter().map(Product::category).filter(|c| seen.insert(*c)).collect()
    }

    /// Other products in the same category, catalog order.
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else { return vec![] };
        self.products
            .iter()
            .filter(|p| p.id() != id && p.category() == product.category())
            .take(limit)
            .collect()
    }

    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> { query.run(&self.products) }
}
