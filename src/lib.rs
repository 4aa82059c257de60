//! Storefront Core
//!
//! State and browsing logic behind the mobile storefront, backed by
//! in-memory mock data.
//!
//! ## Features
//! - Catalog search, filtering and sorting
//! - Shopping cart with derived totals
//! - Favorites
//! - Notification inbox with unread tracking
//! - Promotions loading with stale-response protection
//! - Injectable store with dispatch, select and subscribe

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod services;
pub mod store;

use thiserror::Error;
use crate::domain::value_objects::{IdError, ProductId};

pub use config::Config;
pub use domain::aggregates::{
    Cart, CartError, CartItem, FavoriteItem, Favorites, Notification, NotificationData, NotificationLog, NotificationType, Product,
    Promotion, PromotionAction, PromotionsState, UiState,
};
pub use domain::catalog::{Catalog, FilterOptions, PriceRange, ProductQuery, SortKey, SortOrder, SortSpec};
pub use domain::events::DomainEvent;
pub use domain::value_objects::{Money, NotificationId, Quantity, QuantityError};
pub use store::{Action, AppState, Store};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid product {id}: {source}")]
    InvalidProduct { id: ProductId, source: validator::ValidationErrors },

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config value for {key}: {value}")]
    Config { key: &'static str, value: String },

    #[error("Cart update rejected: {0}")]
    Cart(#[from] CartError),

    #[error("Invalid promotion action: {0}")]
    InvalidPromotionAction(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
