//! External data sources consumed by the store.
pub mod promotions;

pub use promotions::{JsonPromotionSource, MockPromotionSource, PromotionSource, PromotionsError};
