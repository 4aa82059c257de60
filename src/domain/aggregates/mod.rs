//! Aggregates module
pub mod product;
pub mod cart;
pub mod favorites;
pub mod notifications;
pub mod promotions;
pub mod ui;

pub use product::{Product, MAX_PRICE};
pub use cart::{Cart, CartError, CartItem};
pub use favorites::{FavoriteItem, Favorites};
pub use notifications::{Notification, NotificationData, NotificationLog, NotificationType};
pub use promotions::{FetchTicket, Promotion, PromotionAction, PromotionKind, PromotionsState};
pub use ui::UiState;
