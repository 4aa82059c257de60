//! Domain events
use crate::domain::value_objects::{NotificationId, ProductId, Quantity};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "slice", content = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    Cart(CartEvent),
    Favorites(FavoriteEvent),
    Notifications(NotificationEvent),
    Promotions(PromotionEvent),
}

impl DomainEvent {
    /// Toast text for events the shopper is told about.
    pub fn message(&self) -> Option<String> {
        match self {
            DomainEvent::Cart(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    ItemAdded { product_id: ProductId, name: String, quantity: Quantity },
    QuantityUpdated { product_id: ProductId, quantity: Quantity },
    ItemRemoved { product_id: ProductId, name: String, quantity: Quantity },
    Cleared,
}

/// Toast text shown to the shopper for each cart change.
impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded { name, quantity, .. } if quantity.value() == 1 => write!(f, "Added {name} to your cart"),
            Self::ItemAdded { name, quantity, .. } => write!(f, "Added {quantity} {name} to your cart"),
            Self::QuantityUpdated { quantity, .. } => write!(f, "Quantity updated to {quantity}"),
            Self::ItemRemoved { name, quantity, .. } if quantity.value() == 1 => write!(f, "Removed {name} from your cart"),
            Self::ItemRemoved { name, quantity, .. } => write!(f, "Removed {quantity} {name} from your cart"),
            Self::Cleared => write!(f, "All items removed from cart"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FavoriteEvent {
    Added { product_id: ProductId },
    Removed { product_id: ProductId },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    Added { notification_id: NotificationId },
    Read { notification_id: NotificationId },
    AllRead { count: usize },
    Removed { notification_id: NotificationId },
    Cleared,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionEvent {
    FetchStarted { generation: u64 },
    Loaded { count: usize },
    Failed { message: String },
    StaleDiscarded { generation: u64 },
}
