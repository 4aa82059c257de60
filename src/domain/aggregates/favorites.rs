//! Favorites Aggregate

use serde::{Deserialize, Serialize};
use crate::domain::aggregates::Product;
use crate::domain::events::{DomainEvent, FavoriteEvent};
use crate::domain::value_objects::{Money, ProductId};

/// Presence in the set is what marks a product as favorited.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Favorites {
    items: Vec<FavoriteItem>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub image: String,
    pub category: String,
    pub rating: f64,
    pub in_stock: bool,
}

impl From<&Product> for FavoriteItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().clone(), name: p.name().to_string(), price: p.price(), original_price: p.original_price(),
            image: p.image().to_string(), category: p.category().to_string(), rating: p.rating(), in_stock: p.is_in_stock(),
        }
    }
}

impl Favorites {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[FavoriteItem] { &self.items }
    pub fn contains(&self, id: &ProductId) -> bool { self.items.iter().any(|i| &i.id == id) }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Returns `true` if the product is favorited after the toggle.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i.id == *product.id()) {
            self.items.remove(pos);
            self.raise_event(DomainEvent::Favorites(FavoriteEvent::Removed { product_id: product.id().clone() }));
            false
        } else {
            self.items.push(FavoriteItem::from(product));
            self.raise_event(DomainEvent::Favorites(FavoriteEvent::Added { product_id: product.id().clone() }));
            true
        }
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(ProductId::new(id).unwrap(), format!("Product {id}"), Money::from_major(10), "Bakery")
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favs = Favorites::new();
        assert!(favs.toggle(&product("1")));
        assert!(favs.contains(&ProductId::new("1").unwrap()));
        assert!(!favs.toggle(&product("1")));
        assert!(favs.is_empty());
    }
    #[test]
    fn test_double_toggle_restores_state() {
        let mut favs = Favorites::new();
        favs.toggle(&product("1"));
        favs.toggle(&product("2"));
        let before = favs.items().to_vec();
        for id in ["2", "3"] {
            favs.toggle(&product(id));
            favs.toggle(&product(id));
        }
        let ids: Vec<_> = favs.items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), before.len());
        assert!(before.iter().all(|i| favs.contains(&i.id)));
    }
    #[test]
    fn test_insertion_order() {
        let mut favs = Favorites::new();
        for id in ["5", "1", "3"] { favs.toggle(&product(id)); }
        let ids: Vec<_> = favs.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "1", "3"]);
    }
}
