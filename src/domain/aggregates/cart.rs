//! Cart Aggregate
//!
//! The ledger keeps `total` and `item_count` as stored fields. Every
//! mutation builds the new lines, computes both totals from them with
//! checked arithmetic and only then commits all three together. A mutation
//! that would overflow is rejected and leaves the cart untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::aggregates::Product;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::{Money, ProductId, Quantity, QuantityError};

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: u32,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub image: String,
    pub quantity: Quantity,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CartItem {
    pub fn from_product(product: &Product, quantity: Quantity) -> Self {
        Self {
            id: product.id().clone(), name: product.name().to_string(), price: product.price(),
            original_price: product.original_price(), image: product.image().to_string(),
            quantity, in_stock: product.is_in_stock(), category: Some(product.category().to_string()),
        }
    }

    /// `None` when `price * quantity` does not fit a decimal.
    pub fn line_total(&self) -> Option<Money> { self.price.checked_multiply(self.quantity) }
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> { self.items.iter().find(|i| &i.id == id) }
    pub fn total(&self) -> Money { self.total }
    /// Sum of quantities across all lines, not the number of lines.
    pub fn item_count(&self) -> u32 { self.item_count }
    pub fn line_count(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Subtotal plus a flat delivery charge; an empty cart is not charged.
    pub fn grand_total(&self, delivery_fee: Money) -> Money {
        if self.is_empty() { Money::ZERO } else { self.total.saturating_add(delivery_fee) }
    }

    /// Adds a line, or accumulates quantity onto the existing line for the
    /// same product. Other fields of an existing line are left untouched.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        let event = CartEvent::ItemAdded { product_id: item.id.clone(), name: item.name.clone(), quantity: item.quantity };
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.checked_add(item.quantity).ok_or(CartError::Overflow)?;
            }
            None => items.push(item),
        }
        self.commit(items)?;
        self.raise_event(DomainEvent::Cart(event));
        Ok(())
    }

    /// Sets the quantity of an existing line. Zero or negative removes the
    /// line; unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        let quantity = match Quantity::new(quantity) {
            Ok(quantity) => quantity,
            Err(QuantityError::NotPositive) => return self.remove_item(id),
            Err(e) => return Err(CartError::InvalidQuantity(e)),
        };
        let mut items = self.items.clone();
        let Some(item) = items.iter_mut().find(|i| &i.id == id) else {
            tracing::debug!(product_id = %id, "quantity update for product not in cart ignored");
            return Ok(());
        };
        item.quantity = quantity;
        self.commit(items)?;
        self.raise_event(DomainEvent::Cart(CartEvent::QuantityUpdated { product_id: id.clone(), quantity }));
        Ok(())
    }

    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), CartError> {
        let Some(pos) = self.items.iter().position(|i| &i.id == id) else {
            tracing::debug!(product_id = %id, "remove for product not in cart ignored");
            return Ok(());
        };
        let mut items = self.items.clone();
        let removed = items.remove(pos);
        self.commit(items)?;
        self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { product_id: removed.id, name: removed.name, quantity: removed.quantity }));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::ZERO;
        self.item_count = 0;
        self.raise_event(DomainEvent::Cart(CartEvent::Cleared));
    }

    fn commit(&mut self, items: Vec<CartItem>) -> Result<(), CartError> {
        let (total, item_count) = totals(&items)?;
        self.items = items;
        self.total = total;
        self.item_count = item_count;
        Ok(())
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

fn totals(items: &[CartItem]) -> Result<(Money, u32), CartError> {
    items.iter().try_fold((Money::ZERO, 0u32), |(total, count), item| {
        let total = item.line_total().and_then(|line| total.checked_add(line)).ok_or(CartError::Overflow)?;
        let count = count.checked_add(item.quantity.value()).ok_or(CartError::Overflow)?;
        Ok((total, count))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)] pub enum CartError { Overflow, InvalidQuantity(QuantityError) }
impl std::error::Error for CartError {}
impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::Overflow => write!(f, "Cart total out of range"),
            CartError::InvalidQuantity(e) => write!(f, "{e}"),
        }
    }
}
