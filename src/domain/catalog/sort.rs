//! Sort selection for catalog results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use crate::domain::aggregates::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self { SortOrder::Asc => SortOrder::Desc, SortOrder::Desc => SortOrder::Asc }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl SortSpec {
    pub fn new(sort_by: SortKey, sort_order: SortOrder) -> Self { Self { sort_by, sort_order } }

    /// Pressing the active key flips the order; a new key starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            *self = Self::new(key, SortOrder::Asc);
        }
    }

    /// Equal keys compare `Equal` in both directions, so a stable sort keeps
    /// catalog order for ties.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Name => collate(a.name(), b.name()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Rating => a.rating().total_cmp(&b.rating()),
        };
        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive name order. Names that differ only in case put the
/// lower-case form first; identical names compare `Equal`.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
}
