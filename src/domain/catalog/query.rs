//! Catalog query: search text, filters and sort in one pass.

use serde::{Deserialize, Serialize};
use crate::domain::aggregates::Product;
use crate::domain::catalog::filter::{matches_search, FilterOptions};
use crate::domain::catalog::sort::SortSpec;

/// A browsing query. Missing fields take their defaults: empty search,
/// cleared filters, name ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductQuery {
    pub search: String,
    pub filters: FilterOptions,
    pub sort: SortSpec,
}

impl ProductQuery {
    pub fn new() -> Self { Self::default() }

    pub fn with_search(mut self, search: impl Into<String>) -> Self { self.search = search.into(); self }
    pub fn with_filters(mut self, filters: FilterOptions) -> Self { self.filters = filters; self }
    pub fn with_sort(mut self, sort: SortSpec) -> Self { self.sort = sort; self }

    pub fn matches(&self, product: &Product) -> bool {
        matches_search(&self.search, product) && self.filters.matches(product)
    }

    pub fn run<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        query(catalog, &self.search, &self.filters, &self.sort)
    }
}

/// Products passing every predicate, ordered by `sort`. Ties keep catalog
/// order. The catalog itself is never reordered.
pub fn query<'a>(catalog: &'a [Product], search: &str, filters: &FilterOptions, sort: &SortSpec) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = catalog
        .iter()
        .filter(|p| matches_search(search, p) && filters.matches(p))
        .collect();
    results.sort_by(|a, b| sort.compare(a, b));
    results
}
