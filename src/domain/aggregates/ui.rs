//! UI Aggregate
//!
//! Per-section loading flags and error messages, keyed by section name.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    loading: BTreeMap<String, bool>,
    errors: BTreeMap<String, String>,
}

impl UiState {
    pub fn new() -> Self { Self::default() }

    pub fn is_loading(&self, key: &str) -> bool { self.loading.get(key).copied().unwrap_or(false) }
    pub fn error(&self, key: &str) -> Option<&str> { self.errors.get(key).map(String::as_str) }

    pub fn set_loading(&mut self, key: impl Into<String>, value: bool) { self.loading.insert(key.into(), value); }

    /// `None` clears the error for that section.
    pub fn set_error(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match value {
            Some(message) => { self.errors.insert(key, message); }
            None => { self.errors.remove(&key); }
        }
    }

    pub fn clear_error(&mut self, key: &str) { self.errors.remove(key); }
    pub fn clear_all_errors(&mut self) { self.errors.clear(); }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_loading_and_errors() {
        let mut ui = UiState::new();
        assert!(!ui.is_loading("home"));
        ui.set_loading("home", true);
        assert!(ui.is_loading("home"));
        ui.set_error("home", Some("Network unavailable".into()));
        ui.set_error("cart", Some("Out of stock".into()));
        assert_eq!(ui.error("home"), Some("Network unavailable"));
        ui.clear_error("home");
        assert_eq!(ui.error("home"), None);
        ui.clear_all_errors();
        assert_eq!(ui.error("cart"), None);
    }
}
