//! Promotions Aggregate
//!
//! Holds the banners shown on the home screen along with the loading and
//! error flags of the fetch that produced them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use crate::domain::events::{DomainEvent, PromotionEvent};
use crate::StorefrontError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind { Banner, Offer, News }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_action: Option<String>,
    #[serde(rename = "type")]
    pub kind: PromotionKind,
    pub active: bool,
    pub priority: u32,
}

impl Promotion {
    /// Parsed `button_action`, if the promotion has one.
    pub fn action(&self) -> Option<Result<PromotionAction, StorefrontError>> {
        self.button_action.as_deref().map(|action| action.parse())
    }
}

/// Where a promotion's button leads, e.g. `navigate:ProductList:category:Vegetables`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromotionAction {
    Navigate { screen: String, params: BTreeMap<String, String> },
}

impl FromStr for PromotionAction {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StorefrontError::InvalidPromotionAction(s.to_string());
        let mut parts = s.split(':');
        match parts.next() {
            Some("navigate") => {}
            _ => return Err(invalid()),
        }
        let screen = parts.next().filter(|p| !p.is_empty()).ok_or_else(invalid)?.to_string();
        let rest: Vec<&str> = parts.collect();
        if rest.len() % 2 != 0 { return Err(invalid()); }
        let params = rest.chunks(2).map(|kv| (kv[0].to_string(), kv[1].to_string())).collect();
        Ok(PromotionAction::Navigate { screen, params })
    }
}

/// Generation of the fetch a response belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 { self.0 }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PromotionsState {
    promotions: Vec<Promotion>,
    loading: bool,
    error: Option<String>,
    #[serde(skip)]
    generation: u64,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl PromotionsState {
    pub fn new() -> Self { Self::default() }

    pub fn promotions(&self) -> &[Promotion] { &self.promotions }
    pub fn is_loading(&self) -> bool { self.loading }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    /// Active promotions, lowest priority number first.
    pub fn active(&self) -> Vec<&Promotion> {
        let mut active: Vec<_> = self.promotions.iter().filter(|p| p.active).collect();
        active.sort_by_key(|p| p.priority);
        active
    }

    pub fn set_promotions(&mut self, promotions: Vec<Promotion>) {
        let count = promotions.len();
        self.promotions = promotions;
        self.loading = false;
        self.error = None;
        self.raise_event(DomainEvent::Promotions(PromotionEvent::Loaded { count }));
    }

    pub fn add_promotion(&mut self, promotion: Promotion) { self.promotions.push(promotion); }
    pub fn remove_promotion(&mut self, id: &str) { self.promotions.retain(|p| p.id != id); }
    pub fn set_loading(&mut self, loading: bool) { self.loading = loading; }

    pub fn set_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            self.raise_event(DomainEvent::Promotions(PromotionEvent::Failed { message: message.clone() }));
        }
        self.error = error;
        self.loading = false;
    }

    /// Starts a fetch. Any ticket handed out earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.raise_event(DomainEvent::Promotions(PromotionEvent::FetchStarted { generation: self.generation }));
        FetchTicket(self.generation)
    }

    /// Abandons the in-flight fetch, e.g. when the requesting screen goes away.
    pub fn cancel_fetch(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Applies a fetch outcome. Returns `false` and leaves the state alone
    /// when the ticket is stale.
    pub fn complete_fetch<E: std::fmt::Display>(&mut self, ticket: FetchTicket, result: Result<Vec<Promotion>, E>) -> bool {
        if ticket.0 != self.generation {
            tracing::warn!(generation = ticket.0, current = self.generation, "discarding stale promotions response");
            self.raise_event(DomainEvent::Promotions(PromotionEvent::StaleDiscarded { generation: ticket.0 }));
            return false;
        }
        match result {
            Ok(promotions) => self.set_promotions(promotions),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load promotions");
                self.set_error(Some(e.to_string()));
            }
        }
        true
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
