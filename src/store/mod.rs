//! Store Coordinator
//!
//! One state container per app session. The [`Store`] is a cheap handle:
//! clones share the same state, so screens get it injected, read the slice
//! they need through [`Store::select`], change it only through
//! [`Store::dispatch`] and listen for changes through [`Store::subscribe`].
//! Each dispatch runs to completion under the state lock before the next,
//! and subscribers are told about a change only after every derived field
//! has been updated.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use crate::domain::aggregates::{
    Cart, CartItem, Favorites, FetchTicket, Notification, NotificationLog, Product, Promotion, PromotionsState, UiState,
};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{NotificationId, ProductId};
use crate::services::{PromotionSource, PromotionsError};
use crate::Result;

const EVENT_CAPACITY: usize = 256;

#[derive(Clone, Debug, Default, Serialize)]
pub struct AppState {
    pub cart: Cart,
    pub favorites: Favorites,
    pub notifications: NotificationLog,
    pub promotions: PromotionsState,
    pub ui: UiState,
}

#[derive(Clone, Debug)]
pub enum Action {
    AddToCart(CartItem),
    RemoveFromCart(ProductId),
    UpdateQuantity { id: ProductId, quantity: i64 },
    ClearCart,
    ToggleFavorite(Product),
    AddNotification(Notification),
    MarkAsRead(NotificationId),
    MarkAllAsRead,
    ClearNotifications,
    RemoveNotification(NotificationId),
    SetPromotions(Vec<Promotion>),
    AddPromotion(Promotion),
    RemovePromotion(String),
    SetPromotionsLoading(bool),
    SetPromotionsError(Option<String>),
    SetLoading { key: String, value: bool },
    SetError { key: String, value: Option<String> },
    ClearError(String),
    ClearAllErrors,
}

#[derive(Clone, Debug)]
pub struct Store {
    state: Arc<Mutex<AppState>>,
    events: broadcast::Sender<DomainEvent>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { state: Arc::new(Mutex::new(state)), events }
    }

    /// Copy of the whole state as of now.
    pub fn snapshot(&self) -> AppState { self.select(AppState::clone) }

    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T { selector(&self.lock()) }

    /// Receives every domain event raised from now on. Slow receivers that
    /// fall more than the channel capacity behind see `Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> { self.events.subscribe() }

    /// Applies one action. A rejected cart update leaves the state as it was.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        tracing::debug!(?action, "dispatch");
        let mut state = self.lock();
        let outcome = apply(&mut state, action);
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "action rejected");
        }
        self.publish(&mut state);
        outcome
    }

    pub fn begin_promotions_fetch(&self) -> FetchTicket {
        let mut state = self.lock();
        let ticket = state.promotions.begin_fetch();
        self.publish(&mut state);
        ticket
    }

    pub fn complete_promotions_fetch(&self, ticket: FetchTicket, result: std::result::Result<Vec<Promotion>, PromotionsError>) -> bool {
        let mut state = self.lock();
        let applied = state.promotions.complete_fetch(ticket, result);
        self.publish(&mut state);
        applied
    }

    pub fn cancel_promotions_fetch(&self) {
        let mut state = self.lock();
        state.promotions.cancel_fetch();
        self.publish(&mut state);
    }

    /// Fetches promotions and applies the outcome. The state is not locked
    /// while the source is pending, so other handles can read `loading`,
    /// dispatch or cancel in the meantime. There is no timeout: a source
    /// that never answers leaves the slice loading.
    pub async fn load_promotions<S: PromotionSource>(&self, source: &S) -> bool {
        let ticket = self.begin_promotions_fetch();
        let result = source.fetch_promotions().await;
        if let Ok(promotions) = &result {
            tracing::info!(count = promotions.len(), "promotions fetched");
        }
        self.complete_promotions_fetch(ticket, result)
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &mut AppState) {
        let events = state.cart.take_events().into_iter()
            .chain(state.favorites.take_events())
            .chain(state.notifications.take_events())
            .chain(state.promotions.take_events());
        for event in events {
            // No subscribers is not an error.
            let _ = self.events.send(event);
        }
    }
}

impl Default for Store {
    fn default() -> Self { Self::new(AppState::default()) }
}

fn apply(state: &mut AppState, action: Action) -> Result<()> {
    match action {
        Action::AddToCart(item) => state.cart.add_item(item)?,
        Action::RemoveFromCart(id) => state.cart.remove_item(&id)?,
        Action::UpdateQuantity { id, quantity } => state.cart.update_quantity(&id, quantity)?,
        Action::ClearCart => state.cart.clear(),
        Action::ToggleFavorite(product) => { state.favorites.toggle(&product); }
        Action::AddNotification(n) => state.notifications.add(n),
        Action::MarkAsRead(id) => state.notifications.mark_as_read(&id),
        Action::MarkAllAsRead => state.notifications.mark_all_as_read(),
        Action::ClearNotifications => state.notifications.clear(),
        Action::RemoveNotification(id) => state.notifications.remove(&id),
        Action::SetPromotions(promotions) => state.promotions.set_promotions(promotions),
        Action::AddPromotion(p) => state.promotions.add_promotion(p),
        Action::RemovePromotion(id) => state.promotions.remove_promotion(&id),
        Action::SetPromotionsLoading(loading) => state.promotions.set_loading(loading),
        Action::SetPromotionsError(error) => state.promotions.set_error(error),
        Action::SetLoading { key, value } => state.ui.set_loading(key, value),
        Action::SetError { key, value } => state.ui.set_error(key, value),
        Action::ClearError(key) => state.ui.clear_error(&key),
        Action::ClearAllErrors => state.ui.clear_all_errors(),
    }
    Ok(())
}
