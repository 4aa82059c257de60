//! Notification Log Aggregate
//!
//! Newest first. Unlike the cart, the unread count is never stored; it is
//! derived from the entries on every read.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::events::{DomainEvent, NotificationEvent};
use crate::domain::value_objects::NotificationId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType { OrderStatus, Promotional, System }

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Screen to open when the notification is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
}

impl Notification {
    pub fn new(kind: NotificationType, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::generate(), kind, title: title.into(), message: message.into(),
            timestamp: Utc::now(), read: false, data: None,
        }
    }

    pub fn with_data(mut self, data: NotificationData) -> Self { self.data = Some(data); self }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct NotificationLog {
    notifications: Vec<Notification>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl NotificationLog {
    pub fn new() -> Self { Self::default() }

    /// The welcome notifications a fresh install starts with.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let seed = |seq: u64, kind, title: &str, message: &str, age: Duration, read, data| Notification {
            id: NotificationId::from_seq(seq), kind, title: title.into(), message: message.into(),
            timestamp: now - age, read, data: Some(data),
        };
        Self {
            notifications: vec![
                seed(1, NotificationType::Promotional, "Special Offer!", "Get 50% off on all vegetables today",
                    Duration::hours(1), false, NotificationData { url: Some("ProductList".into()), ..Default::default() }),
                seed(2, NotificationType::OrderStatus, "Order Delivered", "Your order #12345 has been delivered",
                    Duration::hours(2), false, NotificationData { order_id: Some("12345".into()), ..Default::default() }),
                seed(3, NotificationType::System, "New Products Added", "Check out our new collection of organic fruits",
                    Duration::days(1), true, NotificationData { product_id: Some("1".into()), ..Default::default() }),
            ],
            events: vec![],
        }
    }

    pub fn notifications(&self) -> &[Notification] { &self.notifications }
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> { self.notifications.iter().find(|n| &n.id == id) }
    pub fn len(&self) -> usize { self.notifications.len() }
    pub fn is_empty(&self) -> bool { self.notifications.is_empty() }
    pub fn unread_count(&self) -> usize { self.notifications.iter().filter(|n| !n.read).count() }
    pub fn by_type(&self, kind: NotificationType) -> impl Iterator<Item = &Notification> + '_ {
        self.notifications.iter().filter(move |n| n.kind == kind)
    }

    pub fn add(&mut self, notification: Notification) {
        let id = notification.id.clone();
        self.notifications.insert(0, notification);
        self.raise_event(DomainEvent::Notifications(NotificationEvent::Added { notification_id: id }));
    }

    pub fn mark_as_read(&mut self, id: &NotificationId) {
        match self.notifications.iter_mut().find(|n| &n.id == id) {
            Some(n) => {
                n.read = true;
                self.raise_event(DomainEvent::Notifications(NotificationEvent::Read { notification_id: id.clone() }));
            }
            None => tracing::debug!(notification_id = %id, "mark as read for unknown notification ignored"),
        }
    }

    pub fn mark_all_as_read(&mut self) {
        let count = self.unread_count();
        self.notifications.iter_mut().for_each(|n| n.read = true);
        self.raise_event(DomainEvent::Notifications(NotificationEvent::AllRead { count }));
    }

    pub fn remove(&mut self, id: &NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| &n.id != id);
        if self.notifications.len() == before {
            tracing::debug!(notification_id = %id, "remove for unknown notification ignored");
            return;
        }
        self.raise_event(DomainEvent::Notifications(NotificationEvent::Removed { notification_id: id.clone() }));
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.raise_event(DomainEvent::Notifications(NotificationEvent::Cleared));
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_inserts_at_head() {
        let mut log = NotificationLog::seeded(Utc::now());
        let n = Notification::new(NotificationType::OrderStatus, "Order Shipped", "Your order #777 is on its way");
        let id = n.id.clone();
        log.add(n);
        assert_eq!(log.notifications()[0].id, id);
        assert_eq!(log.len(), 4);
    }
    #[test]
    fn test_unread_count_tracks_mutations() {
        let mut log = NotificationLog::seeded(Utc::now());
        assert_eq!(log.unread_count(), 2);
        log.mark_as_read(&NotificationId::new("1").unwrap());
        assert_eq!(log.unread_count(), 1);
        log.add(Notification::new(NotificationType::System, "Hi", "Welcome"));
        assert_eq!(log.unread_count(), 2);
        log.remove(&NotificationId::new("2").unwrap());
        assert_eq!(log.unread_count(), 1);
        log.clear();
        assert_eq!(log.unread_count(), 0);
    }
    #[test]
    fn test_mark_all_preserves_order_and_count() {
        let mut log = NotificationLog::seeded(Utc::now());
        let before: Vec<_> = log.notifications().iter().map(|n| n.id.clone()).collect();
        log.mark_all_as_read();
        let after: Vec<_> = log.notifications().iter().map(|n| n.id.clone()).collect();
        assert_eq!(before, after);
        assert!(log.notifications().iter().all(|n| n.read));
    }
    #[test]
    fn test_unknown_ids_are_noops() {
        let mut log = NotificationLog::seeded(Utc::now());
        log.take_events();
        let ghost = NotificationId::new("ghost").unwrap();
        log.mark_as_read(&ghost);
        log.remove(&ghost);
        assert_eq!(log.len(), 3);
        assert!(log.take_events().is_empty());
    }
    #[test]
    fn test_by_type() {
        let log = NotificationLog::seeded(Utc::now());
        let promos: Vec<_> = log.by_type(NotificationType::Promotional).collect();
        assert_eq!(promos.len(), 1);
        assert_eq!(promos[0].data.as_ref().and_then(|d| d.url.as_deref()), Some("ProductList"));
    }
    #[test]
    fn test_seeded_is_newest_first() {
        let log = NotificationLog::seeded(Utc::now());
        assert!(log.notifications().windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
    #[test]
    fn test_notification_json_shape() {
        let n = Notification::new(NotificationType::OrderStatus, "T", "M");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "ORDER_STATUS");
        assert_eq!(json["read"], false);
    }
}
