//! In-memory store of the toasts currently on screen.
//!
//! The store owns id assignment. Expiry timers live with whoever owns the
//! store (the `App` shell in the frontend), which calls [`NotificationStore::remove`]
//! after [`DISPLAY_DURATION_MS`] or when the user dismisses a toast.

use crate::model::notification::{Notification, NotificationId, NotificationRequest};

/// How long a toast stays visible unless dismissed earlier.
pub const DISPLAY_DURATION_MS: u32 = 3000;

/// Anything that accepts notification requests: the store itself, or a
/// component callback forwarding to the store's owner.
pub trait Notify {
    fn notify(&mut self, request: NotificationRequest);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its freshly generated id.
    pub fn add(&mut self, request: NotificationRequest) -> NotificationId {
        let id = NotificationId::new();
        self.items.push(Notification::from_request(id, request));
        id
    }

    /// Removes the notification with `id`. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Active notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notify for NotificationStore {
    fn notify(&mut self, request: NotificationRequest) {
        self.add(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::Severity;

    #[test]
    fn add_assigns_distinct_ids_in_order() {
        let mut store = NotificationStore::new();
        let first = store.add(NotificationRequest::info("a", ""));
        let second = store.add(NotificationRequest::error("b", "details"));

        assert_ne!(first, second);
        let titles: Vec<_> = store.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(store.get(second).map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn remove_only_touches_the_given_id() {
        let mut store = NotificationStore::new();
        let keep = store.add(NotificationRequest::info("keep", ""));
        let drop = store.add(NotificationRequest::info("drop", ""));

        assert!(store.remove(drop));
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut store = NotificationStore::new();
        let id = store.add(NotificationRequest::success("ok", ""));

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn notify_goes_through_add() {
        let mut store = NotificationStore::new();
        Notify::notify(&mut store, NotificationRequest::error("x", "y"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].title, "x");
    }
}
