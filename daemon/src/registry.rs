use std::collections::HashMap;

use common::notification::Notification;

/// In-memory id assignment and replacement state behind the served
/// interface. This is the only state the skeleton keeps.
pub struct NotificationRegistry {
    next_id: u32,
    buffer: HashMap<u32, Notification>,
}

#[allow(dead_code)]
impl NotificationRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            buffer: HashMap::new(),
        }
    }

    /// Picks the id for an incoming call: a nonzero `replaces_id` that is
    /// still live is re-used, anything else gets a fresh id. Id 0 is never
    /// handed out, it means "new" on the wire. The counter wraps at
    /// `u32::MAX` and skips ids still in the buffer.
    pub fn assign(&mut self, replaces_id: u32) -> u32 {
        if replaces_id != 0 && self.buffer.contains_key(&replaces_id) {
            return replaces_id;
        }

        loop {
            self.next_id = self.next_id.wrapping_add(1);
            if self.next_id != 0 && !self.buffer.contains_key(&self.next_id) {
                return self.next_id;
            }
        }
    }

    /// Stores a notification under its id, overwriting a replaced one.
    pub fn insert(&mut self, notification: Notification) {
        self.buffer.insert(notification.id, notification);
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Notification> {
        self.buffer.get(&id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.buffer.values()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for NotificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(registry: &mut NotificationRegistry, replaces_id: u32, summary: &str) -> u32 {
        let id = registry.assign(replaces_id);
        registry.insert(Notification {
            id,
            summary: summary.into(),
            replaces_id,
            ..Default::default()
        });
        id
    }

    #[test]
    fn fresh_ids_are_sequential_and_nonzero() {
        let mut registry = NotificationRegistry::new();
        assert_eq!(stored(&mut registry, 0, "a"), 1);
        assert_eq!(stored(&mut registry, 0, "b"), 2);
        assert_eq!(stored(&mut registry, 0, "c"), 3);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn live_replaces_id_is_reused() {
        let mut registry = NotificationRegistry::new();
        let first = stored(&mut registry, 0, "downloading");
        let updated = stored(&mut registry, first, "done");

        assert_eq!(updated, first);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_by_id(first).unwrap().summary, "done");
    }

    #[test]
    fn stale_replaces_id_gets_a_fresh_id() {
        let mut registry = NotificationRegistry::new();
        let id = stored(&mut registry, 42, "never shown before");
        assert_eq!(id, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn counter_wraps_past_zero() {
        let mut registry = NotificationRegistry::new();
        registry.next_id = u32::MAX - 1;

        assert_eq!(stored(&mut registry, 0, "a"), u32::MAX);
        // wrapping_add lands on 0, which must be skipped
        assert_eq!(stored(&mut registry, 0, "b"), 1);
    }

    #[test]
    fn wrapped_counter_skips_live_ids() {
        let mut registry = NotificationRegistry::new();
        stored(&mut registry, 0, "a");
        stored(&mut registry, 0, "b");
        registry.next_id = u32::MAX;

        // 1 and 2 are live, so the next fresh id is 3
        assert_eq!(stored(&mut registry, 0, "c"), 3);
    }
}
