//! Transient toast notification queue.

use std::time::Duration;

use crate::domain::entities::{NewToast, Toast, ToastId};

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

/// In-memory ordered collection of short-lived user-facing messages.
///
/// Insertion order is preserved; ids are unique for the lifetime of the
/// queue. The queue has no persistence and no network dependency, and a
/// rendering layer can observe the collection after any mutation.
#[derive(Debug)]
pub struct ToastQueue {
    messages: Vec<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastQueue {
    /// Creates a queue whose toasts expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            messages: Vec::new(),
            ttl,
        }
    }

    /// Appends a toast, assigning it a fresh unique id.
    ///
    /// Every call produces one new independent entry; identical content is
    /// not deduplicated.
    pub fn push(&mut self, toast: NewToast) {
        self.messages.push(Toast::from_new(toast, self.ttl));
    }

    /// Appends a success toast.
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NewToast::success(title).with_description(description));
    }

    /// Appends an error toast.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NewToast::error(title).with_description(description));
    }

    /// Appends an info toast.
    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NewToast::info(title).with_description(description));
    }

    /// Removes the toast with the given id. Removing an unknown id is a
    /// no-op.
    pub fn remove(&mut self, id: ToastId) {
        self.messages.retain(|toast| toast.id != id);
    }

    /// Drops every toast that has outlived its time-to-live.
    pub fn purge_expired(&mut self) {
        self.messages.retain(|toast| !toast.is_expired());
    }

    /// Current messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Toast] {
        &self.messages
    }

    /// Whether the queue holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ToastKind;

    #[test]
    fn test_push_produces_distinct_ids_in_order() {
        let mut queue = ToastQueue::default();
        queue.push(NewToast::new("first"));
        queue.push(NewToast::new("second"));
        queue.push(NewToast::new("third"));

        assert_eq!(queue.len(), 3);
        let titles: Vec<_> = queue.messages().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);

        let ids: Vec<_> = queue.messages().iter().map(|t| t.id).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_no_deduplication_by_content() {
        let mut queue = ToastQueue::default();
        queue.push(NewToast::new("same"));
        queue.push(NewToast::new("same"));

        assert_eq!(queue.len(), 2);
        assert_ne!(queue.messages()[0].id, queue.messages()[1].id);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut queue = ToastQueue::default();
        queue.push(NewToast::new("first"));
        queue.push(NewToast::new("second"));
        queue.push(NewToast::new("third"));

        let middle = queue.messages()[1].id;
        queue.remove(middle);

        let titles: Vec<_> = queue.messages().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut queue = ToastQueue::default();
        queue.push(NewToast::new("only"));

        let foreign = {
            let mut other = ToastQueue::default();
            other.push(NewToast::new("elsewhere"));
            other.messages()[0].id
        };

        queue.remove(foreign);
        assert_eq!(queue.len(), 1);

        queue.remove(queue.messages()[0].id);
        queue.remove(foreign);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_convenience_kinds() {
        let mut queue = ToastQueue::default();
        queue.success("ok", "done");
        queue.error("bad", "failed");
        queue.info("hey", "fyi");

        let kinds: Vec<_> = queue.messages().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                Some(ToastKind::Success),
                Some(ToastKind::Error),
                Some(ToastKind::Info)
            ]
        );
    }

    #[test]
    fn test_purge_expired() {
        let mut queue = ToastQueue::new(Duration::from_nanos(1));
        queue.push(NewToast::new("short-lived"));

        std::thread::sleep(Duration::from_millis(1));
        queue.purge_expired();

        assert!(queue.is_empty());
    }
}
