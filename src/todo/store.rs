use super::clock::{Clock, SystemClock};
use super::id::{IdGenerator, RandomIdGenerator};
use super::item::{TodoId, TodoItem};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Draws from the generator before falling back to a suffixed id
const MAX_ID_DRAWS: usize = 16;

/// Immutable, cheaply clonable copy of the todo list at one point in time
///
/// A new snapshot replaces the old one after every effective mutation, so a
/// holder always sees a fully consistent list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot(Arc<[TodoItem]>);

impl Snapshot {
    /// The items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.0
    }

    /// Whether two snapshots are the very same published list
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Snapshot {
    type Target = [TodoItem];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<TodoItem>> for Snapshot {
    fn from(items: Vec<TodoItem>) -> Self {
        Self(items.into())
    }
}

/// Owner of the todo list and the only writer to it
///
/// The list is kept in display order at all times:
/// - incomplete items first, newest `created_at` first
/// - completed items after every incomplete item
///
/// Operations on an id that is not in the list are silent no-ops. Every
/// effective mutation publishes a fresh [`Snapshot`] to subscribers.
pub struct TodoStore {
    /// Current list, identical to the last published snapshot
    items: Snapshot,

    /// Publisher for re-render notifications
    publisher: watch::Sender<Snapshot>,

    /// Every id handed out this session, so none is ever reused
    issued: HashSet<TodoId>,

    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,

    /// Sequence number for the next created item
    next_ordinal: u64,

    /// Timestamp of the most recently created item
    last_created_at: Option<DateTime<Utc>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store with random ids and the system clock
    pub fn new() -> Self {
        Self::with_parts(Box::new(RandomIdGenerator::default()), Box::new(SystemClock))
    }

    /// Create an empty store with explicit id and time sources
    ///
    /// # Arguments
    /// * `ids` - Generator for new item ids
    /// * `clock` - Source of creation timestamps
    pub fn with_parts(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        let (publisher, _) = watch::channel(Snapshot::default());
        Self {
            items: Snapshot::default(),
            publisher,
            issued: HashSet::new(),
            ids,
            clock,
            next_ordinal: 0,
            last_created_at: None,
        }
    }

    /// Add a new incomplete item at the front of the list
    ///
    /// Any text is accepted, including an empty string.
    ///
    /// # Arguments
    /// * `text` - Label of the new item
    ///
    /// # Returns
    /// The id generated for the new item
    pub fn add(&mut self, text: impl Into<String>) -> TodoId {
        let id = self.fresh_id();
        let created_at = self.creation_time();
        let item = TodoItem::new(id.clone(), text.into(), created_at, self.next_ordinal);
        self.next_ordinal += 1;

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item);
        next.extend(self.items.iter().cloned());

        debug!(id = %id, len = next.len(), "todo added");
        self.publish(next);
        id
    }

    /// Flip the completion flag of an item and re-sort the list
    ///
    /// Incomplete items are re-sorted by creation time (newest first) and
    /// completed items keep their relative order behind them. An item toggled
    /// back to incomplete returns to its creation-time slot.
    ///
    /// # Arguments
    /// * `id` - Id of the item to toggle
    ///
    /// # Returns
    /// `true` if the item was found, `false` if the call was a no-op
    pub fn toggle_completion(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            debug!(id, "toggle ignored: unknown id");
            return false;
        };

        let mut next = self.items.to_vec();
        next[pos] = next[pos].toggled();
        let completed = next[pos].completed;

        let (mut incomplete, done): (Vec<TodoItem>, Vec<TodoItem>) =
            next.into_iter().partition(|item| !item.completed);
        incomplete.sort_by(|a, b| b.recency_key().cmp(&a.recency_key()));
        incomplete.extend(done);

        debug!(id, completed, "todo toggled");
        self.publish(incomplete);
        true
    }

    /// Remove an item, keeping the order of the others
    ///
    /// # Arguments
    /// * `id` - Id of the item to remove
    ///
    /// # Returns
    /// `true` if an item was removed, `false` if the call was a no-op
    pub fn delete(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            debug!(id, "delete ignored: unknown id");
            return false;
        }

        let next: Vec<TodoItem> = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();

        debug!(id, len = next.len(), "todo deleted");
        self.publish(next);
        true
    }

    /// Current list in display order
    pub fn snapshot(&self) -> Snapshot {
        self.items.clone()
    }

    /// Receive a notification with the new snapshot after every mutation
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    /// Find an item by id
    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Number of completed items
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Draw an id that has never been issued in this session
    ///
    /// After [`MAX_ID_DRAWS`] repeats the last candidate gets a counter suffix.
    fn fresh_id(&mut self) -> TodoId {
        let mut candidate = self.ids.generate();
        for draw in 1..=MAX_ID_DRAWS {
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
            debug!(id = %candidate, draw, "generated id already issued");
            if draw < MAX_ID_DRAWS {
                candidate = self.ids.generate();
            }
        }

        let mut suffix = 1u64;
        loop {
            let suffixed = TodoId::new(format!("{candidate}-{suffix}"));
            if self.issued.insert(suffixed.clone()) {
                warn!(
                    id = %suffixed,
                    draws = MAX_ID_DRAWS,
                    "id generator keeps repeating, using suffixed id"
                );
                return suffixed;
            }
            suffix += 1;
        }
    }

    /// Clock time, never earlier than the previous item's creation time
    fn creation_time(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let created_at = match self.last_created_at {
            Some(last) if now < last => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }

    fn publish(&mut self, items: Vec<TodoItem>) {
        self.items = Snapshot::from(items);
        self.publisher.send_replace(self.items.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::clock::ManualClock;
    use crate::todo::id::SequentialIdGenerator;
    use chrono::{Duration, TimeZone};

    fn create_test_store() -> (TodoStore, Arc<ManualClock>) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let store = TodoStore::with_parts(
            Box::new(SequentialIdGenerator::with_nonce("test")),
            Box::new(clock.clone()),
        );
        (store, clock)
    }

    fn texts(store: &TodoStore) -> Vec<String> {
        store.snapshot().iter().map(|item| item.text.clone()).collect()
    }

    #[test]
    fn test_add_inserts_at_front() {
        let (mut store, clock) = create_test_store();
        store.add("a");
        clock.advance(Duration::seconds(1));
        store.add("b");

        assert_eq!(texts(&store), vec!["b", "a"]);
        assert_eq!(store.remaining_count(), 2);
    }

    #[test]
    fn test_toggle_moves_completed_to_back() {
        let (mut store, clock) = create_test_store();
        let a = store.add("a");
        clock.advance(Duration::seconds(1));
        store.add("b");

        assert!(store.toggle_completion(a.as_str()));
        assert_eq!(texts(&store), vec!["b", "a"]);
        assert!(store.get(a.as_str()).unwrap().completed);
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_untoggle_returns_to_creation_slot() {
        let (mut store, clock) = create_test_store();
        store.add("a");
        clock.advance(Duration::seconds(1));
        let b = store.add("b");
        clock.advance(Duration::seconds(1));
        store.add("c");

        store.toggle_completion(b.as_str());
        assert_eq!(texts(&store), vec!["c", "a", "b"]);

        store.toggle_completion(b.as_str());
        assert_eq!(texts(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_same_instant_keeps_newest_first() {
        let (mut store, _clock) = create_test_store();
        let a = store.add("a");
        store.add("b");
        store.add("c");

        store.toggle_completion(a.as_str());
        store.toggle_completion(a.as_str());
        assert_eq!(texts(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_clock_going_backwards_is_clamped() {
        let (mut store, clock) = create_test_store();
        let a = store.add("a");
        clock.advance(Duration::seconds(-30));
        let b = store.add("b");

        let first = store.get(a.as_str()).unwrap().created_at;
        let second = store.get(b.as_str()).unwrap().created_at;
        assert_eq!(first, second);

        store.toggle_completion(b.as_str());
        store.toggle_completion(b.as_str());
        assert_eq!(texts(&store), vec!["b", "a"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut store, _clock) = create_test_store();
        store.add("x");
        let before = store.snapshot();

        assert!(!store.toggle_completion("nonexistent"));
        assert!(!store.delete("nonexistent"));

        let after = store.snapshot();
        assert!(before.ptr_eq(&after));
    }

    #[test]
    fn test_subscribers_see_each_mutation() {
        let (mut store, _clock) = create_test_store();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        let id = store.add("x");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);

        store.delete("nonexistent");
        assert!(!rx.has_changed().unwrap());

        store.delete(id.as_str());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    struct RepeatingIds {
        calls: u32,
    }

    impl IdGenerator for RepeatingIds {
        fn generate(&mut self) -> TodoId {
            self.calls += 1;
            // first two draws collide, then unique
            if self.calls <= 2 {
                TodoId::new("same")
            } else {
                TodoId::new(format!("id-{}", self.calls))
            }
        }
    }

    #[test]
    fn test_colliding_ids_are_redrawn() {
        let mut store = TodoStore::with_parts(
            Box::new(RepeatingIds { calls: 0 }),
            Box::new(SystemClock),
        );
        let first = store.add("a");
        let second = store.add("b");

        assert_eq!(first, "same");
        assert_eq!(second, "id-3");
    }

    struct ConstantIds;

    impl IdGenerator for ConstantIds {
        fn generate(&mut self) -> TodoId {
            TodoId::new("x")
        }
    }

    #[test]
    fn test_exhausted_generator_falls_back_to_suffix() {
        let mut store = TodoStore::with_parts(Box::new(ConstantIds), Box::new(SystemClock));
        let ids: Vec<TodoId> = (0..50).map(|i| store.add(format!("item {i}"))).collect();

        assert_eq!(ids[0], "x");
        assert_eq!(ids[1], "x-1");
        assert_eq!(ids[2], "x-2");
        let distinct: HashSet<&TodoId> = ids.iter().collect();
        assert_eq!(distinct.len(), 50);

        store.delete("x");
        assert_eq!(store.add("again"), "x-50");
    }
}
