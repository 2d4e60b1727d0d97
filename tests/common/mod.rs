//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use todo_widget::todo::{ManualClock, SequentialIdGenerator};
use todo_widget::{Config, TodoApp, TodoItem, TodoStore};

/// Fixed start time for deterministic clocks
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

/// Create a store with sequential ids and a manual clock
pub fn create_test_store() -> (TodoStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(test_start()));
    let store = TodoStore::with_parts(
        Box::new(SequentialIdGenerator::with_nonce("test")),
        Box::new(clock.clone()),
    );
    (store, clock)
}

/// Add an item, then move the clock one second forward
pub fn add_tick(store: &mut TodoStore, clock: &ManualClock, text: &str) -> String {
    let id = store.add(text);
    clock.advance(Duration::seconds(1));
    id.to_string()
}

/// Create an app around a deterministic store
pub fn create_test_app(config: Config) -> (TodoApp, Arc<ManualClock>) {
    let (store, clock) = create_test_store();
    (TodoApp::with_store(store, config), clock)
}

/// Item texts in display order
pub fn texts(items: &[TodoItem]) -> Vec<&str> {
    items.iter().map(|item| item.text.as_str()).collect()
}

/// Assert the ordering rules every list must satisfy
pub fn assert_list_invariants(items: &[TodoItem]) {
    if let Some(first_done) = items.iter().position(|item| item.completed) {
        assert!(
            items[first_done..].iter().all(|item| item.completed),
            "incomplete item after a completed one: {:?}",
            items
        );
    }

    let incomplete: Vec<&TodoItem> = items.iter().filter(|item| !item.completed).collect();
    for pair in incomplete.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "incomplete items out of creation order: {:?}",
            pair
        );
    }
}
