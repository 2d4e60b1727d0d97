use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Opaque identifier of a todo item
///
/// Generated once when the item is added and never reassigned. Two live items
/// in the same store never share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap an already generated identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TodoId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TodoId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single entry of the todo list
///
/// Items are values: once published in a snapshot they never change. Toggling
/// completion builds a new item and a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Label entered by the user (may be empty)
    pub text: String,
    /// Creation time, used only for ordering
    pub created_at: DateTime<Utc>,
    /// Whether the item has been marked done
    pub completed: bool,
    /// Creation sequence number within the store, breaks `created_at` ties
    #[serde(skip)]
    pub(crate) ordinal: u64,
}

impl TodoItem {
    pub(crate) fn new(id: TodoId, text: String, created_at: DateTime<Utc>, ordinal: u64) -> Self {
        Self {
            id,
            text,
            created_at,
            completed: false,
            ordinal,
        }
    }

    /// Copy of this item with the completion flag flipped
    pub(crate) fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Key that orders incomplete items newest-first when sorted descending
    pub(crate) fn recency_key(&self) -> (DateTime<Utc>, u64) {
        (self.created_at, self.ordinal)
    }
}
