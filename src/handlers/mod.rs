//! Gesture handlers for the todo view
//!
//! Each handler calls into the store (or deliberately does not) and returns
//! the text to show next. One file per gesture.

pub mod add;
pub mod delete;
pub mod list;
pub mod toggle;
