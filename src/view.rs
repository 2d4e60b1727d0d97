//! Rendering of todo snapshots into text frames
//!
//! The view holds no state of its own: every frame is computed from a
//! [`Snapshot`] and the [`ViewConfig`].

use crate::config::ViewConfig;
use crate::todo::{Snapshot, TodoId, TodoItem};
use anyhow::Result;
use serde::Serialize;

/// One visible row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// A todo item at a 1-based position
    Item { position: usize, item: &'a TodoItem },
    /// Stand-in row for an empty list; its affordances are disabled
    Placeholder,
}

/// What a click on a row refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    /// The row shows this item
    Item(TodoId),
    /// The row is the empty-list placeholder
    Placeholder,
    /// No such row in the current frame
    Missing,
}

/// Rows of a snapshot in display order
///
/// An empty snapshot produces exactly one [`Row::Placeholder`].
pub fn rows(snapshot: &Snapshot) -> Vec<Row<'_>> {
    if snapshot.is_empty() {
        return vec![Row::Placeholder];
    }
    snapshot
        .iter()
        .enumerate()
        .map(|(index, item)| Row::Item {
            position: index + 1,
            item,
        })
        .collect()
}

/// Resolve a 1-based row number against a snapshot
pub fn row_target(snapshot: &Snapshot, position: usize) -> RowTarget {
    match position
        .checked_sub(1)
        .and_then(|index| rows(snapshot).into_iter().nth(index))
    {
        Some(Row::Item { item, .. }) => RowTarget::Item(item.id.clone()),
        Some(Row::Placeholder) => RowTarget::Placeholder,
        None => RowTarget::Missing,
    }
}

/// Render a full frame: title, input line, rows and footer
///
/// # Arguments
/// * `snapshot` - List to display
/// * `config` - Texts and display options
///
/// # Returns
/// The frame as a newline-terminated string
pub fn render_frame(snapshot: &Snapshot, config: &ViewConfig) -> String {
    let mut frame = format!("{}\n> {}\n", config.title, config.prompt);

    for row in rows(snapshot) {
        match row {
            Row::Item { position, item } => {
                let mark = if item.completed { 'x' } else { ' ' };
                frame.push_str(&format!("  {}. [{}] {}", position, mark, item.text));
                if config.show_ids {
                    frame.push_str(&format!("  (id: {})", item.id));
                }
                frame.push('\n');
            }
            Row::Placeholder => {
                frame.push_str(&format!("  -  {}\n", config.placeholder));
            }
        }
    }

    let remaining = snapshot.iter().filter(|item| !item.completed).count();
    frame.push_str(&format!("{} item(s) left\n", remaining));
    frame
}

#[derive(Serialize)]
struct Dump<'a> {
    todos: &'a [TodoItem],
}

/// Render a snapshot as TOML
pub fn render_dump(snapshot: &Snapshot) -> Result<String> {
    let dump = Dump {
        todos: snapshot.items(),
    };
    Ok(toml::to_string_pretty(&dump)?)
}
