//! List and dump handlers for the todo view

use crate::TodoApp;
use crate::view;

impl TodoApp {
    /// Redraw the current list without touching the store.
    pub(crate) fn handle_list(&mut self) -> String {
        self.render()
    }

    /// Show the current list as TOML.
    pub(crate) fn handle_dump(&self) -> String {
        match view::render_dump(&self.store.snapshot()) {
            Ok(dump) => dump,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize list");
                format!("Failed to dump list: {}\n", e)
            }
        }
    }
}
