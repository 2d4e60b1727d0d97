//! Toggle handler for the todo view

use crate::TodoApp;
use crate::view::{self, RowTarget};
use tracing::debug;

impl TodoApp {
    /// **Click row**: flip the completion of the item shown on that row.
    ///
    /// Clicks on the empty-list placeholder are suppressed. Clicks past the
    /// last row refer to a frame that no longer exists and are ignored.
    pub(crate) fn handle_toggle(&mut self, row: usize) -> String {
        match view::row_target(&self.shown, row) {
            RowTarget::Item(id) => {
                self.store.toggle_completion(id.as_str());
            }
            RowTarget::Placeholder => debug!(row, "toggle suppressed on placeholder row"),
            RowTarget::Missing => debug!(row, "toggle ignored: no such row"),
        }
        self.render()
    }
}
