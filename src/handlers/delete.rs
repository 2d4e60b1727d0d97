//! Delete handler for the todo view

use crate::TodoApp;
use crate::view::{self, RowTarget};
use tracing::debug;

impl TodoApp {
    /// **Click delete**: remove the item shown on that row.
    pub(crate) fn handle_delete(&mut self, row: usize) -> String {
        match view::row_target(&self.shown, row) {
            RowTarget::Item(id) => {
                self.store.delete(id.as_str());
            }
            RowTarget::Placeholder => debug!(row, "delete suppressed on placeholder row"),
            RowTarget::Missing => debug!(row, "delete ignored: no such row"),
        }
        self.render()
    }
}
