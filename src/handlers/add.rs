//! Add handler for the todo view

use crate::TodoApp;
use tracing::debug;

impl TodoApp {
    /// **Confirm entry**: add the typed text as a new todo at the top of the list.
    ///
    /// The store accepts any text. Blank entries are only dropped here, and only
    /// when `input.reject_blank` is set.
    pub(crate) fn handle_add(&mut self, text: String) -> String {
        if self.config.input.reject_blank && text.trim().is_empty() {
            debug!("blank entry ignored");
            return self.render();
        }

        self.store.add(text);
        self.render()
    }
}
