//! Todo Widget Library
//!
//! A minimal in-memory todo list: add short text items, mark them complete
//! (which moves them below every incomplete item) and delete them. Nothing is
//! persisted; the list lives for one session.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain Layer**: `todo` module - `TodoStore`, the only writer of the list
//! - **View Layer**: `view` and `input` modules plus `TodoApp` handlers - render
//!   snapshots and translate typed gestures into store calls
//! - **Session Layer**: `session` and `mount` modules - the single-threaded
//!   event loop and the output target it renders into
//!
//! # Example
//!
//! ```
//! use todo_widget::TodoStore;
//!
//! let mut store = TodoStore::new();
//! let milk = store.add("buy milk");
//! store.add("call mom");
//! store.toggle_completion(milk.as_str());
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot[0].text, "call mom");
//! assert!(snapshot[1].completed);
//! ```

pub mod config;
mod handlers;
pub mod input;
pub mod logging;
pub mod mount;
pub mod session;
pub mod todo;
pub mod view;

use tokio::sync::watch;

// Re-export commonly used types
pub use config::Config;
pub use input::{Gesture, InputError};
pub use mount::{MountError, MountTarget};
pub use session::run_session;
pub use todo::{Snapshot, TodoId, TodoItem, TodoStore};

/// Output of one handled input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user (usually a freshly rendered frame)
    Show(String),
    /// The user asked to end the session
    Quit,
}

/// View collaborator for a [`TodoStore`]
///
/// Owns the store, follows its snapshots through a subscription and turns
/// gestures into store calls. Row numbers in gestures refer to the last frame
/// the user was shown.
pub struct TodoApp {
    pub(crate) store: TodoStore,
    pub(crate) view: watch::Receiver<Snapshot>,
    /// Snapshot behind the last rendered frame
    pub(crate) shown: Snapshot,
    pub(crate) config: Config,
}

impl TodoApp {
    /// Create an app with an empty store built from the configuration
    ///
    /// # Example
    /// ```
    /// # use todo_widget::{Config, TodoApp};
    /// let app = TodoApp::new(Config::default());
    /// assert!(app.store().is_empty());
    /// ```
    pub fn new(config: Config) -> Self {
        let store = config.build_store();
        Self::with_store(store, config)
    }

    /// Create an app around an existing store
    pub fn with_store(store: TodoStore, config: Config) -> Self {
        let view = store.subscribe();
        let shown = store.snapshot();
        Self {
            store,
            view,
            shown,
            config,
        }
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Handle one line of input
    ///
    /// Malformed commands are answered with an error message and never reach
    /// the store.
    ///
    /// # Arguments
    /// * `line` - Input line without its trailing newline
    ///
    /// # Returns
    /// Text to show, or [`Reply::Quit`]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let gesture = match input::parse_gesture(line) {
            Ok(gesture) => gesture,
            Err(e) => {
                tracing::debug!(line, error = %e, "rejected input");
                return Reply::Show(format!("{}\n", e));
            }
        };

        match gesture {
            Gesture::Enter(text) => Reply::Show(self.handle_add(text)),
            Gesture::Toggle(row) => Reply::Show(self.handle_toggle(row)),
            Gesture::Delete(row) => Reply::Show(self.handle_delete(row)),
            Gesture::List => Reply::Show(self.handle_list()),
            Gesture::Dump => Reply::Show(self.handle_dump()),
            Gesture::Help => Reply::Show(format!("{}\n", input::HELP)),
            Gesture::Quit => Reply::Quit,
        }
    }

    /// Render the latest snapshot and mark it as seen
    pub fn render(&mut self) -> String {
        self.shown = self.view.borrow_and_update().clone();
        view::render_frame(&self.shown, &self.config.view)
    }
}
