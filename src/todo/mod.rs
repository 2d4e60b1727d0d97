//! Todo list domain model and state management
//!
//! - `item`: the `TodoItem` value type and its `TodoId`
//! - `store`: `TodoStore`, the owner of the list, and its published `Snapshot`
//! - `id`: id generation strategies
//! - `clock`: timestamp sources

mod clock;
mod id;
mod item;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::{
    DEFAULT_ID_LENGTH, ID_LENGTH_RANGE, IdGenerator, RandomIdGenerator, SequentialIdGenerator,
};
pub use item::{TodoId, TodoItem};
pub use store::{Snapshot, TodoStore};
