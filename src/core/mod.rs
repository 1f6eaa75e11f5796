//! Core state machine types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - State and event tokens via the `State` and `Event` traits
//! - The undo/redo stack pair
//! - A timestamped journal of applied changes
//!
//! Nothing in this module knows about the transition table.

mod history;
mod journal;
mod state;

pub use history::UndoHistory;
pub use journal::{Journal, TransitionCause, TransitionRecord};
pub use state::{Event, State};
