//! The runtime state machine.
//!
//! [`StateMachine`] interprets a [`Config`](crate::config::Config): it holds
//! the current state, fires table transitions on events, and keeps the
//! undo/redo history of the path taken.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
