//! Errors returned by machine operations.

use thiserror::Error;

/// Errors that can occur while driving a state machine.
///
/// The machine is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State '{state}' is not declared in the configuration")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}
