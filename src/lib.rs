//! Retrace: a configuration-driven state machine with undo/redo history
//!
//! Retrace interprets a transition table supplied as plain data. The
//! machine keeps a current state, fires transitions on named events, and
//! records the path taken so it can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state, history baseline and per-state transition tables
//! - **StateMachine**: Fires transitions and owns the undo/redo history
//! - **Baseline**: The state whose entry collapses the history to its root
//! - **Journal**: Timestamped record of every applied state change
//!
//! # Example
//!
//! ```rust
//! use retrace::{Config, StateMachine};
//!
//! let config: Config<String, String> = Config::from_json(
//!     r#"{
//!         "initial": "normal",
//!         "states": {
//!             "normal": { "transitions": { "go": "active" } },
//!             "active": { "transitions": { "stop": "normal", "pause": "paused" } },
//!             "paused": { "transitions": { "resume": "active" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("go").unwrap();
//! machine.trigger("pause").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "active");
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "normal");
//! assert!(!machine.undo());
//! assert!(machine.redo());
//! assert_eq!(machine.get_state(), "active");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder};
pub use crate::config::{Config, ConfigError, ConfigViolation, StateDefinition};
pub use crate::core::{Event, Journal, State, TransitionCause, TransitionRecord};
pub use crate::machine::{MachineError, StateMachine};
