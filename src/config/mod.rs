//! Machine configuration: the initial state, the history baseline and the
//! per-state transition tables.
//!
//! A configuration is plain data. It can be assembled in code, through
//! [`ConfigBuilder`](crate::builder::ConfigBuilder), or loaded from JSON:
//!
//! ```rust
//! use retrace::config::Config;
//!
//! let config: Config<String, String> = Config::from_json(
//!     r#"{
//!         "initial": "normal",
//!         "states": {
//!             "normal": { "transitions": { "go": "active" } },
//!             "active": { "transitions": { "stop": "normal" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.initial(), "normal");
//! assert_eq!(config.baseline(), "normal");
//! assert_eq!(config.transition(&"normal".into(), &"go".into()), Some(&"active".to_string()));
//! ```

use crate::core::{Event, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigViolation};

/// Transition table of a single state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDefinition<S: State, E: Event> {
    /// Event to destination state
    #[serde(default)]
    pub transitions: HashMap<E, S>,
}

impl<S: State, E: Event> Default for StateDefinition<S, E> {
    fn default() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }
}

impl<S: State, E: Event> StateDefinition<S, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.transitions.insert(event, target);
        self
    }

    /// Destination reached by `event`, if any.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &E) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable description of a state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Config<S: State, E: Event> {
    initial: S,

    /// History sentinel; defaults to `initial` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    baseline: Option<S>,

    states: HashMap<S, StateDefinition<S, E>>,
}

impl<S: State, E: Event> Config<S, E> {
    /// Create a configuration whose baseline is the initial state.
    pub fn new(initial: S, states: HashMap<S, StateDefinition<S, E>>) -> Self {
        Self {
            initial,
            baseline: None,
            states,
        }
    }

    /// Use `baseline` as the history sentinel instead of the initial state.
    pub fn with_baseline(mut self, baseline: S) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Only the shape is checked here; call [`Config::validate`] (or build
    /// a machine, which validates) to check the contents.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check the configuration, reporting every violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validation::validate(self) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// The state whose entry collapses the history stack.
    pub fn baseline(&self) -> &S {
        self.baseline.as_ref().unwrap_or(&self.initial)
    }

    pub fn states(&self) -> &HashMap<S, StateDefinition<S, E>> {
        &self.states
    }

    pub fn state(&self, state: &S) -> Option<&StateDefinition<S, E>> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` from `from`, if the table defines one.
    pub fn transition(&self, from: &S, event: &E) -> Option<&S> {
        self.states.get(from)?.target(event)
    }
}
