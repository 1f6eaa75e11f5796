//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::config::{Config, StateDefinition};
use crate::core::{Event, State};
use std::collections::HashMap;

/// Builder for constructing configurations with a fluent API.
pub struct ConfigBuilder<S: State, E: Event> {
    initial: Option<S>,
    baseline: Option<S>,
    states: HashMap<S, StateDefinition<S, E>>,
}

impl<S: State, E: Event> ConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            baseline: None,
            states: HashMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the history baseline (optional, defaults to the initial state).
    pub fn baseline(mut self, state: S) -> Self {
        self.baseline = Some(state);
        self
    }

    /// Declare a state. Declaring it twice keeps its transitions.
    pub fn state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// The target is not declared implicitly, so a misspelt target is
    /// reported by `build`.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.states
            .entry(from)
            .or_default()
            .transitions
            .insert(event, to);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut config = Config::new(initial, self.states);
        if let Some(baseline) = self.baseline {
            config = config.with_baseline(baseline);
        }
        config.validate()?;

        Ok(config)
    }
}

impl<S: State, E: Event> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
