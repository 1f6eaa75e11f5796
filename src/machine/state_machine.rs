//! Table-driven state machine with undo/redo history.

use crate::config::{Config, ConfigError};
use crate::core::{Event, Journal, State, TransitionCause, UndoHistory};
use crate::machine::error::MachineError;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, trace};

/// State machine driven by a transition table.
///
/// Operations that take a state or event accept any borrowed form of the
/// token, so a `StateMachine<String, String>` can be driven with `&str`.
///
/// # Example
///
/// ```rust
/// use retrace::builder::ConfigBuilder;
/// use retrace::machine::StateMachine;
///
/// let config = ConfigBuilder::<String, String>::new()
///     .initial("normal".into())
///     .transition("normal".into(), "go".into(), "active".into())
///     .transition("active".into(), "stop".into(), "normal".into())
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// assert_eq!(machine.trigger("go").unwrap(), "active");
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "normal");
/// assert!(machine.redo());
/// assert_eq!(machine.get_state(), "active");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, E: Event> {
    config: Arc<Config<S, E>>,
    current: S,
    history: UndoHistory<S>,
    journal: Journal<S, E>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in the initial state.
    ///
    /// The configuration is validated first; every problem found is
    /// returned in a single `ConfigError::Invalid`.
    pub fn new(config: Config<S, E>) -> Result<Self, ConfigError> {
        Self::from_shared(Arc::new(config))
    }

    /// Create a machine over a configuration shared with other machines.
    pub fn from_shared(config: Arc<Config<S, E>>) -> Result<Self, ConfigError> {
        config.validate()?;

        let current = config.initial().clone();
        let history = UndoHistory::new(config.baseline().clone());
        debug!(
            initial = current.name(),
            baseline = history.baseline().name(),
            states = config.states().len(),
            "state machine created"
        );

        Ok(Self {
            config,
            current,
            history,
            journal: Journal::new(),
        })
    }

    /// Get current state (pure)
    pub fn get_state(&self) -> &S {
        &self.current
    }

    /// Jump directly to `state`.
    ///
    /// The jump is recorded on the history stack (entering the baseline
    /// collapses it) but pending redo entries are kept.
    pub fn change_state<Q>(&mut self, state: &Q) -> Result<(), MachineError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = S> + ?Sized,
    {
        let Some((target, _)) = self.config.states().get_key_value(state) else {
            let state = state.to_owned();
            trace!(state = state.name(), "rejected jump to undeclared state");
            return Err(MachineError::InvalidState {
                state: state.name().to_string(),
            });
        };
        let target = target.clone();

        debug!(from = self.current.name(), to = target.name(), "state changed");
        self.history.record(target.clone());
        self.enter(target, TransitionCause::Jump);
        Ok(())
    }

    /// Fire `event` from the current state and return the new state.
    ///
    /// A successful trigger records the destination on the history stack
    /// and invalidates every pending redo entry.
    pub fn trigger<Q>(&mut self, event: &Q) -> Result<&S, MachineError>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = E> + ?Sized,
    {
        let found = self
            .config
            .state(&self.current)
            .and_then(|definition| definition.transitions.get_key_value(event));

        let Some((event, target)) = found else {
            let event = event.to_owned();
            trace!(
                state = self.current.name(),
                event = event.name(),
                "rejected event with no transition"
            );
            return Err(MachineError::InvalidTransition {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            });
        };
        let (event, target) = (event.clone(), target.clone());

        debug!(
            from = self.current.name(),
            to = target.name(),
            event = event.name(),
            "transition fired"
        );
        self.history.record(target.clone());
        self.history.invalidate_redo();
        self.enter(target, TransitionCause::Event(event));
        Ok(&self.current)
    }

    /// Return to the initial state.
    ///
    /// Neither the history stack nor the redo buffer is touched.
    pub fn reset(&mut self) {
        let initial = self.config.initial().clone();
        debug!(from = self.current.name(), to = initial.name(), "state reset");
        self.enter(initial, TransitionCause::Reset);
    }

    /// Every declared state, each exactly once, in table order.
    pub fn get_states(&self) -> Vec<S> {
        self.config.states().keys().cloned().collect()
    }

    /// States whose transition table handles `event`.
    pub fn get_states_for<Q>(&self, event: &Q) -> Vec<S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.config
            .states()
            .iter()
            .filter(|(_, definition)| definition.transitions.contains_key(event))
            .map(|(state, _)| state.clone())
            .collect()
    }

    /// Step back along the history.
    ///
    /// Returns `false` once only the baseline is left; the machine is then
    /// put on the baseline.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(previous) => {
                debug!(from = self.current.name(), to = previous.name(), "undo");
                self.enter(previous, TransitionCause::Undo);
                true
            }
            None => {
                let baseline = self.history.baseline().clone();
                debug!(state = baseline.name(), "nothing to undo");
                if self.current != baseline {
                    self.enter(baseline, TransitionCause::Undo);
                }
                false
            }
        }
    }

    /// Re-enter the most recently undone state.
    ///
    /// Returns `false` without any effect when nothing is left to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(restored) => {
                debug!(from = self.current.name(), to = restored.name(), "redo");
                self.enter(restored, TransitionCause::Redo);
                true
            }
            None => {
                trace!(state = self.current.name(), "nothing to redo");
                false
            }
        }
    }

    /// Forget the undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            state = self.current.name(),
            discarded = self.history.entries().len() - 1 + self.history.redo_buffer().len(),
            "history cleared"
        );
        self.history.clear();
    }

    pub fn config(&self) -> &Config<S, E> {
        &self.config
    }

    pub fn initial(&self) -> &S {
        self.config.initial()
    }

    pub fn baseline(&self) -> &S {
        self.history.baseline()
    }

    /// History stack, baseline first.
    pub fn history(&self) -> &[S] {
        self.history.entries()
    }

    /// Undone states; the next one to redo is the last element.
    pub fn redo_buffer(&self) -> &[S] {
        self.history.redo_buffer()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Events with a transition out of the current state.
    pub fn available_events(&self) -> Vec<E> {
        self.config
            .state(&self.current)
            .map(|definition| definition.transitions.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `trigger(event)` would succeed from the current state.
    pub fn can_trigger<Q>(&self, event: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.config
            .state(&self.current)
            .is_some_and(|definition| definition.transitions.contains_key(event))
    }

    /// Journal of every applied state change.
    pub fn journal(&self) -> &Journal<S, E> {
        &self.journal
    }

    /// Drain the journal, leaving an empty one in its place.
    pub fn take_journal(&mut self) -> Journal<S, E> {
        std::mem::take(&mut self.journal)
    }

    fn enter(&mut self, next: S, cause: TransitionCause<E>) {
        let previous = std::mem::replace(&mut self.current, next);
        self.journal.record(previous, self.current.clone(), cause);
    }
}
