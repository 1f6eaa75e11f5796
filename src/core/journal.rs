//! Timestamped journal of applied state changes.
//!
//! The journal is an audit trail, separate from the undo/redo stacks: it
//! records every change the machine actually applied, including undo,
//! redo and reset, and is never rewound.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a recorded state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum TransitionCause<E: Event> {
    /// A table transition fired by `trigger`
    Event(E),
    /// A direct `change_state`
    Jump,
    Undo,
    Redo,
    Reset,
}

/// Record of a single applied state change.
///
/// # Example
///
/// ```rust
/// use retrace::core::{TransitionCause, TransitionRecord};
/// use chrono::Utc;
///
/// let record: TransitionRecord<String, String> = TransitionRecord {
///     from: "normal".to_string(),
///     to: "active".to_string(),
///     cause: TransitionCause::Event("go".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "active");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Operation that produced the change
    pub cause: TransitionCause<E>,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of state changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Journal<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for Journal<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Journal<S, E> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a change stamped with the current time.
    pub fn record(&mut self, from: S, to: S, cause: TransitionCause<E>) {
        self.records.push(TransitionRecord {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        });
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record, then the `to` state
    /// of each record in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::core::{Journal, TransitionCause};
    ///
    /// let mut journal: Journal<String, String> = Journal::new();
    /// journal.record("a".into(), "b".into(), TransitionCause::Jump);
    /// journal.record("b".into(), "c".into(), TransitionCause::Event("next".into()));
    ///
    /// let path = journal.path();
    /// assert_eq!(path, vec!["a", "b", "c"]);
    /// ```
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the first and last record.
    ///
    /// Returns `None` if the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord<S, E>> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestJournal = Journal<String, String>;

    #[test]
    fn new_journal_is_empty() {
        let journal = TestJournal::new();
        assert!(journal.is_empty());
        assert!(journal.path().is_empty());
        assert!(journal.duration().is_none());
        assert!(journal.last().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut journal = TestJournal::new();
        journal.record("normal".into(), "active".into(), TransitionCause::Event("go".into()));
        journal.record("active".into(), "normal".into(), TransitionCause::Undo);

        assert_eq!(journal.len(), 2);
        assert_eq!(journal.records()[0].cause, TransitionCause::Event("go".into()));
        assert_eq!(journal.last().map(|r| &r.cause), Some(&TransitionCause::Undo));
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut journal = TestJournal::new();
        journal.record("normal".into(), "active".into(), TransitionCause::Event("go".into()));
        journal.record("active".into(), "paused".into(), TransitionCause::Event("pause".into()));

        let path = journal.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], "normal");
        assert_eq!(path[1], "active");
        assert_eq!(path[2], "paused");
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut journal = TestJournal::new();
        journal.record("a".into(), "b".into(), TransitionCause::Jump);

        std::thread::sleep(std::time::Duration::from_millis(10));

        journal.record("b".into(), "c".into(), TransitionCause::Jump);

        let duration = journal.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn journal_serializes_correctly() {
        let mut journal = TestJournal::new();
        journal.record("a".into(), "b".into(), TransitionCause::Reset);

        let json = serde_json::to_string(&journal).unwrap();
        let deserialized: TestJournal = serde_json::from_str(&json).unwrap();

        assert_eq!(journal.records(), deserialized.records());
    }
}
