//! Undo/redo history stacks.
//!
//! The history stack always starts with the baseline state. Entering the
//! baseline collapses the stack back to that single root; entering any
//! other state pushes it. Undo moves the top of the history stack onto the
//! redo buffer and redo moves it back.

use super::state::State;

/// Pair of stacks backing undo and redo.
///
/// # Example
///
/// ```rust
/// use retrace::core::UndoHistory;
///
/// let mut history = UndoHistory::new("normal".to_string());
/// history.record("active".to_string());
/// history.record("paused".to_string());
///
/// assert_eq!(history.undo(), Some(&"active".to_string()));
/// assert_eq!(history.redo_buffer(), &["paused".to_string()]);
/// assert_eq!(history.redo(), Some(&"paused".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UndoHistory<S: State> {
    baseline: S,
    entries: Vec<S>,
    redo: Vec<S>,
}

impl<S: State> UndoHistory<S> {
    /// Create a history holding only the baseline.
    pub fn new(baseline: S) -> Self {
        Self {
            entries: vec![baseline.clone()],
            baseline,
            redo: Vec::new(),
        }
    }

    /// The sentinel at the root of the history stack.
    pub fn baseline(&self) -> &S {
        &self.baseline
    }

    /// Record entry into `state`.
    ///
    /// The baseline collapses the stack to its root; anything else is
    /// pushed. The redo buffer is left alone.
    pub fn record(&mut self, state: S) {
        if state == self.baseline {
            self.entries.truncate(1);
        } else {
            self.entries.push(state);
        }
    }

    /// Drop every pending redo entry.
    pub fn invalidate_redo(&mut self) {
        self.redo.clear();
    }

    /// Move the top entry onto the redo buffer.
    ///
    /// Returns the new top, or `None` when only the baseline is left.
    pub fn undo(&mut self) -> Option<&S> {
        if self.entries.len() <= 1 {
            return None;
        }
        let popped = self.entries.pop()?;
        self.redo.push(popped);
        self.entries.last()
    }

    /// Move the top of the redo buffer back onto the history stack.
    ///
    /// Returns the restored state, or `None` when nothing was undone.
    pub fn redo(&mut self) -> Option<&S> {
        let restored = self.redo.pop()?;
        self.entries.push(restored);
        self.entries.last()
    }

    /// Collapse to the baseline and forget the redo buffer.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
        self.redo.clear();
    }

    /// Current top of the history stack.
    pub fn top(&self) -> &S {
        // entries[0] is the baseline and is never popped
        self.entries.last().unwrap_or(&self.baseline)
    }

    /// History stack, root first.
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Redo buffer; the next state to redo is the last element.
    pub fn redo_buffer(&self) -> &[S] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn new_history_holds_only_baseline() {
        let history = UndoHistory::new(s("normal"));
        assert_eq!(history.entries(), &[s("normal")]);
        assert!(history.redo_buffer().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.top(), &s("normal"));
    }

    #[test]
    fn record_pushes_non_baseline_states() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.record(s("paused"));

        assert_eq!(history.entries(), &[s("normal"), s("active"), s("paused")]);
        assert_eq!(history.top(), &s("paused"));
    }

    #[test]
    fn record_baseline_collapses_stack() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.record(s("paused"));
        history.record(s("normal"));

        assert_eq!(history.entries(), &[s("normal")]);
    }

    #[test]
    fn record_keeps_redo_buffer() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.undo();
        history.record(s("paused"));

        assert_eq!(history.redo_buffer(), &[s("active")]);
    }

    #[test]
    fn undo_moves_top_to_redo() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.record(s("paused"));

        assert_eq!(history.undo(), Some(&s("active")));
        assert_eq!(history.redo_buffer(), &[s("paused")]);
        assert_eq!(history.undo(), Some(&s("normal")));
        assert_eq!(history.redo_buffer(), &[s("paused"), s("active")]);
        assert_eq!(history.undo(), None);
        assert_eq!(history.entries(), &[s("normal")]);
    }

    #[test]
    fn redo_restores_in_reverse_undo_order() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.record(s("paused"));
        history.undo();
        history.undo();

        assert_eq!(history.redo(), Some(&s("active")));
        assert_eq!(history.redo(), Some(&s("paused")));
        assert_eq!(history.redo(), None);
        assert_eq!(history.entries(), &[s("normal"), s("active"), s("paused")]);
    }

    #[test]
    fn invalidate_redo_empties_buffer() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.undo();
        assert!(history.can_redo());

        history.invalidate_redo();
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn clear_resets_both_stacks() {
        let mut history = UndoHistory::new(s("normal"));
        history.record(s("active"));
        history.record(s("paused"));
        history.undo();

        history.clear();
        assert_eq!(history.entries(), &[s("normal")]);
        assert!(history.redo_buffer().is_empty());
    }
}
