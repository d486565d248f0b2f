//! Undo/redo command stack.
//!
//! [`UndoStack`] keeps a linear history of executed [`Command`]s and a future
//! of undone ones. Dispatching a new command discards the future: those
//! commands were computed against a state that no longer exists.

use std::collections::VecDeque;
use std::fmt;

use super::command::{Command, CommandError, CommandResult, Editable};

/// Manages the history and future of executed commands.
///
/// - `history` holds commands that have been executed and can be undone,
///   oldest first.
/// - `future` holds commands that have been undone and can be redone, in the
///   order they were undone, so the last one is the next to redo.
///
/// A command lives in at most one of the two. History is unbounded unless a
/// limit is set with [`with_max_undo`](Self::with_max_undo), in which case the
/// oldest entries are dropped.
///
/// # Example
///
/// ```ignore
/// let mut stack = UndoStack::new();
/// let mut rig = RigDocument::default();
///
/// stack.dispatch(Box::new(command), &mut rig)?;
/// stack.undo(&mut rig)?;
/// stack.redo(&mut rig)?;
/// ```
pub struct UndoStack<T: Editable> {
    history: VecDeque<Box<dyn Command<T>>>,
    future: Vec<Box<dyn Command<T>>>,
    max_undo: Option<usize>,
    /// Distance from the saved state.
    ///
    /// - `Some(0)`: the current state matches the last save.
    /// - `Some(n)` where `n > 0`: `n` undos needed to reach the saved state.
    /// - `Some(n)` where `n < 0`: `|n|` redos needed to reach the saved state.
    /// - `None`: the save point is permanently unreachable (its future was
    ///   discarded, the limit dropped it, or a command failed midway).
    save_distance: Option<i64>,
}

impl<T: Editable> UndoStack<T> {
    /// Creates an empty stack with unbounded history.
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
            future: Vec::new(),
            max_undo: None,
            save_distance: Some(0),
        }
    }

    /// Creates an empty stack that keeps at most `max_undo` history entries.
    pub fn with_max_undo(max_undo: usize) -> Self {
        Self {
            max_undo: Some(max_undo),
            ..Self::new()
        }
    }

    /// Executes a new command and records it.
    ///
    /// This is the only entry point for a new action. On success the future
    /// is discarded. If `execute` fails the error is returned, nothing is
    /// recorded and the future is left as it was.
    pub fn dispatch(&mut self, mut command: Box<dyn Command<T>>, target: &mut T) -> CommandResult {
        if let Err(err) = command.execute(target) {
            log::warn!("'{}' failed: {err}", command.description());
            return Err(err);
        }
        log::debug!("dispatch '{}'", command.description());
        self.push(command);
        Ok(())
    }

    /// Records an executed command, discarding every undone one.
    fn push(&mut self, command: Box<dyn Command<T>>) {
        if !self.future.is_empty() {
            log::debug!("discarding {} undone command(s)", self.future.len());
            self.future.clear();
            // The save point was somewhere in the discarded future.
            if let Some(d) = self.save_distance
                && d < 0
            {
                self.save_distance = None;
            }
        }

        if let Some(d) = &mut self.save_distance {
            *d += 1;
        }

        self.history.push_back(command);
        if let Some(max_undo) = self.max_undo {
            while self.history.len() > max_undo {
                self.history.pop_front();
            }
            // If the save point was beyond the oldest surviving entry, it's gone.
            if let Some(d) = self.save_distance
                && d > self.history.len() as i64
            {
                self.save_distance = None;
            }
        }
    }

    /// Undoes the most recent command and moves it to the future.
    ///
    /// Fails with [`CommandError::EmptyHistory`] if there is nothing to undo.
    /// If the command's own undo fails, the error is returned and the command
    /// is dropped from both sequences.
    pub fn undo(&mut self, target: &mut T) -> CommandResult {
        let mut command = self.history.pop_back().ok_or(CommandError::EmptyHistory)?;
        if let Err(err) = command.undo(target) {
            log::warn!("undo of '{}' failed: {err}", command.description());
            self.save_distance = None;
            return Err(err);
        }
        log::debug!("undo '{}'", command.description());
        self.future.push(command);
        if let Some(d) = &mut self.save_distance {
            *d -= 1;
        }
        Ok(())
    }

    /// Redoes the most recently undone command and moves it to the history.
    ///
    /// Fails with [`CommandError::EmptyFuture`] if there is nothing to redo.
    /// Redo never discards the rest of the future.
    pub fn redo(&mut self, target: &mut T) -> CommandResult {
        let mut command = self.future.pop().ok_or(CommandError::EmptyFuture)?;
        if let Err(err) = command.redo(target) {
            log::warn!("redo of '{}' failed: {err}", command.description());
            self.save_distance = None;
            return Err(err);
        }
        log::debug!("redo '{}'", command.description());
        self.history.push_back(command);
        if let Some(d) = &mut self.save_distance {
            *d += 1;
        }
        Ok(())
    }

    /// Returns `true` if there are commands that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns `true` if there are commands that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Returns an iterator over history descriptions, most recent first.
    pub fn undo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.history.iter().rev().map(|c| c.description())
    }

    /// Returns an iterator over future descriptions, next to redo first.
    pub fn redo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.future.iter().rev().map(|c| c.description())
    }

    /// Returns the number of commands in the history.
    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the number of commands in the future.
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    /// Returns the history limit, if any.
    pub fn max_undo(&self) -> Option<usize> {
        self.max_undo
    }

    /// Records the current state as the saved state.
    pub fn mark_saved(&mut self) {
        self.save_distance = Some(0);
    }

    /// Returns `true` if the current state differs from the last saved state.
    ///
    /// A fresh stack counts as saved. After the save point becomes
    /// unreachable this stays `true` until the next [`mark_saved`](Self::mark_saved).
    pub fn has_unsaved_changes(&self) -> bool {
        self.save_distance != Some(0)
    }

    /// Drops both sequences.
    ///
    /// If the current state was the saved state it remains so; otherwise the
    /// save point is lost.
    pub fn clear(&mut self) {
        self.history.clear();
        self.future.clear();
        if self.save_distance != Some(0) {
            self.save_distance = None;
        }
    }
}

impl<T: Editable> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Editable> fmt::Debug for UndoStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("undo_count", &self.history.len())
            .field("redo_count", &self.future.len())
            .field("max_undo", &self.max_undo)
            .field("save_distance", &self.save_distance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i32,
    }

    impl Editable for Counter {}

    #[derive(Debug)]
    struct Add {
        amount: i32,
    }

    impl Command<Counter> for Add {
        fn execute(&mut self, target: &mut Counter) -> CommandResult {
            self.redo(target)
        }

        fn undo(&mut self, target: &mut Counter) -> CommandResult {
            target.value -= self.amount;
            Ok(())
        }

        fn redo(&mut self, target: &mut Counter) -> CommandResult {
            target.value += self.amount;
            Ok(())
        }

        fn description(&self) -> &str {
            "Add"
        }
    }

    /// Executes fine but cannot be reversed.
    #[derive(Debug)]
    struct OneWay;

    impl Command<Counter> for OneWay {
        fn execute(&mut self, target: &mut Counter) -> CommandResult {
            target.value += 1;
            Ok(())
        }

        fn undo(&mut self, _target: &mut Counter) -> CommandResult {
            Err(CommandError::Custom("one way".into()))
        }

        fn redo(&mut self, _target: &mut Counter) -> CommandResult {
            Err(CommandError::Custom("one way".into()))
        }

        fn description(&self) -> &str {
            "One way"
        }
    }

    #[derive(Debug)]
    struct FailingCommand;

    impl Command<Counter> for FailingCommand {
        fn execute(&mut self, _target: &mut Counter) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn undo(&mut self, _target: &mut Counter) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn redo(&mut self, _target: &mut Counter) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn description(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn dispatch_executes_and_records() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 5 }), &mut counter)
            .unwrap();

        assert_eq!(counter.value, 5);
        assert_eq!(stack.undo_count(), 1);
        assert_eq!(stack.redo_count(), 0);
    }

    #[test]
    fn undo_reverses_and_moves_to_future() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 5 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();

        assert_eq!(counter.value, 0);
        assert_eq!(stack.undo_count(), 0);
        assert_eq!(stack.redo_count(), 1);
    }

    #[test]
    fn redo_reapplies_and_moves_to_history() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 5 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();
        stack.redo(&mut counter).unwrap();

        assert_eq!(counter.value, 5);
        assert_eq!(stack.undo_count(), 1);
        assert_eq!(stack.redo_count(), 0);
    }

    #[test]
    fn redo_keeps_rest_of_future() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        stack
            .dispatch(Box::new(Add { amount: 2 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();
        stack.undo(&mut counter).unwrap();

        stack.redo(&mut counter).unwrap();
        assert_eq!(counter.value, 1);
        assert_eq!(stack.redo_count(), 1);
        stack.redo(&mut counter).unwrap();
        assert_eq!(counter.value, 3);
    }

    #[test]
    fn dispatch_discards_future() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 5 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();
        assert_eq!(stack.redo_count(), 1);

        stack
            .dispatch(Box::new(Add { amount: 3 }), &mut counter)
            .unwrap();
        assert_eq!(stack.redo_count(), 0);
        assert_eq!(counter.value, 3);
        assert_eq!(stack.redo(&mut counter), Err(CommandError::EmptyFuture));
    }

    #[test]
    fn undo_empty_returns_empty_history() {
        let mut stack = UndoStack::<Counter>::new();
        let mut counter = Counter { value: 0 };

        assert_eq!(stack.undo(&mut counter), Err(CommandError::EmptyHistory));
    }

    #[test]
    fn redo_empty_returns_empty_future() {
        let mut stack = UndoStack::<Counter>::new();
        let mut counter = Counter { value: 0 };

        assert_eq!(stack.redo(&mut counter), Err(CommandError::EmptyFuture));
    }

    #[test]
    fn failed_dispatch_records_nothing_and_keeps_future() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 2 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();

        let result = stack.dispatch(Box::new(FailingCommand), &mut counter);
        assert!(result.is_err());
        assert_eq!(stack.undo_count(), 0);
        assert_eq!(stack.redo_count(), 1);
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn failed_undo_drops_the_command() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 2 }), &mut counter)
            .unwrap();
        stack.dispatch(Box::new(OneWay), &mut counter).unwrap();

        assert_eq!(
            stack.undo(&mut counter),
            Err(CommandError::Custom("one way".into()))
        );
        assert_eq!(stack.undo_count(), 1);
        assert_eq!(stack.redo_count(), 0);
        assert!(stack.has_unsaved_changes());

        // The earlier command is still reachable.
        stack.undo(&mut counter).unwrap();
        assert_eq!(counter.value, 1);
    }

    #[test]
    fn max_undo_drops_oldest() {
        let mut stack = UndoStack::with_max_undo(2);
        let mut counter = Counter { value: 0 };

        for amount in 1..=3 {
            stack
                .dispatch(Box::new(Add { amount }), &mut counter)
                .unwrap();
        }

        assert_eq!(stack.undo_count(), 2);
        assert_eq!(counter.value, 6);

        stack.undo(&mut counter).unwrap();
        stack.undo(&mut counter).unwrap();
        assert_eq!(counter.value, 1);
        assert_eq!(stack.undo(&mut counter), Err(CommandError::EmptyHistory));
    }

    #[test]
    fn unbounded_by_default() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };
        assert_eq!(stack.max_undo(), None);

        for _ in 0..500 {
            stack
                .dispatch(Box::new(Add { amount: 1 }), &mut counter)
                .unwrap();
        }
        assert_eq!(stack.undo_count(), 500);
    }

    #[test]
    fn descriptions_most_recent_first() {
        #[derive(Debug)]
        struct Named(&'static str);

        impl Command<Counter> for Named {
            fn execute(&mut self, _target: &mut Counter) -> CommandResult {
                Ok(())
            }
            fn undo(&mut self, _target: &mut Counter) -> CommandResult {
                Ok(())
            }
            fn redo(&mut self, _target: &mut Counter) -> CommandResult {
                Ok(())
            }
            fn description(&self) -> &str {
                self.0
            }
        }

        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };
        assert_eq!(stack.undo_descriptions().count(), 0);

        for name in ["first", "second", "third"] {
            stack.dispatch(Box::new(Named(name)), &mut counter).unwrap();
        }
        let undos: Vec<&str> = stack.undo_descriptions().collect();
        assert_eq!(undos, vec!["third", "second", "first"]);

        stack.undo(&mut counter).unwrap();
        stack.undo(&mut counter).unwrap();
        let redos: Vec<&str> = stack.redo_descriptions().collect();
        assert_eq!(redos, vec!["second", "third"]);
    }

    #[test]
    fn can_undo_can_redo() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        assert!(!stack.can_undo());
        assert!(!stack.can_redo());

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        assert!(stack.can_undo());
        assert!(!stack.can_redo());

        stack.undo(&mut counter).unwrap();
        assert!(!stack.can_undo());
        assert!(stack.can_redo());
    }

    #[test]
    fn save_point_follows_undo_and_redo() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };
        assert!(!stack.has_unsaved_changes());

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        assert!(stack.has_unsaved_changes());
        stack.mark_saved();
        assert!(!stack.has_unsaved_changes());

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        assert!(stack.has_unsaved_changes());
        stack.undo(&mut counter).unwrap();
        assert!(!stack.has_unsaved_changes());
        stack.undo(&mut counter).unwrap();
        assert!(stack.has_unsaved_changes());
        stack.redo(&mut counter).unwrap();
        assert!(!stack.has_unsaved_changes());
    }

    #[test]
    fn save_point_lost_when_future_discarded() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        stack.mark_saved();
        stack.undo(&mut counter).unwrap();
        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        // Same value, but the saved command is gone for good.
        stack.undo(&mut counter).unwrap();
        assert!(stack.has_unsaved_changes());
    }

    #[test]
    fn save_point_lost_when_limit_drops_it() {
        let mut stack = UndoStack::with_max_undo(1);
        let mut counter = Counter { value: 0 };
        stack.mark_saved();

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();
        assert!(stack.has_unsaved_changes());
    }

    #[test]
    fn clear_empties_both_sequences() {
        let mut stack = UndoStack::new();
        let mut counter = Counter { value: 0 };

        stack
            .dispatch(Box::new(Add { amount: 1 }), &mut counter)
            .unwrap();
        stack
            .dispatch(Box::new(Add { amount: 2 }), &mut counter)
            .unwrap();
        stack.undo(&mut counter).unwrap();

        stack.clear();
        assert_eq!(stack.undo_count(), 0);
        assert_eq!(stack.redo_count(), 0);
        assert!(stack.has_unsaved_changes());
    }

    #[test]
    fn debug_impl() {
        let stack = UndoStack::<Counter>::new();
        let debug = format!("{stack:?}");
        assert!(debug.contains("UndoStack"));
        assert!(debug.contains("undo_count"));
    }
}
