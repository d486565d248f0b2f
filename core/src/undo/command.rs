//! Edit targets, reversible commands and their errors.
//!
//! - [`Editable`]: marker trait for types commands can operate on
//! - [`Command`]: a reversible edit (Command pattern)
//! - [`CommandError`] / [`CommandResult`]: error handling for commands
//!
//! Commands are self-contained: each implementation stores whatever it needs
//! to find its target part and to reverse its own effect.

use std::fmt;

use thiserror::Error;

/// Marker trait for types that serve as editing targets.
///
/// Implement this on the document the editor mutates: a rig, a scene,
/// a settings sheet.
///
/// ```
/// use facerig_core::undo::Editable;
///
/// struct Rig { /* ... */ }
/// impl Editable for Rig {}
/// ```
pub trait Editable: 'static {}

/// Error type for command and undo stack failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// [`UndoStack::undo`](super::UndoStack::undo) was called with nothing to undo.
    #[error("nothing to undo")]
    EmptyHistory,
    /// [`UndoStack::redo`](super::UndoStack::redo) was called with nothing to redo.
    #[error("nothing to redo")]
    EmptyFuture,
    /// The target no longer exposes the part a command mutates, refuses the
    /// mutation, or the command was reversed before it ever ran.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// A failure raised by an application-defined command.
    #[error("{0}")]
    Custom(String),
}

impl CommandError {
    /// Returns `true` for the recoverable "nothing to undo/redo" conditions
    /// that a UI should treat as a disabled action rather than a failure.
    pub fn is_empty_stack(&self) -> bool {
        matches!(self, Self::EmptyHistory | Self::EmptyFuture)
    }
}

/// Result type for command operations.
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// A reversible edit (Command pattern).
///
/// All three operations are required, so a command that cannot be reversed
/// or replayed does not compile.
///
/// - [`execute`](Self::execute) performs the edit for the first time and may
///   capture whatever it needs to reverse it later.
/// - [`undo`](Self::undo) reverses the edit using only data captured during
///   `execute` or construction, never by asking the target what it used to be.
/// - [`redo`](Self::redo) re-applies an edit that was undone.
///
/// # Object Safety
///
/// The trait is dyn-compatible so that different command types can share one
/// [`UndoStack`](super::UndoStack) as `Box<dyn Command<T>>`.
///
/// # Example
///
/// ```
/// use facerig_core::undo::{Command, CommandResult, Editable};
///
/// struct Counter {
///     value: i32,
/// }
/// impl Editable for Counter {}
///
/// #[derive(Debug)]
/// struct Add {
///     amount: i32,
/// }
///
/// impl Command<Counter> for Add {
///     fn execute(&mut self, target: &mut Counter) -> CommandResult {
///         self.redo(target)
///     }
///
///     fn undo(&mut self, target: &mut Counter) -> CommandResult {
///         target.value -= self.amount;
///         Ok(())
///     }
///
///     fn redo(&mut self, target: &mut Counter) -> CommandResult {
///         target.value += self.amount;
///         Ok(())
///     }
///
///     fn description(&self) -> &str {
///         "Add"
///     }
/// }
/// ```
pub trait Command<T: Editable>: fmt::Debug + Send + 'static {
    /// Performs the edit for the first time.
    fn execute(&mut self, target: &mut T) -> CommandResult;

    /// Reverses the edit.
    ///
    /// Must restore the parts of the target this command touched to their
    /// state before [`execute`](Self::execute) (or the last
    /// [`redo`](Self::redo)).
    fn undo(&mut self, target: &mut T) -> CommandResult;

    /// Re-applies the edit after an [`undo`](Self::undo).
    fn redo(&mut self, target: &mut T) -> CommandResult;

    /// A short, human-readable description for display in the edit menu.
    ///
    /// Examples: `"Set position"`, `"Add wire group"`.
    fn description(&self) -> &str;
}
