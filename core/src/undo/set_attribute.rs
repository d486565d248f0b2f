//! Undoable assignment of one field.

use std::fmt;

use super::command::{Command, CommandError, CommandResult, Editable};
use super::field::Field;

/// Sets a field of the target to a new value.
///
/// The assignment
///
/// ```ignore
/// marker.scale = 2.0;
/// ```
///
/// is modeled as
///
/// ```ignore
/// SetAttribute::new(Field::new("scale", |m: &mut Marker| Some(&mut m.scale)), 2.0)
/// ```
///
/// The previous value is captured on the first [`execute`](Command::execute)
/// and restored by [`undo`](Command::undo).
pub struct SetAttribute<T, V> {
    field: Field<T, V>,
    value: V,
    original: Option<V>,
    description: String,
}

impl<T: Editable, V: Clone + Send + 'static> SetAttribute<T, V> {
    /// Creates a command that assigns `value` to `field`.
    pub fn new(field: Field<T, V>, value: V) -> Self {
        let description = format!("Set {}", field.name());
        Self {
            field,
            value,
            original: None,
            description,
        }
    }

    /// Replaces the generated description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The value captured before the first execution, if it has run.
    pub fn original(&self) -> Option<&V> {
        self.original.as_ref()
    }
}

impl<T: Editable, V: Clone + Send + 'static> Command<T> for SetAttribute<T, V> {
    fn execute(&mut self, target: &mut T) -> CommandResult {
        self.original = Some(self.field.get(target)?);
        self.redo(target)
    }

    fn undo(&mut self, target: &mut T) -> CommandResult {
        let original = self.original.clone().ok_or_else(|| {
            CommandError::InvalidOperation(format!(
                "cannot undo `{}` before it was executed",
                self.field.name()
            ))
        })?;
        self.field.set(target, original)
    }

    fn redo(&mut self, target: &mut T) -> CommandResult {
        self.field.set(target, self.value.clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<T, V> fmt::Debug for SetAttribute<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetAttribute")
            .field("field", &self.field)
            .field("executed", &self.original.is_some())
            .finish()
    }
}
