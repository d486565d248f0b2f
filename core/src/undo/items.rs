//! Undoable insertion into containers.

use std::fmt;

use super::command::{Command, CommandError, CommandResult, Editable};
use super::container::{Appendable, ItemContainer};
use super::field::Field;

/// Appends one value to a sequence; undo removes the last element.
///
/// Undo assumes nothing else appended to or removed from the sequence since
/// this command ran. If something did, undo removes whatever is last now.
/// Put dependent appends in one [`CommandGroup`](super::CommandGroup) or
/// dispatch them through the same [`UndoStack`](super::UndoStack) so they
/// are reversed in order.
pub struct AppendItem<T, C, V> {
    container: Field<T, C>,
    item: V,
    description: String,
}

impl<T, C, V> AppendItem<T, C, V>
where
    T: Editable,
    C: Appendable<V> + 'static,
    V: Clone + Send + 'static,
{
    /// Creates a command that appends `item` to `container`.
    pub fn new(container: Field<T, C>, item: V) -> Self {
        let description = format!("Append to {}", container.name());
        Self {
            container,
            item,
            description,
        }
    }

    /// Replaces the generated description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The value this command appends.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<T, C, V> Command<T> for AppendItem<T, C, V>
where
    T: Editable,
    C: Appendable<V> + 'static,
    V: Clone + Send + 'static,
{
    fn execute(&mut self, target: &mut T) -> CommandResult {
        self.redo(target)
    }

    fn undo(&mut self, target: &mut T) -> CommandResult {
        let container = self.container.locate(target)?;
        container.pop_last().map(drop).ok_or_else(|| {
            CommandError::InvalidOperation(format!("`{}` is already empty", self.container.name()))
        })
    }

    fn redo(&mut self, target: &mut T) -> CommandResult {
        self.container.locate(target)?.append(self.item.clone());
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<T, C, V> fmt::Debug for AppendItem<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppendItem")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

/// Adds one item to a collection; undo removes that item wherever it is.
pub struct AddItem<T, C, V> {
    container: Field<T, C>,
    item: V,
    description: String,
}

impl<T, C, V> AddItem<T, C, V>
where
    T: Editable,
    C: ItemContainer<V> + 'static,
    V: Clone + Send + 'static,
{
    /// Creates a command that adds `item` to `container`.
    pub fn new(container: Field<T, C>, item: V) -> Self {
        let description = format!("Add to {}", container.name());
        Self {
            container,
            item,
            description,
        }
    }

    /// Replaces the generated description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The item this command adds.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<T, C, V> Command<T> for AddItem<T, C, V>
where
    T: Editable,
    C: ItemContainer<V> + 'static,
    V: Clone + Send + 'static,
{
    fn execute(&mut self, target: &mut T) -> CommandResult {
        self.redo(target)
    }

    fn undo(&mut self, target: &mut T) -> CommandResult {
        if self.container.locate(target)?.remove_item(&self.item) {
            Ok(())
        } else {
            Err(CommandError::InvalidOperation(format!(
                "item is no longer in `{}`",
                self.container.name()
            )))
        }
    }

    fn redo(&mut self, target: &mut T) -> CommandResult {
        self.container.locate(target)?.add_item(self.item.clone());
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<T, C, V> fmt::Debug for AddItem<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddItem")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
