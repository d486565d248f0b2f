//! Composite commands recorded as a single undo step.

use std::fmt;

use super::command::{Command, CommandResult, Editable};

/// A group of commands treated as one command.
///
/// Breaks an operation into several steps while keeping a single entry on the
/// [`UndoStack`](super::UndoStack). Children run in construction order on
/// `execute` and `redo`, and in strict reverse order on `undo`, so every
/// inverse is applied to the state it was computed against.
///
/// The children are fixed once the group is built. A failing child stops the
/// group and its error is returned as is; children that already ran are not
/// rolled back.
pub struct CommandGroup<T: Editable> {
    commands: Vec<Box<dyn Command<T>>>,
    description: String,
}

impl<T: Editable> CommandGroup<T> {
    /// Creates a group from an ordered list of commands.
    pub fn new(description: impl Into<String>, commands: Vec<Box<dyn Command<T>>>) -> Self {
        Self {
            commands,
            description: description.into(),
        }
    }

    /// Creates a builder for assembling a group step by step.
    pub fn builder(description: impl Into<String>) -> CommandGroupBuilder<T> {
        CommandGroupBuilder {
            commands: Vec::new(),
            description: description.into(),
        }
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the descriptions of the direct children, in execution order.
    pub fn child_descriptions(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.description())
    }
}

impl<T: Editable> Command<T> for CommandGroup<T> {
    fn execute(&mut self, target: &mut T) -> CommandResult {
        for command in &mut self.commands {
            command.execute(target)?;
        }
        Ok(())
    }

    fn undo(&mut self, target: &mut T) -> CommandResult {
        for command in self.commands.iter_mut().rev() {
            command.undo(target)?;
        }
        Ok(())
    }

    fn redo(&mut self, target: &mut T) -> CommandResult {
        for command in &mut self.commands {
            command.redo(target)?;
        }
        Ok(())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<T: Editable> fmt::Debug for CommandGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandGroup")
            .field("description", &self.description)
            .field("commands", &self.commands)
            .finish()
    }
}

/// Builder for [`CommandGroup`]. The group is immutable once built.
pub struct CommandGroupBuilder<T: Editable> {
    commands: Vec<Box<dyn Command<T>>>,
    description: String,
}

impl<T: Editable> CommandGroupBuilder<T> {
    /// Adds a command after the ones already added.
    pub fn command(mut self, command: impl Command<T>) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    /// Adds an already boxed command.
    pub fn boxed(mut self, command: Box<dyn Command<T>>) -> Self {
        self.commands.push(command);
        self
    }

    /// Adds every command from `commands`, in iteration order.
    pub fn commands<I>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Command<T>>>,
    {
        self.commands.extend(commands);
        self
    }

    /// Returns `true` if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the group.
    pub fn build(self) -> CommandGroup<T> {
        CommandGroup {
            commands: self.commands,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undo::{CommandError, Field, SetAttribute};

    #[derive(Default)]
    struct Wire {
        base: i32,
        nodes: Vec<i32>,
        log: Vec<&'static str>,
    }

    impl Editable for Wire {}

    /// Appends `base * factor`, so it depends on whatever `base` is when it runs.
    #[derive(Debug)]
    struct AppendScaled {
        factor: i32,
    }

    impl Command<Wire> for AppendScaled {
        fn execute(&mut self, target: &mut Wire) -> CommandResult {
            self.redo(target)
        }

        fn undo(&mut self, target: &mut Wire) -> CommandResult {
            let expected = target.base * self.factor;
            match target.nodes.last() {
                Some(&last) if last == expected => {
                    target.nodes.pop();
                    Ok(())
                }
                _ => Err(CommandError::Custom(format!(
                    "expected {expected} on top of nodes"
                ))),
            }
        }

        fn redo(&mut self, target: &mut Wire) -> CommandResult {
            target.nodes.push(target.base * self.factor);
            Ok(())
        }

        fn description(&self) -> &str {
            "Append scaled"
        }
    }

    #[derive(Debug)]
    struct Trace(&'static str);

    impl Command<Wire> for Trace {
        fn execute(&mut self, target: &mut Wire) -> CommandResult {
            target.log.push(self.0);
            Ok(())
        }

        fn undo(&mut self, target: &mut Wire) -> CommandResult {
            target.log.push(self.0);
            Ok(())
        }

        fn redo(&mut self, target: &mut Wire) -> CommandResult {
            target.log.push(self.0);
            Ok(())
        }

        fn description(&self) -> &str {
            self.0
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Command<Wire> for Failing {
        fn execute(&mut self, _target: &mut Wire) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn undo(&mut self, _target: &mut Wire) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn redo(&mut self, _target: &mut Wire) -> CommandResult {
            Err(CommandError::Custom("always fails".into()))
        }

        fn description(&self) -> &str {
            "Failing"
        }
    }

    fn base() -> Field<Wire, i32> {
        Field::new("base", |w: &mut Wire| Some(&mut w.base))
    }

    #[test]
    fn children_run_forward_and_undo_in_reverse() {
        let mut wire = Wire::default();
        let mut group = CommandGroup::builder("Trace")
            .command(Trace("a"))
            .command(Trace("b"))
            .command(Trace("c"))
            .build();

        group.execute(&mut wire).unwrap();
        assert_eq!(wire.log, vec!["a", "b", "c"]);

        wire.log.clear();
        group.undo(&mut wire).unwrap();
        assert_eq!(wire.log, vec!["c", "b", "a"]);

        wire.log.clear();
        group.redo(&mut wire).unwrap();
        assert_eq!(wire.log, vec!["a", "b", "c"]);
    }

    #[test]
    fn later_child_sees_state_from_earlier_child() {
        let mut wire = Wire {
            base: 1,
            ..Default::default()
        };
        let mut group = CommandGroup::builder("Rebase and append")
            .command(SetAttribute::new(base(), 3))
            .command(AppendScaled { factor: 10 })
            .build();

        group.execute(&mut wire).unwrap();
        assert_eq!(wire.base, 3);
        assert_eq!(wire.nodes, vec![30]);

        // AppendScaled's inverse only holds while base is still 3, so it
        // must be undone before the SetAttribute.
        group.undo(&mut wire).unwrap();
        assert_eq!(wire.base, 1);
        assert!(wire.nodes.is_empty());

        group.redo(&mut wire).unwrap();
        assert_eq!(wire.base, 3);
        assert_eq!(wire.nodes, vec![30]);
    }

    #[test]
    fn nested_groups_unwind_depth_first() {
        let mut wire = Wire::default();
        let inner = CommandGroup::builder("Inner")
            .command(Trace("b"))
            .command(Trace("c"))
            .build();
        let mut outer = CommandGroup::builder("Outer")
            .command(Trace("a"))
            .command(inner)
            .command(Trace("d"))
            .build();

        outer.execute(&mut wire).unwrap();
        assert_eq!(wire.log, vec!["a", "b", "c", "d"]);
        wire.log.clear();
        outer.undo(&mut wire).unwrap();
        assert_eq!(wire.log, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn failing_child_stops_without_rollback() {
        let mut wire = Wire::default();
        let mut group = CommandGroup::new(
            "Partial",
            vec![
                Box::new(Trace("a")) as Box<dyn Command<Wire>>,
                Box::new(Failing),
                Box::new(Trace("c")),
            ],
        );

        let err = group.execute(&mut wire).unwrap_err();
        assert_eq!(err, CommandError::Custom("always fails".into()));
        assert_eq!(wire.log, vec!["a"]);
    }

    #[test]
    fn accessors() {
        let group: CommandGroup<Wire> = CommandGroup::builder("Empty").build();
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
        assert_eq!(group.description(), "Empty");

        let group = CommandGroup::builder("Two")
            .command(Trace("a"))
            .boxed(Box::new(Trace("b")))
            .build();
        assert_eq!(group.len(), 2);
        let children: Vec<&str> = group.child_descriptions().collect();
        assert_eq!(children, vec!["a", "b"]);
        assert!(format!("{group:?}").contains("CommandGroup"));
    }
}
