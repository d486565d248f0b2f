//! Reversible edit commands and the undo/redo stack.
//!
//! This module is decoupled from the rig document: anything implementing
//! [`Editable`] can be the target of a command, and higher-level crates build
//! their edits out of the primitives here.
//!
//! - [`Command`]: a reversible unit of work (`execute` / `undo` / `redo`)
//! - [`Field`]: typed accessor from a target to one of its parts
//! - [`SetAttribute`], [`AppendItem`], [`AddItem`]: elementary mutations
//! - [`CommandGroup`]: several commands recorded as one undo step
//! - [`UndoStack`]: history and future of executed commands
//!
//! # Targets are lent, not owned
//!
//! Commands never hold the object they mutate. The caller passes the target
//! as `&mut T` to every [`UndoStack::dispatch`], [`UndoStack::undo`] and
//! [`UndoStack::redo`] call, and each command finds its part of the target
//! through a [`Field`] at that moment. If the part has disappeared (a marker
//! was deleted, an index went out of range) the command fails with
//! [`CommandError::InvalidOperation`] instead of touching stale state.
//!
//! # Example
//!
//! ```
//! use facerig_core::undo::{AppendItem, Editable, Field, SetAttribute, UndoStack};
//!
//! struct Sheet {
//!     x: i32,
//!     names: Vec<&'static str>,
//! }
//! impl Editable for Sheet {}
//!
//! let mut sheet = Sheet { x: 1, names: Vec::new() };
//! let mut stack = UndoStack::new();
//!
//! let x = Field::new("x", |s: &mut Sheet| Some(&mut s.x));
//! stack.dispatch(Box::new(SetAttribute::new(x, 5)), &mut sheet).unwrap();
//! assert_eq!(sheet.x, 5);
//!
//! let names = Field::new("names", |s: &mut Sheet| Some(&mut s.names));
//! stack.dispatch(Box::new(AppendItem::new(names, "a")), &mut sheet).unwrap();
//!
//! stack.undo(&mut sheet).unwrap();
//! stack.undo(&mut sheet).unwrap();
//! assert_eq!(sheet.x, 1);
//! assert!(sheet.names.is_empty());
//! ```

mod command;
mod container;
mod field;
mod group;
mod items;
mod set_attribute;
mod stack;

pub use command::{Command, CommandError, CommandResult, Editable};
pub use container::{Appendable, ItemContainer};
pub use field::Field;
pub use group::{CommandGroup, CommandGroupBuilder};
pub use items::{AddItem, AppendItem};
pub use set_attribute::SetAttribute;
pub use stack::UndoStack;
