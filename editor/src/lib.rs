//! # FaceRig Editor
//!
//! GUI-free model of the face rig editor. The rig is a [`RigDocument`] made of
//! guide markers, wire groups, super-node groups and a reflection line.
//! [`RigEditor`] owns the document together with an
//! [`UndoStack`](facerig_core::undo::UndoStack) and exposes every user-facing
//! edit as a method; each of them is dispatched as commands and can be undone
//! in a single step.
//!
//! Drawing, hit-testing, menus and the on-disk format live in the GUI layer
//! and are not part of this crate.

mod commands;
mod document;
mod editor;
mod error;
mod groups;
mod marker;
pub mod math;
mod reflection;
mod settings;

pub use document::RigDocument;
pub use editor::RigEditor;
pub use error::{RigError, RigResult};
pub use groups::{SuperNodeForm, SuperNodeGroup, WireGroup};
pub use marker::{GuideMarker, MarkerId, MarkerList};
pub use reflection::ReflectionLine;
pub use settings::RigSettings;
