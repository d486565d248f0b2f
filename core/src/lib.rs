//! # FaceRig Core
//!
//! Toolkit-independent editing primitives for the FaceRig editor.

pub mod undo;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
