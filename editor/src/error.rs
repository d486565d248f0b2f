use facerig_core::undo::CommandError;
use thiserror::Error;

use crate::marker::MarkerId;

/// Errors returned by rig editing operations.
#[derive(Error, Debug)]
pub enum RigError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("no guide marker with id {0}")]
    MarkerNotFound(MarkerId),
    #[error("a wire group needs at least 2 active guide markers, {selected} selected")]
    NotEnoughMarkers { selected: usize },
    #[error("a wire group named \"{0}\" already exists")]
    DuplicateWireGroup(String),
    #[error("unknown super node form: {0}")]
    UnknownSuperNodeForm(String),
    #[error("the reflection line is locked")]
    ReflectionLocked,
    #[error("failed to parse settings: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rig editing operations.
pub type RigResult<T = ()> = Result<T, RigError>;
