use std::path::Path;

use serde::Deserialize;

use crate::error::RigResult;

/// Editor settings loaded from `facerig.toml`.
///
/// Every key is optional:
///
/// ```toml
/// width = 640.0
/// height = 480.0
/// marker_scale = 0.8
/// show_reflection_line = false
/// max_undo = 200
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Canvas width in scene units.
    pub width: f64,
    /// Canvas height in scene units.
    pub height: f64,
    /// Initial scale of new guide markers.
    pub marker_scale: f64,
    pub show_reflection_line: bool,
    /// Undo history limit. Unbounded when absent.
    pub max_undo: Option<usize>,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            marker_scale: 1.0,
            show_reflection_line: true,
            max_undo: None,
        }
    }
}

impl RigSettings {
    pub fn from_toml_str(content: &str) -> RigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> RigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads settings, falling back to defaults if the file is missing or
    /// invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!(
                    "Loaded rig settings from {} ({}x{})",
                    path.display(),
                    settings.width,
                    settings.height
                );
                settings
            }
            Err(e) => {
                log::warn!("Using default rig settings, {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
