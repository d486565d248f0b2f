//! Wire groups and super-node groups.

use std::fmt;
use std::str::FromStr;

use crate::error::RigError;
use crate::math::Point2;

/// A named chain of wire nodes built from a selection of guide markers.
#[derive(Debug, Clone, PartialEq)]
pub struct WireGroup {
    pub name: String,
    /// Node positions in the order the markers were activated.
    pub nodes: Vec<Point2>,
    pub scale: f64,
}

impl WireGroup {
    pub fn from_positions(name: impl Into<String>, positions: Vec<Point2>, scale: f64) -> Self {
        Self {
            name: name.into(),
            nodes: positions,
            scale,
        }
    }
}

/// Shape of a super-node control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuperNodeForm {
    /// Moves freely in all four directions.
    Arrow4Point,
    /// Left/right only.
    ArrowSidePoint,
    /// Up/down only.
    ArrowUpDownPoint,
}

impl SuperNodeForm {
    pub const ALL: [Self; 3] = [
        Self::Arrow4Point,
        Self::ArrowSidePoint,
        Self::ArrowUpDownPoint,
    ];

    /// Name used by the item palette.
    pub fn name(self) -> &'static str {
        match self {
            Self::Arrow4Point => "Arrow_4Point",
            Self::ArrowSidePoint => "Arrow_sidePoint",
            Self::ArrowUpDownPoint => "Arrow_upDownPoint",
        }
    }
}

impl fmt::Display for SuperNodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the palette name with or without the `SuperNode_` prefix.
impl FromStr for SuperNodeForm {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("SuperNode_").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|form| form.name() == name)
            .ok_or_else(|| RigError::UnknownSuperNodeForm(s.to_string()))
    }
}

/// A super-node control dropped on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SuperNodeGroup {
    pub form: SuperNodeForm,
    pub position: Point2,
}
