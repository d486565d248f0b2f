use std::path::PathBuf;

use facerig_core::undo::Editable;

use crate::groups::{SuperNodeGroup, WireGroup};
use crate::marker::{GuideMarker, MarkerId, MarkerList};
use crate::reflection::ReflectionLine;
use crate::settings::RigSettings;

/// The rig being edited: everything placed on the face canvas.
///
/// Mutate it through [`RigEditor`](crate::RigEditor) so every change is
/// recorded in the undo history.
#[derive(Debug, Clone, PartialEq)]
pub struct RigDocument {
    pub width: f64,
    pub height: f64,
    pub background_image: Option<PathBuf>,
    /// Index given to the next guide marker.
    pub marker_count: u32,
    pub marker_scale: f64,
    pub markers: MarkerList,
    /// Activated markers in activation order.
    pub active_markers: Vec<MarkerId>,
    pub wire_groups: Vec<WireGroup>,
    pub super_node_groups: Vec<SuperNodeGroup>,
    pub reflection_line: ReflectionLine,
}

impl Editable for RigDocument {}

impl RigDocument {
    pub fn new(settings: &RigSettings) -> Self {
        let mut reflection_line = ReflectionLine::centered(settings.width);
        reflection_line.visible = settings.show_reflection_line;
        Self {
            width: settings.width,
            height: settings.height,
            background_image: None,
            marker_count: 1,
            marker_scale: settings.marker_scale,
            markers: MarkerList::new(),
            active_markers: Vec::new(),
            wire_groups: Vec::new(),
            super_node_groups: Vec::new(),
            reflection_line,
        }
    }

    pub fn marker(&self, id: MarkerId) -> Option<&GuideMarker> {
        self.markers.get(id)
    }

    /// Position of the marker in the activation order, if it is active.
    pub fn active_index(&self, id: MarkerId) -> Option<usize> {
        self.active_markers.iter().position(|&active| active == id)
    }

    pub fn wire_group(&self, name: &str) -> Option<&WireGroup> {
        self.wire_groups.iter().find(|group| group.name == name)
    }
}

impl Default for RigDocument {
    fn default() -> Self {
        Self::new(&RigSettings::default())
    }
}
