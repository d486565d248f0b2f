//! Fields of [`RigDocument`] and rig-specific commands.
//!
//! The editor builds its edits out of the generic commands in
//! [`facerig_core::undo`]; the functions here name the parts of the document
//! those commands address.

use std::path::PathBuf;

use facerig_core::undo::{Command, CommandError, CommandResult, Field};

use crate::document::RigDocument;
use crate::groups::{SuperNodeGroup, WireGroup};
use crate::marker::{GuideMarker, MarkerId, MarkerList};
use crate::math::Point2;

pub(crate) fn markers() -> Field<RigDocument, MarkerList> {
    Field::new("markers", |doc: &mut RigDocument| Some(&mut doc.markers))
}

pub(crate) fn marker_count() -> Field<RigDocument, u32> {
    Field::new("marker count", |doc: &mut RigDocument| {
        Some(&mut doc.marker_count)
    })
}

pub(crate) fn marker_scale() -> Field<RigDocument, f64> {
    Field::new("marker scale", |doc: &mut RigDocument| {
        Some(&mut doc.marker_scale)
    })
}

pub(crate) fn active_markers() -> Field<RigDocument, Vec<MarkerId>> {
    Field::new("active markers", |doc: &mut RigDocument| {
        Some(&mut doc.active_markers)
    })
}

pub(crate) fn wire_groups() -> Field<RigDocument, Vec<WireGroup>> {
    Field::new("wire groups", |doc: &mut RigDocument| {
        Some(&mut doc.wire_groups)
    })
}

pub(crate) fn super_node_groups() -> Field<RigDocument, Vec<SuperNodeGroup>> {
    Field::new("super node groups", |doc: &mut RigDocument| {
        Some(&mut doc.super_node_groups)
    })
}

pub(crate) fn background_image() -> Field<RigDocument, Option<PathBuf>> {
    Field::new("background image", |doc: &mut RigDocument| {
        Some(&mut doc.background_image)
    })
}

pub(crate) fn reflection_x() -> Field<RigDocument, f64> {
    Field::new("reflection line", |doc: &mut RigDocument| {
        Some(&mut doc.reflection_line.x)
    })
}

pub(crate) fn reflection_adjustable() -> Field<RigDocument, bool> {
    Field::new("reflection line lock", |doc: &mut RigDocument| {
        Some(&mut doc.reflection_line.adjustable)
    })
}

pub(crate) fn reflection_visible() -> Field<RigDocument, bool> {
    Field::new("reflection line visibility", |doc: &mut RigDocument| {
        Some(&mut doc.reflection_line.visible)
    })
}

pub(crate) fn marker_position(id: MarkerId) -> Field<RigDocument, Point2> {
    Field::new(format!("marker {id} position"), move |doc: &mut RigDocument| {
        doc.markers.get_mut(id).map(|m| &mut m.position)
    })
}

pub(crate) fn marker_scale_of(id: MarkerId) -> Field<RigDocument, f64> {
    Field::new(format!("marker {id} scale"), move |doc: &mut RigDocument| {
        doc.markers.get_mut(id).map(|m| &mut m.scale)
    })
}

pub(crate) fn marker_active(id: MarkerId) -> Field<RigDocument, bool> {
    Field::new(format!("marker {id} active"), move |doc: &mut RigDocument| {
        doc.markers.get_mut(id).map(|m| &mut m.active)
    })
}

pub(crate) fn marker_visible(id: MarkerId) -> Field<RigDocument, bool> {
    Field::new(format!("marker {id} visibility"), move |doc: &mut RigDocument| {
        doc.markers.get_mut(id).map(|m| &mut m.visible)
    })
}

/// Removes a guide marker; undo puts it back at the same place in the list.
#[derive(Debug)]
pub(crate) struct RemoveMarker {
    id: MarkerId,
    removed: Option<(usize, GuideMarker)>,
}

impl RemoveMarker {
    pub(crate) fn new(id: MarkerId) -> Self {
        Self { id, removed: None }
    }
}

impl Command<RigDocument> for RemoveMarker {
    fn execute(&mut self, target: &mut RigDocument) -> CommandResult {
        self.redo(target)
    }

    fn undo(&mut self, target: &mut RigDocument) -> CommandResult {
        let (index, marker) = self.removed.take().ok_or_else(|| {
            CommandError::InvalidOperation(format!("marker {} was not removed", self.id))
        })?;
        target.markers.insert_at(index, marker);
        Ok(())
    }

    fn redo(&mut self, target: &mut RigDocument) -> CommandResult {
        let index = target.markers.position_of(self.id).ok_or_else(|| {
            CommandError::InvalidOperation(format!("no marker {} to remove", self.id))
        })?;
        self.removed = Some((index, target.markers.remove_at(index)));
        Ok(())
    }

    fn description(&self) -> &str {
        "Remove guide marker"
    }
}
