use std::path::Path;

use facerig_core::undo::{
    AddItem, AppendItem, Command, CommandError, CommandGroup, SetAttribute, UndoStack,
};

use crate::commands::{self, RemoveMarker};
use crate::document::RigDocument;
use crate::error::{RigError, RigResult};
use crate::groups::{SuperNodeForm, SuperNodeGroup, WireGroup};
use crate::marker::{GuideMarker, MarkerId};
use crate::math::Point2;
use crate::settings::RigSettings;

/// A rig editing session: the document plus its undo history.
///
/// Every mutating method dispatches one command (often a
/// [`CommandGroup`]) so a single [`undo`](Self::undo) reverses the whole
/// user action.
pub struct RigEditor {
    document: RigDocument,
    history: UndoStack<RigDocument>,
    settings: RigSettings,
    next_marker_id: u32,
}

impl RigEditor {
    pub fn new(settings: RigSettings) -> Self {
        Self {
            document: RigDocument::new(&settings),
            history: new_history(&settings),
            settings,
            next_marker_id: 1,
        }
    }

    pub fn document(&self) -> &RigDocument {
        &self.document
    }

    pub fn history(&self) -> &UndoStack<RigDocument> {
        &self.history
    }

    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    pub fn marker(&self, id: MarkerId) -> Option<&GuideMarker> {
        self.document.marker(id)
    }

    pub fn active_index(&self, id: MarkerId) -> Option<usize> {
        self.document.active_index(id)
    }

    pub fn wire_group(&self, name: &str) -> Option<&WireGroup> {
        self.document.wire_group(name)
    }

    fn dispatch(&mut self, command: impl Command<RigDocument>) -> RigResult {
        self.history
            .dispatch(Box::new(command), &mut self.document)
            .map_err(RigError::from)
    }

    fn require_marker(&self, id: MarkerId) -> RigResult<&GuideMarker> {
        self.document.marker(id).ok_or(RigError::MarkerNotFound(id))
    }

    fn allocate_marker_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;
        id
    }

    // -----------------------------------------------------------------------
    // Guide markers
    // -----------------------------------------------------------------------

    /// Places a new guide marker and returns its id.
    ///
    /// The marker takes the next marker index and the current marker scale.
    pub fn add_guide_marker(&mut self, position: Point2) -> RigResult<MarkerId> {
        let id = self.allocate_marker_id();
        let index = self.document.marker_count;
        let marker = GuideMarker::new(id, index, position, self.document.marker_scale);

        let group = CommandGroup::builder("Add guide marker")
            .command(AddItem::new(commands::markers(), marker))
            .command(SetAttribute::new(commands::marker_count(), index + 1))
            .build();
        self.dispatch(group)?;
        Ok(id)
    }

    pub fn move_marker(&mut self, id: MarkerId, position: Point2) -> RigResult {
        self.require_marker(id)?;
        self.dispatch(
            SetAttribute::new(commands::marker_position(id), position)
                .with_description("Move guide marker"),
        )
    }

    /// Sets the marker scale to `percent / 100` and applies it to every marker.
    pub fn set_marker_scale(&mut self, percent: f64) -> RigResult {
        let scale = percent / 100.0;
        let per_marker: Vec<Box<dyn Command<RigDocument>>> = self
            .document
            .markers
            .ids()
            .map(|id| {
                Box::new(SetAttribute::new(commands::marker_scale_of(id), scale))
                    as Box<dyn Command<RigDocument>>
            })
            .collect();

        let group = CommandGroup::builder("Scale guide markers")
            .commands(per_marker)
            .command(SetAttribute::new(commands::marker_scale(), scale))
            .build();
        self.dispatch(group)
    }

    pub fn set_marker_visible(&mut self, id: MarkerId, visible: bool) -> RigResult {
        self.require_marker(id)?;
        let description = if visible {
            "Show guide marker"
        } else {
            "Hide guide marker"
        };
        self.dispatch(
            SetAttribute::new(commands::marker_visible(id), visible).with_description(description),
        )
    }

    /// Activates an inactive marker (appending it to the activation order) or
    /// deactivates an active one. Returns the new state.
    pub fn toggle_marker_active(&mut self, id: MarkerId) -> RigResult<bool> {
        self.require_marker(id)?;
        let mut active = self.document.active_markers.clone();
        let now_active = match active.iter().position(|&a| a == id) {
            Some(index) => {
                active.remove(index);
                false
            }
            None => {
                active.push(id);
                true
            }
        };

        let description = if now_active {
            "Activate guide marker"
        } else {
            "Deactivate guide marker"
        };
        let group = CommandGroup::builder(description)
            .command(SetAttribute::new(commands::active_markers(), active))
            .command(SetAttribute::new(commands::marker_active(id), now_active))
            .build();
        self.dispatch(group)?;
        Ok(now_active)
    }

    /// Removes a marker, dropping it from the activation order first.
    pub fn delete_marker(&mut self, id: MarkerId) -> RigResult {
        self.require_marker(id)?;
        let mut builder = CommandGroup::builder("Delete guide marker");
        if self.document.active_index(id).is_some() {
            let remaining: Vec<MarkerId> = self
                .document
                .active_markers
                .iter()
                .copied()
                .filter(|&a| a != id)
                .collect();
            builder = builder.command(SetAttribute::new(commands::active_markers(), remaining));
        }
        self.dispatch(builder.command(RemoveMarker::new(id)).build())
    }

    /// Adds a mirrored copy of each marker across the reflection line.
    ///
    /// Copies keep the source's index and take the current marker scale.
    /// Returns the ids of the new markers, in the order of `ids`. An empty
    /// selection records nothing.
    pub fn reflect_markers(&mut self, ids: &[MarkerId]) -> RigResult<Vec<MarkerId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut copies = Vec::with_capacity(ids.len());
        for &id in ids {
            let source = self.require_marker(id)?;
            let position = self.document.reflection_line.reflect(&source.position);
            copies.push((source.index, position));
        }

        let mut new_ids = Vec::with_capacity(copies.len());
        let mut builder = CommandGroup::builder("Reflect guide markers");
        for (index, position) in copies {
            let id = self.allocate_marker_id();
            let marker = GuideMarker::new(id, index, position, self.document.marker_scale);
            builder = builder.command(AddItem::new(commands::markers(), marker));
            new_ids.push(id);
        }
        self.dispatch(builder.build())?;
        Ok(new_ids)
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    /// Builds a wire group from the active markers, in activation order.
    ///
    /// Needs at least two active markers and a name no other wire group uses.
    /// The markers are deactivated and the activation order is cleared.
    pub fn add_wire_group(&mut self, name: &str) -> RigResult {
        let selected = self.document.active_markers.len();
        if selected < 2 {
            return Err(RigError::NotEnoughMarkers { selected });
        }
        if self.document.wire_group(name).is_some() {
            return Err(RigError::DuplicateWireGroup(name.to_string()));
        }

        let positions = self
            .document
            .active_markers
            .iter()
            .map(|&id| self.require_marker(id).map(|m| m.position))
            .collect::<RigResult<Vec<_>>>()?;
        let group = WireGroup::from_positions(name, positions, self.document.marker_scale);

        let mut builder = CommandGroup::builder("Add wire group")
            .command(AppendItem::new(commands::wire_groups(), group));
        for &id in &self.document.active_markers {
            builder = builder.command(SetAttribute::new(commands::marker_active(id), false));
        }
        let builder = builder.command(SetAttribute::new(commands::active_markers(), Vec::new()));
        self.dispatch(builder.build())?;

        log::info!("Added wire group \"{name}\" with {selected} nodes");
        Ok(())
    }

    pub fn add_super_node(&mut self, form: SuperNodeForm, position: Point2) -> RigResult {
        let group = SuperNodeGroup { form, position };
        self.dispatch(
            AppendItem::new(commands::super_node_groups(), group)
                .with_description(format!("Add {form} super node")),
        )
    }

    // -----------------------------------------------------------------------
    // Reflection line and background
    // -----------------------------------------------------------------------

    /// Moves the reflection line. Fails if the line is locked.
    pub fn move_reflection_line(&mut self, x: f64) -> RigResult {
        if !self.document.reflection_line.adjustable {
            return Err(RigError::ReflectionLocked);
        }
        self.dispatch(SetAttribute::new(commands::reflection_x(), x))
    }

    pub fn set_reflection_adjustable(&mut self, adjustable: bool) -> RigResult {
        let description = if adjustable {
            "Unlock reflection line"
        } else {
            "Lock reflection line"
        };
        self.dispatch(
            SetAttribute::new(commands::reflection_adjustable(), adjustable)
                .with_description(description),
        )
    }

    pub fn set_reflection_visible(&mut self, visible: bool) -> RigResult {
        self.dispatch(SetAttribute::new(commands::reflection_visible(), visible))
    }

    /// Uses `path` as background image if it exists, otherwise clears it.
    pub fn set_background_image(&mut self, path: Option<&Path>) -> RigResult {
        let image = path.filter(|p| p.exists()).map(Path::to_path_buf);
        if image.is_none()
            && let Some(p) = path
        {
            log::warn!("Background image {} does not exist", p.display());
        }
        self.dispatch(SetAttribute::new(commands::background_image(), image))
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Undoes the last action. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> RigResult<bool> {
        match self.history.undo(&mut self.document) {
            Ok(()) => Ok(true),
            Err(CommandError::EmptyHistory) => {
                log::debug!("Nothing to undo");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Redoes the last undone action. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> RigResult<bool> {
        match self.history.redo(&mut self.document) {
            Ok(()) => Ok(true),
            Err(CommandError::EmptyFuture) => {
                log::debug!("Nothing to redo");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.history.undo_descriptions()
    }

    pub fn redo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.history.redo_descriptions()
    }

    pub fn mark_saved(&mut self) {
        self.history.mark_saved();
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.history.has_unsaved_changes()
    }

    /// Starts over with an empty document and an empty history.
    ///
    /// Marker index and marker scale go back to their settings values too,
    /// unlike a canvas-only clear that keeps them.
    pub fn clear(&mut self) {
        log::info!("Clearing rig");
        self.document = RigDocument::new(&self.settings);
        self.history = new_history(&self.settings);
    }
}

impl Default for RigEditor {
    fn default() -> Self {
        Self::new(RigSettings::default())
    }
}

fn new_history(settings: &RigSettings) -> UndoStack<RigDocument> {
    match settings.max_undo {
        Some(max_undo) => UndoStack::with_max_undo(max_undo),
        None => UndoStack::new(),
    }
}
