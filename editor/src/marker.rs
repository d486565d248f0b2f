//! Guide markers and the list that holds them.

use std::fmt;

use facerig_core::undo::ItemContainer;

use crate::math::Point2;

/// Stable identity of a guide marker.
///
/// Ids are never reused within an editing session, unlike the marker
/// [`index`](GuideMarker::index), which a reflected copy shares with its
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub(crate) u32);

impl MarkerId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point placed on the face image that wire groups are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideMarker {
    pub id: MarkerId,
    /// Number shown next to the marker.
    pub index: u32,
    pub position: Point2,
    pub scale: f64,
    /// Whether the marker is part of the current wire-group selection.
    pub active: bool,
    pub visible: bool,
}

impl GuideMarker {
    pub fn new(id: MarkerId, index: u32, position: Point2, scale: f64) -> Self {
        Self {
            id,
            index,
            position,
            scale,
            active: false,
            visible: true,
        }
    }
}

/// Ordered list of guide markers, addressed by [`MarkerId`].
///
/// Implements [`ItemContainer`] by id so that an undone "add marker" removes
/// exactly that marker, wherever it ended up in the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerList {
    markers: Vec<GuideMarker>,
}

impl MarkerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MarkerId) -> Option<&GuideMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut GuideMarker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MarkerId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuideMarker> {
        self.markers.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.markers.iter().map(|m| m.id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub(crate) fn position_of(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().position(|m| m.id == id)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> GuideMarker {
        self.markers.remove(index)
    }

    /// Inserts at `index`, or at the end if the list has become shorter.
    pub(crate) fn insert_at(&mut self, index: usize, marker: GuideMarker) {
        let index = index.min(self.markers.len());
        self.markers.insert(index, marker);
    }
}

impl ItemContainer<GuideMarker> for MarkerList {
    fn add_item(&mut self, item: GuideMarker) {
        self.markers.push(item);
    }

    fn remove_item(&mut self, item: &GuideMarker) -> bool {
        match self.position_of(item.id) {
            Some(index) => {
                self.markers.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains_item(&self, item: &GuideMarker) -> bool {
        self.contains(item.id)
    }
}
