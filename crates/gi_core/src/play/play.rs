//! The play record and its geometry store
//!
//! `Play` owns the canonical marker and path collections for one diagram
//! and is the only writer of them. Each mutation is a single in-place
//! update, so a renderer never observes torn state, and the two structural
//! invariants hold by construction:
//!
//! - marker ids are unique and never reused within a play
//! - every path's `marker_id` refers to a marker present in `markers`

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::Point;
use crate::play::marker::{MarkerId, PlayerMarker, Side};
use crate::play::path::PlayerPath;

/// Hit radius for marker taps, in percent units. Matches the footprint of
/// the 32px marker chip on a typically sized editing surface.
pub const MARKER_HIT_RADIUS: f32 = 4.0;

/// A named, diagrammed scheme: markers, paths, and descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub name: String,
    /// Offense/defense classification, used for playbook filtering.
    pub side: Side,
    /// Free-text category within the side, e.g. "Pass", "Run", "Zone".
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub formation: String,
    #[serde(default)]
    pub description: String,
    markers: Vec<PlayerMarker>,
    paths: Vec<PlayerPath>,
    /// Next raw marker id. Serialized with the play so ids stay unique
    /// across save/load.
    #[serde(default)]
    next_marker_id: u64,
}

impl Play {
    /// Create an empty play with a fresh id and the original app's
    /// defaults for a new play.
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            side,
            sub_type: String::new(),
            formation: "Custom".to_string(),
            description: String::new(),
            markers: Vec::new(),
            paths: Vec::new(),
            next_marker_id: 0,
        }
    }

    // ========================
    // Read access
    // ========================

    /// Markers in insertion order (stable rendering order).
    pub fn markers(&self) -> &[PlayerMarker] {
        &self.markers
    }

    pub fn paths(&self) -> &[PlayerPath] {
        &self.paths
    }

    pub fn marker(&self, id: MarkerId) -> Option<&PlayerMarker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// The committed path for a marker, if any.
    pub fn path_for(&self, marker_id: MarkerId) -> Option<&PlayerPath> {
        self.paths.iter().find(|p| p.marker_id == marker_id)
    }

    /// Hit-test a normalized point against the markers. Returns the
    /// nearest marker within `radius`, for hosts without their own
    /// element-level hit-testing.
    pub fn marker_at(&self, point: Point, radius: f32) -> Option<MarkerId> {
        self.markers
            .iter()
            .map(|m| (m.id, m.position.distance_to(point)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(id, _)| id)
    }

    // ========================
    // Geometry store mutations
    // ========================

    /// Create a marker with a fresh unique id and append it.
    pub fn add_marker(
        &mut self,
        side: Side,
        label: impl Into<String>,
        position: Point,
    ) -> MarkerId {
        let id = self.alloc_marker_id();
        self.markers.push(PlayerMarker { id, side, label: label.into(), position });
        id
    }

    /// Add a marker with the side's default label and placement.
    pub fn add_default_marker(&mut self, side: Side) -> MarkerId {
        self.add_marker(side, side.default_label(), side.default_position())
    }

    /// Replace a marker's position. No-op if the id is unknown. Returns
    /// whether a marker was moved.
    pub fn move_marker(&mut self, id: MarkerId, position: Point) -> bool {
        match self.markers.iter_mut().find(|m| m.id == id) {
            Some(marker) => {
                marker.position = position;
                true
            }
            None => false,
        }
    }

    /// Remove a marker and every path referencing it, in one update.
    /// No-op if the id is unknown. Returns whether a marker was removed.
    pub fn remove_marker(&mut self, id: MarkerId) -> bool {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);
        if self.markers.len() == before {
            return false;
        }
        self.paths.retain(|p| p.marker_id != id);
        true
    }

    /// Commit a captured polyline for a marker, replacing any prior path
    /// for it. Captures of one point or fewer are discarded silently (a
    /// tap, not an error), as are captures for unknown markers. Returns
    /// whether a path was committed.
    pub fn set_path(&mut self, marker_id: MarkerId, points: Vec<Point>) -> bool {
        let path = PlayerPath::new(marker_id, points);
        if !path.is_committable() || self.marker(marker_id).is_none() {
            return false;
        }
        self.paths.retain(|p| p.marker_id != marker_id);
        self.paths.push(path);
        true
    }

    fn alloc_marker_id(&mut self) -> MarkerId {
        let id = MarkerId::new(self.next_marker_id);
        self.next_marker_id += 1;
        id
    }
}
