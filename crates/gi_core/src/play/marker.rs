use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::Point;

/// Stable identity of a marker within a play.
///
/// Allocated from a monotonic per-play counter, so an id is never reused
/// even after the marker it named has been erased.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MarkerId(u64);

impl MarkerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// Offense/defense classification, used both for whole plays and for
/// individual markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Offense,
    Defense,
}

impl Side {
    /// Default marker label for this side (`O` for offense, `X` for defense).
    pub fn default_label(&self) -> &'static str {
        match self {
            Side::Offense => "O",
            Side::Defense => "X",
        }
    }

    /// Default placement for a freshly added marker: offense below the
    /// line of scrimmage, defense above it.
    pub fn default_position(&self) -> Point {
        match self {
            Side::Offense => Point::new(50.0, 70.0),
            Side::Defense => Point::new(50.0, 30.0),
        }
    }
}

/// A labeled point representing a player's starting alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMarker {
    pub id: MarkerId,
    pub side: Side,
    /// Short display string, usually a position abbreviation. Free text,
    /// no uniqueness constraint.
    pub label: String,
    /// Normalized position in `[0,100]x[0,100]`.
    pub position: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_defaults() {
        assert_eq!(Side::Offense.default_label(), "O");
        assert_eq!(Side::Defense.default_label(), "X");
        assert_eq!(Side::Offense.default_position(), Point::new(50.0, 70.0));
        assert_eq!(Side::Defense.default_position(), Point::new(50.0, 30.0));
    }

    #[test]
    fn test_side_wire_format() {
        assert_eq!(serde_json::to_string(&Side::Offense).unwrap(), "\"offense\"");
        assert_eq!(serde_json::from_str::<Side>("\"defense\"").unwrap(), Side::Defense);
    }

    #[test]
    fn test_marker_id_display() {
        assert_eq!(MarkerId::new(7).to_string(), "marker-7");
    }
}
