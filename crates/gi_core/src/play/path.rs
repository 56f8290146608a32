use serde::{Deserialize, Serialize};

use crate::field::Point;
use crate::play::marker::MarkerId;

/// An ordered polyline representing a marker's intended movement.
///
/// Points are appended as captured during the draw gesture; there is no
/// resampling or simplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPath {
    /// The marker this path visualizes movement for. A play never holds
    /// more than one committed path per marker.
    pub marker_id: MarkerId,
    pub points: Vec<Point>,
}

impl PlayerPath {
    pub fn new(marker_id: MarkerId, points: Vec<Point>) -> Self {
        Self { marker_id, points }
    }

    /// A capture is only worth committing once it holds more than one
    /// point; a single point is a tap, not a path.
    pub fn is_committable(&self) -> bool {
        self.points.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_threshold() {
        let id = MarkerId::new(1);
        assert!(!PlayerPath::new(id, vec![]).is_committable());
        assert!(!PlayerPath::new(id, vec![Point::new(50.0, 70.0)]).is_committable());
        assert!(PlayerPath::new(id, vec![Point::new(50.0, 70.0), Point::new(50.0, 40.0)])
            .is_committable());
    }
}
