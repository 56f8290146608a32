//! Builtin demo plays
//!
//! The three plays the app ships with, rebuilt through the store API so
//! every invariant holds on the result.

use crate::field::Point;
use crate::play::marker::Side;
use crate::play::play::Play;

/// The demo plays a fresh playbook is seeded with.
pub fn builtin_plays() -> Vec<Play> {
    vec![flood_concept(), hb_dive(), cover_3_buzz()]
}

fn flood_concept() -> Play {
    let mut play = Play::new("Flood Concept", Side::Offense);
    play.sub_type = "Pass".to_string();
    play.formation = "Spread".to_string();
    play.description =
        "Floods one side with 3 routes at different depths to stress zone coverage.".to_string();

    for (label, x, y) in [
        ("LT", 35.0, 78.0),
        ("LG", 42.0, 78.0),
        ("C", 50.0, 78.0),
        ("RG", 58.0, 78.0),
        ("RT", 65.0, 78.0),
        ("QB", 50.0, 85.0),
    ] {
        play.add_marker(Side::Offense, label, Point::new(x, y));
    }
    let wr = play.add_marker(Side::Offense, "WR", Point::new(15.0, 75.0));
    play.set_path(
        wr,
        vec![Point::new(15.0, 75.0), Point::new(15.0, 40.0), Point::new(35.0, 20.0)],
    );
    play
}

fn hb_dive() -> Play {
    let mut play = Play::new("HB Dive", Side::Offense);
    play.sub_type = "Run".to_string();
    play.formation = "I-Form".to_string();
    play.description =
        "A direct handoff to the halfback running through an interior gap.".to_string();

    play.add_marker(Side::Offense, "C", Point::new(50.0, 78.0));
    play.add_marker(Side::Offense, "QB", Point::new(50.0, 82.0));
    let rb = play.add_marker(Side::Offense, "RB", Point::new(50.0, 90.0));
    play.set_path(rb, vec![Point::new(50.0, 90.0), Point::new(54.0, 70.0)]);
    play
}

fn cover_3_buzz() -> Play {
    let mut play = Play::new("Cover 3 Buzz", Side::Defense);
    play.sub_type = "Zone".to_string();
    play.formation = "4-3".to_string();
    play.description =
        "Zone defense with 3 deep defenders and a safety rotating down to cover short passes."
            .to_string();

    play.add_marker(Side::Defense, "S", Point::new(50.0, 20.0));
    let buzz = play.add_marker(Side::Defense, "S", Point::new(25.0, 35.0));
    play.set_path(buzz, vec![Point::new(25.0, 35.0), Point::new(30.0, 50.0)]);
    play
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_hold_invariants() {
        for play in builtin_plays() {
            // No orphan paths, at most one path per marker
            let mut path_ids: Vec<_> = play.paths().iter().map(|p| p.marker_id).collect();
            path_ids.sort();
            path_ids.dedup();
            assert_eq!(path_ids.len(), play.paths().len());
            for path in play.paths() {
                assert!(play.marker(path.marker_id).is_some());
                assert!(path.points.len() > 1);
            }

            // All markers in bounds
            for marker in play.markers() {
                assert!(marker.position.in_bounds());
            }
        }
    }

    #[test]
    fn test_flood_concept_shape() {
        let play = flood_concept();
        assert_eq!(play.markers().len(), 7);
        assert_eq!(play.paths().len(), 1);
        assert_eq!(play.paths()[0].points.len(), 3);
    }
}
