//! Gesture state machine
//!
//! One continuous pointer interaction is a gesture:
//! `start -> (update)* -> end`. Which effect a gesture has is fixed by the
//! tool active at `start`, so switching tools mid-drag does not change the
//! gesture already in flight.
//!
//! - `Move`: `start` records the dragged marker, each `update` moves it to
//!   the mapped point (live feedback, nothing left to do on `end`).
//! - `DrawPath`: `start` seeds a transient polyline with the start point,
//!   `update` appends points in arrival order, `end` commits the capture
//!   iff it has more than one point, replacing the marker's prior path.
//! - `Erase`: a discrete tap; the marker and its path are removed in one
//!   update at `start`, no gesture stays in flight.
//!
//! At most one gesture is active at a time: a `start` while one is in
//! flight is ignored. Unknown marker ids are no-ops. Nothing here fails.

use crate::field::Point;
use crate::play::{MarkerId, Play};

use super::tool::ToolMode;

/// Transient state held between `start` and `end`.
#[derive(Debug, Clone, PartialEq)]
enum ActiveGesture {
    /// Dragging a marker under the Move tool.
    Drag { marker_id: MarkerId },
    /// Capturing a polyline under the DrawPath tool.
    Trace { marker_id: MarkerId, points: Vec<Point> },
}

/// The diagram editor's interaction state: selected tool plus the gesture
/// in flight, if any. Mutates the play it is handed; owns no geometry of
/// its own beyond the transient capture buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramEditor {
    tool: ToolMode,
    gesture: Option<ActiveGesture>,
}

impl DiagramEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Select a tool. Takes effect from the next gesture; a gesture
    /// already in flight keeps the behavior it started with.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
    }

    pub fn gesture_in_progress(&self) -> bool {
        self.gesture.is_some()
    }

    /// The in-progress capture polyline, for rendering during a draw
    /// gesture. `None` outside one.
    pub fn active_trace(&self) -> Option<&[Point]> {
        match &self.gesture {
            Some(ActiveGesture::Trace { points, .. }) => Some(points),
            _ => None,
        }
    }

    /// Begin a gesture on a marker at the mapped start point.
    ///
    /// Ignored while another gesture is in flight or when the marker id
    /// is unknown. Under the Erase tool this is the whole interaction:
    /// the marker and any path referencing it are removed atomically.
    pub fn start(&mut self, play: &mut Play, marker_id: MarkerId, point: Point) {
        if self.gesture.is_some() || play.marker(marker_id).is_none() {
            return;
        }

        match self.tool {
            ToolMode::Move => {
                self.gesture = Some(ActiveGesture::Drag { marker_id });
            }
            ToolMode::DrawPath => {
                self.gesture = Some(ActiveGesture::Trace { marker_id, points: vec![point] });
            }
            ToolMode::Erase => {
                play.remove_marker(marker_id);
                log::debug!("Erased {}", marker_id);
            }
        }
    }

    /// Feed an intermediate pointer position into the active gesture.
    /// No-op outside a gesture.
    pub fn update(&mut self, play: &mut Play, point: Point) {
        match &mut self.gesture {
            Some(ActiveGesture::Drag { marker_id }) => {
                play.move_marker(*marker_id, point);
            }
            Some(ActiveGesture::Trace { points, .. }) => {
                points.push(point);
            }
            None => {}
        }
    }

    /// Finish the active gesture. Releasing the pointer anywhere counts:
    /// there is no separate cancel. No-op outside a gesture.
    pub fn end(&mut self, play: &mut Play) {
        if let Some(ActiveGesture::Trace { marker_id, points }) = self.gesture.take() {
            if play.set_path(marker_id, points) {
                log::debug!("Committed path for {}", marker_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::Side;

    fn editor_with(tool: ToolMode) -> DiagramEditor {
        let mut editor = DiagramEditor::new();
        editor.set_tool(tool);
        editor
    }

    fn offense_play() -> (Play, MarkerId) {
        let mut play = Play::new("Gesture Test", Side::Offense);
        let id = play.add_default_marker(Side::Offense);
        (play, id)
    }

    #[test]
    fn test_move_gesture_live_updates_position() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::Move);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        // Start alone does not move the marker.
        assert_eq!(play.marker(id).unwrap().position, Point::new(50.0, 70.0));

        editor.update(&mut play, Point::new(30.0, 50.0));
        assert_eq!(play.marker(id).unwrap().position, Point::new(30.0, 50.0));

        editor.update(&mut play, Point::new(10.0, 10.0));
        editor.end(&mut play);
        assert_eq!(play.marker(id).unwrap().position, Point::new(10.0, 10.0));
        assert!(play.paths().is_empty());
        assert!(!editor.gesture_in_progress());
    }

    #[test]
    fn test_draw_gesture_commits_polyline() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.update(&mut play, Point::new(50.0, 40.0));
        editor.update(&mut play, Point::new(30.0, 20.0));
        assert_eq!(editor.active_trace().unwrap().len(), 3);
        // Nothing committed while the gesture is in flight.
        assert!(play.paths().is_empty());

        editor.end(&mut play);
        assert_eq!(play.paths().len(), 1);
        let path = play.path_for(id).unwrap();
        assert_eq!(
            path.points,
            vec![Point::new(50.0, 70.0), Point::new(50.0, 40.0), Point::new(30.0, 20.0)]
        );
        assert!(editor.active_trace().is_none());
    }

    #[test]
    fn test_draw_tap_is_discarded() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.end(&mut play);

        assert!(play.paths().is_empty());
        assert!(!editor.gesture_in_progress());
    }

    #[test]
    fn test_redraw_replaces_committed_path() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.update(&mut play, Point::new(50.0, 40.0));
        editor.end(&mut play);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.update(&mut play, Point::new(70.0, 60.0));
        editor.update(&mut play, Point::new(90.0, 55.0));
        editor.end(&mut play);

        assert_eq!(play.paths().len(), 1);
        assert_eq!(play.path_for(id).unwrap().points.len(), 3);
    }

    #[test]
    fn test_erase_tap_removes_marker_and_path() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);
        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.update(&mut play, Point::new(50.0, 40.0));
        editor.end(&mut play);

        editor.set_tool(ToolMode::Erase);
        editor.start(&mut play, id, Point::new(50.0, 70.0));

        assert!(play.markers().is_empty());
        assert!(play.paths().is_empty());
        assert!(!editor.gesture_in_progress());
    }

    #[test]
    fn test_second_start_is_ignored_while_in_flight() {
        let mut play = Play::new("Gesture Test", Side::Offense);
        let a = play.add_default_marker(Side::Offense);
        let b = play.add_default_marker(Side::Defense);
        let mut editor = editor_with(ToolMode::Move);

        editor.start(&mut play, a, Point::new(50.0, 70.0));
        editor.start(&mut play, b, Point::new(50.0, 30.0));

        editor.update(&mut play, Point::new(20.0, 20.0));
        // Only the first gesture's marker moved.
        assert_eq!(play.marker(a).unwrap().position, Point::new(20.0, 20.0));
        assert_eq!(play.marker(b).unwrap().position, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_start_on_unknown_marker_is_noop() {
        let (mut play, _) = offense_play();
        let mut editor = editor_with(ToolMode::Move);

        editor.start(&mut play, MarkerId::new(999), Point::new(50.0, 50.0));
        assert!(!editor.gesture_in_progress());
    }

    #[test]
    fn test_tool_switch_does_not_affect_gesture_in_flight() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);

        editor.start(&mut play, id, Point::new(50.0, 70.0));
        editor.set_tool(ToolMode::Move);
        editor.update(&mut play, Point::new(50.0, 40.0));
        editor.end(&mut play);

        // Still a draw gesture: the path was committed and the marker
        // never moved.
        assert_eq!(play.paths().len(), 1);
        assert_eq!(play.marker(id).unwrap().position, Point::new(50.0, 70.0));
        assert_eq!(editor.tool(), ToolMode::Move);
    }

    #[test]
    fn test_update_and_end_outside_gesture_are_noops() {
        let (mut play, _) = offense_play();
        let before = play.clone();
        let mut editor = editor_with(ToolMode::Move);

        editor.update(&mut play, Point::new(1.0, 1.0));
        editor.end(&mut play);
        assert_eq!(play, before);
    }

    #[test]
    fn test_move_updates_arrive_in_order() {
        let (mut play, id) = offense_play();
        let mut editor = editor_with(ToolMode::DrawPath);

        editor.start(&mut play, id, Point::new(0.0, 0.0));
        for i in 1..=10 {
            editor.update(&mut play, Point::new(i as f32, i as f32));
        }
        editor.end(&mut play);

        let points = &play.path_for(id).unwrap().points;
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.x, i as f32);
        }
    }
}
