use serde::{Deserialize, Serialize};

/// The currently selected interaction behavior. Mutually exclusive,
/// chosen explicitly by the user, and kept across gestures until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Drag a marker; its position live-updates during the drag.
    #[default]
    #[serde(rename = "move")]
    Move,
    /// Capture a freehand polyline for a marker, committed on release.
    #[serde(rename = "draw-path")]
    DrawPath,
    /// Discrete tap on a marker deletes it and its path.
    #[serde(rename = "erase")]
    Erase,
}

impl ToolMode {
    pub fn label(&self) -> &'static str {
        match self {
            ToolMode::Move => "Move Player",
            ToolMode::DrawPath => "Draw Path",
            ToolMode::Erase => "Erase Player",
        }
    }
}
