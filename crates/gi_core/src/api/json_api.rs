//! JSON API for host integration
//!
//! The playbook screen lives inside a UI host that drives this crate
//! through JSON strings: each function takes a request payload, applies
//! it to the global [`AppState`](crate::state::AppState), and returns the
//! updated view as JSON. Requests carry a `schema_version` field so hosts
//! and core can evolve independently.

use serde::{Deserialize, Serialize};

use crate::editor::ToolMode;
use crate::error::{CoreError, Result};
use crate::field::{Point, SurfaceRect};
use crate::play::{MarkerId, Play, Side, MARKER_HIT_RADIUS};
use crate::state::{get_state, get_state_mut, AppState};

pub const SCHEMA_VERSION: u8 = 1;

fn check_schema_version(version: u8) -> Result<()> {
    if version != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchemaVersion(version));
    }
    Ok(())
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePlayRequest {
    pub schema_version: u8,
    pub name: String,
    pub side: Side,
}

#[derive(Debug, Deserialize)]
pub struct PlayIdRequest {
    pub schema_version: u8,
    pub play_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlayInfoRequest {
    pub schema_version: u8,
    pub play_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetToolRequest {
    pub schema_version: u8,
    pub tool: ToolMode,
}

#[derive(Debug, Deserialize)]
pub struct AddMarkerRequest {
    pub schema_version: u8,
    pub side: Side,
    /// Defaults to the side's label (`O`/`X`).
    #[serde(default)]
    pub label: Option<String>,
    /// Defaults to the side's standard placement.
    #[serde(default)]
    pub position: Option<Point>,
}

/// Gesture phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

/// One raw pointer event from the host, with the surface rectangle it was
/// observed against. `marker_id` carries the host's own hit-test result
/// for `start` events; when absent the core hit-tests the mapped point.
#[derive(Debug, Deserialize)]
pub struct PointerEventRequest {
    pub schema_version: u8,
    pub phase: PointerPhase,
    pub surface: SurfaceRect,
    pub client_x: f32,
    pub client_y: f32,
    #[serde(default)]
    pub marker_id: Option<MarkerId>,
}

// ============================================================================
// Responses
// ============================================================================

/// List entry for the play panel.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaySummary {
    pub id: String,
    pub name: String,
    pub side: Side,
    pub formation: String,
    pub description: String,
    pub selected: bool,
}

/// Everything the host needs to redraw the editor after a change.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditorView {
    pub schema_version: u8,
    pub tool: ToolMode,
    pub play: Play,
    /// In-progress capture polyline during a draw gesture, empty otherwise.
    pub active_trace: Vec<Point>,
}

impl EditorView {
    fn of(state: &AppState, play: &Play) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tool: state.editor.tool(),
            play: play.clone(),
            active_trace: state.editor.active_trace().map(|t| t.to_vec()).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

fn list_plays(state: &AppState) -> Vec<PlaySummary> {
    state
        .playbook
        .plays()
        .iter()
        .map(|p| PlaySummary {
            id: p.id.clone(),
            name: p.name.clone(),
            side: p.side,
            formation: p.formation.clone(),
            description: p.description.clone(),
            selected: state.selected_play.as_deref() == Some(p.id.as_str()),
        })
        .collect()
}

fn selected_view(state: &AppState) -> Result<EditorView> {
    let play = state.selected_play().ok_or(CoreError::NoPlaySelected)?;
    Ok(EditorView::of(state, play))
}

fn create_play(state: &mut AppState, req: CreatePlayRequest) -> Result<EditorView> {
    state.create_and_select(req.name, req.side);
    selected_view(state)
}

fn select_play(state: &mut AppState, req: PlayIdRequest) -> Result<EditorView> {
    if !state.select_play(&req.play_id) {
        return Err(CoreError::PlayNotFound(req.play_id));
    }
    selected_view(state)
}

fn delete_play(state: &mut AppState, req: PlayIdRequest) -> Result<Vec<PlaySummary>> {
    if !state.delete_play(&req.play_id) {
        return Err(CoreError::PlayNotFound(req.play_id));
    }
    Ok(list_plays(state))
}

fn update_play_info(state: &mut AppState, req: UpdatePlayInfoRequest) -> Result<EditorView> {
    {
        let play = state
            .playbook
            .get_mut(&req.play_id)
            .ok_or_else(|| CoreError::PlayNotFound(req.play_id.clone()))?;
        if let Some(name) = req.name {
            play.name = name;
        }
        if let Some(sub_type) = req.sub_type {
            play.sub_type = sub_type;
        }
        if let Some(formation) = req.formation {
            play.formation = formation;
        }
        if let Some(description) = req.description {
            play.description = description;
        }
    }
    selected_view(state)
}

fn set_tool(state: &mut AppState, req: SetToolRequest) -> Result<EditorView> {
    state.editor.set_tool(req.tool);
    selected_view(state)
}

fn add_marker(state: &mut AppState, req: AddMarkerRequest) -> Result<EditorView> {
    let side = req.side;
    let label = req.label.unwrap_or_else(|| side.default_label().to_string());
    let position = req.position.unwrap_or_else(|| side.default_position());

    let play = state.selected_play_mut().ok_or(CoreError::NoPlaySelected)?;
    play.add_marker(side, label, position);
    selected_view(state)
}

fn apply_pointer_event(state: &mut AppState, req: PointerEventRequest) -> Result<EditorView> {
    let point = req.surface.to_field(req.client_x, req.client_y);

    let play_id = state.selected_play.clone().ok_or(CoreError::NoPlaySelected)?;
    let AppState { playbook, editor, .. } = &mut *state;
    let play = playbook.get_mut(&play_id).ok_or(CoreError::PlayNotFound(play_id))?;

    match req.phase {
        PointerPhase::Start => {
            // Empty-surface taps resolve to no marker and fall through as
            // no-ops, including under the erase tool.
            let target = req.marker_id.or_else(|| play.marker_at(point, MARKER_HIT_RADIUS));
            if let Some(marker_id) = target {
                editor.start(play, marker_id, point);
            }
        }
        PointerPhase::Move => editor.update(play, point),
        PointerPhase::End => editor.end(play),
    }

    selected_view(state)
}

// ============================================================================
// JSON entry points
// ============================================================================

fn to_json<T: Serialize>(value: &T) -> std::result::Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse_request<'a, T: Deserialize<'a>>(
    request_json: &'a str,
) -> std::result::Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))
}

/// List all plays with their selection flag.
pub fn list_plays_json() -> std::result::Result<String, String> {
    let state = get_state();
    to_json(&list_plays(&state))
}

/// The editor view of the currently selected play.
pub fn get_selected_play_json() -> std::result::Result<String, String> {
    let state = get_state();
    selected_view(&state).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Create an empty play and open it in the editor.
pub fn create_play_json(request_json: &str) -> std::result::Result<String, String> {
    let req: CreatePlayRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    create_play(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Open an existing play in the editor.
pub fn select_play_json(request_json: &str) -> std::result::Result<String, String> {
    let req: PlayIdRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    select_play(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Delete a play; returns the refreshed play list.
pub fn delete_play_json(request_json: &str) -> std::result::Result<String, String> {
    let req: PlayIdRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    delete_play(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Update a play's descriptive text fields.
pub fn update_play_info_json(request_json: &str) -> std::result::Result<String, String> {
    let req: UpdatePlayInfoRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    update_play_info(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Select the active diagram tool.
pub fn set_tool_json(request_json: &str) -> std::result::Result<String, String> {
    let req: SetToolRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    set_tool(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Add a marker to the selected play.
pub fn add_marker_json(request_json: &str) -> std::result::Result<String, String> {
    let req: AddMarkerRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    add_marker(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}

/// Feed one pointer event into the diagram editor.
pub fn pointer_event_json(request_json: &str) -> std::result::Result<String, String> {
    let req: PointerEventRequest = parse_request(request_json)?;
    check_schema_version(req.schema_version).map_err(|e| e.to_string())?;

    let mut state = get_state_mut();
    apply_pointer_event(&mut state, req).map_err(|e| e.to_string()).and_then(|v| to_json(&v))
}
