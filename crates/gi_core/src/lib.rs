//! # gi_core - Gridiron Intel Playbook Engine
//!
//! Headless core of the Gridiron Intel digital playbook: the play data
//! model, the interactive diagram editor (move / draw-path / erase), and
//! a JSON API for driving both from a UI host.
//!
//! ## Features
//! - Normalized field coordinates with clamped pointer mapping
//! - Gesture state machine with explicit start/update/end semantics
//! - Play geometry store holding its invariants by construction
//! - Local key-value storage and the generative-completion seam the
//!   surrounding screens use

pub mod api;
pub mod assist;
pub mod editor;
pub mod error;
pub mod field;
pub mod play;
pub mod state;
pub mod storage;

// Re-export the editor surface
pub use editor::{DiagramEditor, ToolMode};
pub use field::{Point, SurfaceRect, FIELD_MAX};
pub use play::{
    builtin_plays, MarkerId, Play, Playbook, PlayerMarker, PlayerPath, Side, MARKER_HIT_RADIUS,
};

// Re-export host integration
pub use api::{
    add_marker_json, create_play_json, delete_play_json, get_selected_play_json,
    list_plays_json, pointer_event_json, select_play_json, set_tool_json,
    update_play_info_json,
};
pub use error::{CoreError, Result};
pub use state::{get_state, get_state_mut, reset_state, AppState, APP_STATE};

// Re-export sibling-screen seams
pub use assist::{
    CompletionError, CompletionRequest, CompletionResponse, CompletionService, ResponseSchema,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
