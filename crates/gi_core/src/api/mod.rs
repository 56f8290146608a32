pub mod json_api;

pub use json_api::{
    add_marker_json, create_play_json, delete_play_json, get_selected_play_json,
    list_plays_json, pointer_event_json, select_play_json, set_tool_json,
    update_play_info_json, AddMarkerRequest, CreatePlayRequest, EditorView, PlaySummary,
    PointerEventRequest, PointerPhase, SCHEMA_VERSION,
};
