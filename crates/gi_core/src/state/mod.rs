//! Global App State
//!
//! Thread-safe singleton holding the coach's playbook, the currently
//! selected play, and the diagram editor's interaction state. The JSON
//! API operates on this state so a host can drive the editor through
//! stateless calls.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::editor::DiagramEditor;
use crate::play::{Play, Playbook, Side};

/// Global app state singleton
pub static APP_STATE: Lazy<Arc<RwLock<AppState>>> =
    Lazy::new(|| Arc::new(RwLock::new(AppState::default())));

/// Runtime state of the playbook screen.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All plays, in playbook order.
    pub playbook: Playbook,

    /// Id of the play open in the editor, if any.
    pub selected_play: Option<String>,

    /// Tool selection and gesture state for the open play.
    pub editor: DiagramEditor,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state seeded with the demo plays, first play selected.
    pub fn new() -> Self {
        let playbook = Playbook::with_templates();
        let selected_play = playbook.first_play_id().map(str::to_string);
        Self { playbook, selected_play, editor: DiagramEditor::new() }
    }

    /// The play open in the editor.
    pub fn selected_play(&self) -> Option<&Play> {
        self.selected_play.as_deref().and_then(|id| self.playbook.get(id))
    }

    pub fn selected_play_mut(&mut self) -> Option<&mut Play> {
        let id = self.selected_play.clone()?;
        self.playbook.get_mut(&id)
    }

    /// Open a play in the editor. Returns false if the id is unknown; the
    /// previous selection is kept in that case.
    pub fn select_play(&mut self, id: &str) -> bool {
        if self.playbook.get(id).is_none() {
            return false;
        }
        self.selected_play = Some(id.to_string());
        true
    }

    /// Create an empty play, prepend it, and open it in the editor.
    pub fn create_and_select(&mut self, name: impl Into<String>, side: Side) -> String {
        let id = self.playbook.create_play(name, side);
        self.selected_play = Some(id.clone());
        id
    }

    /// Delete a play. If it was the open one, selection falls back to the
    /// first remaining play. Returns whether a play was deleted.
    pub fn delete_play(&mut self, id: &str) -> bool {
        if self.playbook.delete_play(id).is_none() {
            return false;
        }
        if self.selected_play.as_deref() == Some(id) {
            self.selected_play = self.playbook.first_play_id().map(str::to_string);
        }
        true
    }
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global app state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, AppState> {
    APP_STATE.read().expect("APP_STATE lock poisoned")
}

/// Get a write lock on the global app state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, AppState> {
    APP_STATE.write().expect("APP_STATE lock poisoned")
}

/// Reset the global state to the seeded default
pub fn reset_state() {
    *APP_STATE.write().expect("APP_STATE lock poisoned") = AppState::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_selects_first_play() {
        let state = AppState::new();
        assert!(!state.playbook.is_empty());
        assert_eq!(
            state.selected_play.as_deref(),
            state.playbook.first_play_id()
        );
        assert!(state.selected_play().is_some());
    }

    #[test]
    fn test_create_and_select() {
        let mut state = AppState::new();
        let id = state.create_and_select("New Play", Side::Offense);
        assert_eq!(state.selected_play.as_deref(), Some(id.as_str()));
        assert_eq!(state.selected_play().unwrap().name, "New Play");
    }

    #[test]
    fn test_delete_selected_falls_back_to_first() {
        let mut state = AppState::new();
        let id = state.create_and_select("Doomed", Side::Offense);

        assert!(state.delete_play(&id));
        assert_eq!(
            state.selected_play.as_deref(),
            state.playbook.first_play_id()
        );
        assert!(state.playbook.get(&id).is_none());
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let mut state = AppState::new();
        let keep = state.create_and_select("Keep", Side::Offense);
        let doomed = state.playbook.create_play("Doomed", Side::Defense);

        assert!(state.delete_play(&doomed));
        assert_eq!(state.selected_play.as_deref(), Some(keep.as_str()));
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut state = AppState::new();
        let before = state.selected_play.clone();
        assert!(!state.select_play("no-such-id"));
        assert_eq!(state.selected_play, before);
    }
}
