//! Local key-value storage
//!
//! Sibling screens (profile, settings, API key, chat transcripts) persist
//! small strings through a `get`/`set` store. The diagram core itself
//! keeps its state in memory; this module only provides the store those
//! screens plug into: an in-memory map for tests and ephemeral sessions,
//! and a single-document JSON file store for desktop hosts.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Simple string store: `get` returns the stored value or absent, `set`
/// overwrites unconditionally.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str) -> Option<String>;
}

/// Well-known keys, matching the web app's local storage.
pub mod keys {
    /// Team profile record (JSON).
    pub const TEAM_PROFILE: &str = "teamProfile";

    /// The coach's generative-AI API key.
    pub const API_KEY: &str = "gemini_api_key";

    /// Per-player assistant chat transcript.
    pub fn chat_history(player_name: &str) -> String {
        format!("gridironIntelPlayerChatHistory_{}", player_name.replace(' ', "_"))
    }

    /// Saved practice plan by plan id.
    pub fn practice_plan(plan_id: &str) -> String {
        format!("practicePlan_{}", plan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_history_key_replaces_spaces() {
        assert_eq!(
            keys::chat_history("J. Williams"),
            "gridironIntelPlayerChatHistory_J._Williams"
        );
    }
}
