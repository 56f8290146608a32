use serde::{Deserialize, Serialize};

use crate::play::marker::Side;
use crate::play::play::Play;
use crate::play::templates::builtin_plays;

/// Ordered collection of all plays. No cross-play relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playbook {
    plays: Vec<Play>,
}

impl Playbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A playbook seeded with the builtin demo plays.
    pub fn with_templates() -> Self {
        Self { plays: builtin_plays() }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Play> {
        self.plays.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Play> {
        self.plays.iter_mut().find(|p| p.id == id)
    }

    /// Create an empty play and prepend it, so it shows first in the
    /// list. Returns the new play's id.
    pub fn create_play(&mut self, name: impl Into<String>, side: Side) -> String {
        let play = Play::new(name, side);
        let id = play.id.clone();
        self.plays.insert(0, play);
        log::debug!("Created play {}", id);
        id
    }

    /// Delete a play by id. Returns the removed play, or `None` if the id
    /// is unknown.
    pub fn delete_play(&mut self, id: &str) -> Option<Play> {
        let idx = self.plays.iter().position(|p| p.id == id)?;
        log::debug!("Deleted play {}", id);
        Some(self.plays.remove(idx))
    }

    /// Plays on one side of the ball, in playbook order.
    pub fn plays_for_side(&self, side: Side) -> impl Iterator<Item = &Play> {
        self.plays.iter().filter(move |p| p.side == side)
    }

    /// Id of the first play, used as the fallback selection.
    pub fn first_play_id(&self) -> Option<&str> {
        self.plays.first().map(|p| p.id.as_str())
    }
}
