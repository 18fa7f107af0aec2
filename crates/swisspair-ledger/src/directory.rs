//! Player directory: owns player identities.
//!
//! A player exists once here regardless of how many partitions they are
//! registered in; partition membership lives in the tournament registry.

use std::collections::HashMap;

use swisspair_types::{Player, PlayerId, Result, SwisspairError};

/// Owns the set of known players.
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerId, Player>,
}

impl PlayerDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Names need not be unique; the returned id is.
    pub fn add(&mut self, name: impl Into<String>) -> PlayerId {
        let player = Player::new(name);
        let id = player.id;
        self.players.insert(id, player);
        tracing::debug!(player = %id, "Player added to directory");
        id
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Lookup that fails with a typed error for unknown ids.
    pub fn require(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(&id)
            .ok_or(SwisspairError::PlayerNotFound(id))
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Remove every player (global bulk delete).
    pub fn clear(&mut self) {
        let removed = self.players.len();
        self.players.clear();
        tracing::info!(removed, "Player directory cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_lookup() {
        let mut dir = PlayerDirectory::new();
        let id = dir.add("Bruno Walton");
        assert_eq!(dir.get(id).unwrap().name, "Bruno Walton");
        assert!(dir.contains(id));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn duplicate_names_get_distinct_ids() {
        let mut dir = PlayerDirectory::new();
        let a = dir.add("Boots O'Neal");
        let b = dir.add("Boots O'Neal");
        assert_ne!(a, b);
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn require_unknown_player_fails() {
        let dir = PlayerDirectory::new();
        let err = dir.require(PlayerId::new()).unwrap_err();
        assert!(matches!(err, SwisspairError::PlayerNotFound(_)));
    }

    #[test]
    fn clear_removes_everyone() {
        let mut dir = PlayerDirectory::new();
        dir.add("Cathy Burton");
        dir.add("Diane Grant");
        dir.clear();
        assert!(dir.is_empty());
    }
}
