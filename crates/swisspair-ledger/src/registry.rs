//! Tournament partition registry and per-partition registrations.
//!
//! The default partition ([`TournamentId::DEFAULT`]) is pre-seeded at
//! construction and can be cleared but never removed. Registration order is
//! preserved per partition: it is the standings' documented final tie-break.

use std::collections::{BTreeMap, HashMap};

use swisspair_types::{
    PlayerId, Result, SwisspairError, Tournament, TournamentId, constants,
};

/// Maintains the set of tournament partitions and their rosters.
#[derive(Debug)]
pub struct TournamentRegistry {
    tournaments: BTreeMap<TournamentId, Tournament>,
    /// Registered players per partition, in registration order.
    rosters: HashMap<TournamentId, Vec<PlayerId>>,
    next_id: TournamentId,
}

impl TournamentRegistry {
    /// A fresh registry holding only the default partition.
    #[must_use]
    pub fn new() -> Self {
        let mut tournaments = BTreeMap::new();
        tournaments.insert(TournamentId::DEFAULT, Tournament::default_partition());
        let mut rosters = HashMap::new();
        rosters.insert(TournamentId::DEFAULT, Vec::new());
        Self {
            tournaments,
            rosters,
            next_id: TournamentId(constants::FIRST_USER_TOURNAMENT),
        }
    }

    /// Create a new partition and return its id.
    pub fn create(&mut self, title: impl Into<String>) -> TournamentId {
        let id = self.next_id;
        self.next_id = self.next_id.next();
        self.tournaments.insert(id, Tournament::new(id, title));
        self.rosters.insert(id, Vec::new());
        tracing::info!(tournament = %id, "Tournament created");
        id
    }

    /// Delete a partition, dropping its registrations.
    ///
    /// # Errors
    /// - `DefaultTournamentImmutable` for the default partition
    /// - `TournamentNotFound` for unknown ids
    pub fn delete(&mut self, id: TournamentId) -> Result<Tournament> {
        if id.is_default() {
            return Err(SwisspairError::DefaultTournamentImmutable);
        }
        let tournament = self
            .tournaments
            .remove(&id)
            .ok_or(SwisspairError::TournamentNotFound(id))?;
        self.rosters.remove(&id);
        tracing::info!(tournament = %id, "Tournament deleted");
        Ok(tournament)
    }

    #[must_use]
    pub fn contains(&self, id: TournamentId) -> bool {
        self.tournaments.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.get(&id)
    }

    /// Register a player in a partition.
    ///
    /// # Errors
    /// - `TournamentNotFound` for unknown partitions
    /// - `DuplicateRegistration` if the pair already exists
    pub fn register(&mut self, tournament: TournamentId, player: PlayerId) -> Result<()> {
        if !self.tournaments.contains_key(&tournament) {
            return Err(SwisspairError::TournamentNotFound(tournament));
        }
        let roster = self.rosters.entry(tournament).or_default();
        if roster.contains(&player) {
            return Err(SwisspairError::DuplicateRegistration { tournament, player });
        }
        roster.push(player);
        tracing::debug!(tournament = %tournament, player = %player, "Player registered");
        Ok(())
    }

    #[must_use]
    pub fn is_registered(&self, tournament: TournamentId, player: PlayerId) -> bool {
        self.rosters
            .get(&tournament)
            .is_some_and(|r| r.contains(&player))
    }

    /// The partition's roster in registration order. Empty for unknown
    /// partitions — "no registrations" is a valid state, not an error.
    #[must_use]
    pub fn roster(&self, tournament: TournamentId) -> &[PlayerId] {
        self.rosters.get(&tournament).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count_players(&self, tournament: TournamentId) -> usize {
        self.roster(tournament).len()
    }

    /// Drop every registration in one partition (the partition remains).
    pub fn clear_roster(&mut self, tournament: TournamentId) {
        if let Some(roster) = self.rosters.get_mut(&tournament) {
            roster.clear();
        }
    }

    /// Drop every registration in every partition.
    pub fn clear_all_rosters(&mut self) {
        for roster in self.rosters.values_mut() {
            roster.clear();
        }
    }
}

impl Default for TournamentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
