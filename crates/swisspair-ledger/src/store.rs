//! The `TournamentStore` façade: the full command surface over the storage
//! plane, plus snapshot production for the pure engine.
//!
//! All mutations take `&mut self`, which gives the single-writer-per-store
//! discipline the engine assumes. Snapshots are owned copies, so an
//! in-flight standings or pairing computation can never observe a torn
//! write.

use swisspair_engine::{compute_standings, pair_next_round};
use swisspair_types::{
    MatchId, MatchOutcome, Pairing, PlayerId, Result, RoundSnapshot, Standing, SwisspairError,
    TournamentId,
};

use crate::{MatchLedger, PlayerDirectory, TournamentRegistry};

/// Composes the player directory, tournament registry, and match ledger.
#[derive(Debug, Default)]
pub struct TournamentStore {
    directory: PlayerDirectory,
    registry: TournamentRegistry,
    ledger: MatchLedger,
}

impl TournamentStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: PlayerDirectory::new(),
            registry: TournamentRegistry::new(),
            ledger: MatchLedger::new(),
        }
    }

    // =================================================================
    // Players & registrations
    // =================================================================

    /// Add a player to the directory without registering them anywhere.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        self.directory.add(name)
    }

    /// Register an existing player in a partition.
    pub fn register(&mut self, tournament: TournamentId, player: PlayerId) -> Result<()> {
        self.directory.require(player)?;
        self.registry.register(tournament, player)
    }

    /// Add a player and register them in one step.
    pub fn register_player(
        &mut self,
        name: impl Into<String>,
        tournament: TournamentId,
    ) -> Result<PlayerId> {
        if !self.registry.contains(tournament) {
            return Err(SwisspairError::TournamentNotFound(tournament));
        }
        let player = self.add_player(name);
        self.registry.register(tournament, player)?;
        Ok(player)
    }

    /// Number of players registered in a partition.
    #[must_use]
    pub fn count_players(&self, tournament: TournamentId) -> usize {
        self.registry.count_players(tournament)
    }

    /// Bulk-delete players: one partition's registrations, or — for `None` —
    /// every registration and the directory itself. Matches are deleted
    /// first in both cases.
    pub fn delete_players(&mut self, tournament: Option<TournamentId>) {
        self.delete_matches(tournament);
        match tournament {
            Some(t) => self.registry.clear_roster(t),
            None => {
                self.registry.clear_all_rosters();
                self.directory.clear();
            }
        }
    }

    // =================================================================
    // Tournaments
    // =================================================================

    /// Create a new tournament partition.
    pub fn create_tournament(&mut self, title: impl Into<String>) -> TournamentId {
        self.registry.create(title)
    }

    /// Delete a partition, cascading to its registrations and matches.
    /// The default partition is rejected.
    pub fn delete_tournament(&mut self, tournament: TournamentId) -> Result<()> {
        self.registry.delete(tournament)?;
        self.ledger.delete_matches(Some(tournament));
        Ok(())
    }

    // =================================================================
    // Match reporting
    // =================================================================

    /// Record a decisive result. Both players must be registered in the
    /// partition; the pair must not have met before.
    pub fn report_win(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<MatchId> {
        self.check_reporter(tournament, winner)?;
        self.check_reporter(tournament, loser)?;
        self.ledger
            .report(tournament, winner, loser, MatchOutcome::PlayerA)
    }

    /// Record a draw.
    pub fn report_draw(
        &mut self,
        tournament: TournamentId,
        player_a: PlayerId,
        player_b: PlayerId,
    ) -> Result<MatchId> {
        self.check_reporter(tournament, player_a)?;
        self.check_reporter(tournament, player_b)?;
        self.ledger
            .report(tournament, player_a, player_b, MatchOutcome::Draw)
    }

    /// Record a bye award (scores as a win for the recipient).
    pub fn award_bye(&mut self, tournament: TournamentId, player: PlayerId) -> Result<MatchId> {
        self.check_reporter(tournament, player)?;
        self.ledger.award_bye(tournament, player)
    }

    /// Bulk-delete match records: one partition, or all for `None`.
    pub fn delete_matches(&mut self, tournament: Option<TournamentId>) {
        self.ledger.delete_matches(tournament);
    }

    fn check_reporter(&self, tournament: TournamentId, player: PlayerId) -> Result<()> {
        if self.registry.is_registered(tournament, player) {
            Ok(())
        } else {
            Err(SwisspairError::NotRegistered { tournament, player })
        }
    }

    // =================================================================
    // Engine surface
    // =================================================================

    /// A consistent read-only view of one partition. Unknown partitions
    /// yield an empty snapshot — "no registrations" is a valid state.
    #[must_use]
    pub fn snapshot(&self, tournament: TournamentId) -> RoundSnapshot {
        let roster = self
            .registry
            .roster(tournament)
            .iter()
            .filter_map(|id| self.directory.get(*id))
            .cloned()
            .collect();
        RoundSnapshot::new(tournament, roster, self.ledger.records_for(tournament))
    }

    /// Current standings, re-derived from the ledger on every call.
    #[must_use]
    pub fn standings(&self, tournament: TournamentId) -> Vec<Standing> {
        compute_standings(&self.snapshot(tournament))
    }

    /// Next-round Swiss pairings, re-derived from the ledger on every call.
    pub fn swiss_pairings(&self, tournament: TournamentId) -> Result<Vec<Pairing>> {
        pair_next_round(&self.snapshot(tournament))
    }
}
