//! The read-only view handed from the storage plane to the pure engine.
//!
//! A `RoundSnapshot` is an owned, consistent copy of one partition's roster
//! and match ledger, taken under the storage plane's single-writer
//! discipline. The engine derives standings and pairings from it and never
//! mutates it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchEntry, MatchRecord, PairKey, Player, PlayerId, TournamentId};

/// Consistent per-partition view of registrations and recorded matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub tournament: TournamentId,
    /// Registered players in registration order. The position in this list
    /// is the deterministic final tie-break.
    pub roster: Vec<Player>,
    /// Every match record of this partition, in report order.
    pub matches: Vec<MatchRecord>,
    pub taken_at: DateTime<Utc>,
}

impl RoundSnapshot {
    #[must_use]
    pub fn new(tournament: TournamentId, roster: Vec<Player>, matches: Vec<MatchRecord>) -> Self {
        Self {
            tournament,
            roster,
            matches,
            taken_at: Utc::now(),
        }
    }

    /// An empty snapshot — the valid result for an unknown partition.
    #[must_use]
    pub fn empty(tournament: TournamentId) -> Self {
        Self::new(tournament, Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Position of `player` in registration order.
    #[must_use]
    pub fn registration_index(&self, player: PlayerId) -> Option<usize> {
        self.roster.iter().position(|p| p.id == player)
    }

    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> Option<&str> {
        self.roster
            .iter()
            .find(|p| p.id == player)
            .map(|p| p.name.as_str())
    }

    /// Every unordered pair that has already met in this partition.
    #[must_use]
    pub fn played_pairs(&self) -> HashSet<PairKey> {
        self.matches
            .iter()
            .filter_map(MatchRecord::pair_key)
            .collect()
    }

    /// Whether the two players have already met, in either order.
    #[must_use]
    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        let key = PairKey::new(a, b);
        self.matches.iter().any(|m| m.pair_key() == Some(key))
    }

    /// Whether `player` has already received a bye in this partition.
    #[must_use]
    pub fn has_received_bye(&self, player: PlayerId) -> bool {
        self.matches
            .iter()
            .any(|m| matches!(m.entry, MatchEntry::Bye { player: p } if p == player))
    }
}

/// Test helpers for building snapshots without a storage plane.
#[cfg(any(test, feature = "test-helpers"))]
impl RoundSnapshot {
    /// Snapshot with a fresh roster of the given names and no matches.
    /// Registration order follows the slice order.
    pub fn with_roster(names: &[&str]) -> Self {
        let roster = names.iter().map(|n| Player::new(*n)).collect();
        Self::new(TournamentId::DEFAULT, roster, Vec::new())
    }

    /// Record a decisive result between two rostered players.
    pub fn record_win(&mut self, winner: PlayerId, loser: PlayerId) {
        self.matches.push(MatchRecord::played(
            self.tournament,
            winner,
            loser,
            crate::MatchOutcome::PlayerA,
        ));
    }

    /// Record a draw between two rostered players.
    pub fn record_draw(&mut self, a: PlayerId, b: PlayerId) {
        self.matches.push(MatchRecord::played(
            self.tournament,
            a,
            b,
            crate::MatchOutcome::Draw,
        ));
    }

    /// Record an awarded bye.
    pub fn record_bye(&mut self, player: PlayerId) {
        self.matches
            .push(MatchRecord::bye(self.tournament, player));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_for_unknown_partition() {
        let snap = RoundSnapshot::empty(TournamentId(42));
        assert!(snap.is_empty());
        assert_eq!(snap.player_count(), 0);
        assert!(snap.played_pairs().is_empty());
    }

    #[test]
    fn have_played_is_order_insensitive() {
        let mut snap = RoundSnapshot::with_roster(&["A", "B"]);
        let a = snap.roster[0].id;
        let b = snap.roster[1].id;
        assert!(!snap.have_played(a, b));
        snap.record_win(a, b);
        assert!(snap.have_played(a, b));
        assert!(snap.have_played(b, a));
    }

    #[test]
    fn bye_tracking() {
        let mut snap = RoundSnapshot::with_roster(&["A", "B"]);
        let a = snap.roster[0].id;
        let b = snap.roster[1].id;
        snap.record_bye(a);
        assert!(snap.has_received_bye(a));
        assert!(!snap.has_received_bye(b));
        // A bye never enters the rematch set.
        assert!(snap.played_pairs().is_empty());
    }

    #[test]
    fn registration_index_follows_roster_order() {
        let snap = RoundSnapshot::with_roster(&["A", "B", "C"]);
        for (i, p) in snap.roster.iter().enumerate() {
            assert_eq!(snap.registration_index(p.id), Some(i));
        }
        assert_eq!(snap.registration_index(PlayerId::new()), None);
    }
}
