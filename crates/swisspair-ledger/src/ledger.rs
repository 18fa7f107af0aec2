//! The append-only match ledger.
//!
//! Records are immutable once appended. The ledger enforces the partition's
//! uniqueness constraint at write time: an unordered pair of players can
//! meet at most once, and a player can receive at most one bye. The engine
//! trusts any ledger it is handed to already satisfy these invariants.

use std::collections::{HashMap, HashSet};

use swisspair_types::{
    MatchId, MatchOutcome, MatchRecord, PairKey, PlayerId, Result, SwisspairError, TournamentId,
};

/// Append-only store of match records across all partitions.
#[derive(Debug, Default)]
pub struct MatchLedger {
    records: Vec<MatchRecord>,
    /// Per-partition rematch guard, keyed by normalized pair.
    played: HashMap<TournamentId, HashSet<PairKey>>,
    /// Per-partition bye recipients.
    byes: HashMap<TournamentId, HashSet<PlayerId>>,
}

impl MatchLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a played match.
    ///
    /// # Errors
    /// - `SelfMatch` if both sides are the same player
    /// - `RematchRejected` if the pair already met in this partition
    pub fn report(
        &mut self,
        tournament: TournamentId,
        player_a: PlayerId,
        player_b: PlayerId,
        outcome: MatchOutcome,
    ) -> Result<MatchId> {
        if player_a == player_b {
            return Err(SwisspairError::SelfMatch(player_a));
        }
        let key = PairKey::new(player_a, player_b);
        let played = self.played.entry(tournament).or_default();
        if !played.insert(key) {
            return Err(SwisspairError::RematchRejected {
                tournament,
                player_a,
                player_b,
            });
        }

        let record = MatchRecord::played(tournament, player_a, player_b, outcome);
        let id = record.id;
        self.records.push(record);
        tracing::info!(
            tournament = %tournament,
            match_id = %id,
            outcome = %outcome,
            "Match recorded"
        );
        Ok(id)
    }

    /// Append a bye award. Byes are exempt from the rematch rule but a
    /// player receives at most one per partition.
    ///
    /// # Errors
    /// Returns `ByeAlreadyAwarded` on a second bye for the same player.
    pub fn award_bye(&mut self, tournament: TournamentId, player: PlayerId) -> Result<MatchId> {
        let byes = self.byes.entry(tournament).or_default();
        if !byes.insert(player) {
            return Err(SwisspairError::ByeAlreadyAwarded { tournament, player });
        }

        let record = MatchRecord::bye(tournament, player);
        let id = record.id;
        self.records.push(record);
        tracing::info!(tournament = %tournament, player = %player, "Bye awarded");
        Ok(id)
    }

    /// All records of one partition, in report order.
    #[must_use]
    pub fn records_for(&self, tournament: TournamentId) -> Vec<MatchRecord> {
        self.records
            .iter()
            .filter(|r| r.tournament == tournament)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn has_played(&self, tournament: TournamentId, a: PlayerId, b: PlayerId) -> bool {
        self.played
            .get(&tournament)
            .is_some_and(|set| set.contains(&PairKey::new(a, b)))
    }

    #[must_use]
    pub fn has_received_bye(&self, tournament: TournamentId, player: PlayerId) -> bool {
        self.byes
            .get(&tournament)
            .is_some_and(|set| set.contains(&player))
    }

    /// Bulk-delete records: one partition, or all of them for `None`.
    pub fn delete_matches(&mut self, tournament: Option<TournamentId>) {
        match tournament {
            Some(t) => {
                let before = self.records.len();
                self.records.retain(|r| r.tournament != t);
                self.played.remove(&t);
                self.byes.remove(&t);
                tracing::info!(
                    tournament = %t,
                    removed = before - self.records.len(),
                    "Partition matches deleted"
                );
            }
            None => {
                let removed = self.records.len();
                self.records.clear();
                self.played.clear();
                self.byes.clear();
                tracing::info!(removed, "All matches deleted");
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: TournamentId = TournamentId::DEFAULT;

    #[test]
    fn report_and_query() {
        let mut ledger = MatchLedger::new();
        let a = PlayerId::new();
        let b = PlayerId::new();
        ledger.report(T, a, b, MatchOutcome::PlayerA).unwrap();
        assert!(ledger.has_played(T, a, b));
        assert!(ledger.has_played(T, b, a));
        assert_eq!(ledger.records_for(T).len(), 1);
    }

    #[test]
    fn rematch_is_rejected_in_either_order() {
        let mut ledger = MatchLedger::new();
        let a = PlayerId::new();
        let b = PlayerId::new();
        ledger.report(T, a, b, MatchOutcome::PlayerA).unwrap();

        let err = ledger.report(T, a, b, MatchOutcome::PlayerB).unwrap_err();
        assert!(matches!(err, SwisspairError::RematchRejected { .. }));
        let err = ledger.report(T, b, a, MatchOutcome::PlayerA).unwrap_err();
        assert!(matches!(err, SwisspairError::RematchRejected { .. }));
    }

    #[test]
    fn self_match_is_rejected() {
        let mut ledger = MatchLedger::new();
        let a = PlayerId::new();
        let err = ledger.report(T, a, a, MatchOutcome::Draw).unwrap_err();
        assert!(matches!(err, SwisspairError::SelfMatch(_)));
    }

    #[test]
    fn same_pair_may_meet_in_another_partition() {
        let mut ledger = MatchLedger::new();
        let a = PlayerId::new();
        let b = PlayerId::new();
        ledger.report(T, a, b, MatchOutcome::PlayerA).unwrap();
        ledger
            .report(TournamentId(1), a, b, MatchOutcome::PlayerB)
            .unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn second_bye_is_rejected() {
        let mut ledger = MatchLedger::new();
        let p = PlayerId::new();
        ledger.award_bye(T, p).unwrap();
        let err = ledger.award_bye(T, p).unwrap_err();
        assert!(matches!(err, SwisspairError::ByeAlreadyAwarded { .. }));
        // A different partition is a fresh slate.
        ledger.award_bye(TournamentId(1), p).unwrap();
    }

    #[test]
    fn partition_scoped_delete_keeps_other_partitions() {
        let mut ledger = MatchLedger::new();
        let other = TournamentId(1);
        let (a, b, c, d) = (
            PlayerId::new(),
            PlayerId::new(),
            PlayerId::new(),
            PlayerId::new(),
        );
        ledger.report(T, a, b, MatchOutcome::PlayerA).unwrap();
        ledger.report(other, c, d, MatchOutcome::Draw).unwrap();

        ledger.delete_matches(Some(T));
        assert!(ledger.records_for(T).is_empty());
        assert_eq!(ledger.records_for(other).len(), 1);
        // The pair may meet again after deletion.
        ledger.report(T, a, b, MatchOutcome::PlayerB).unwrap();
    }

    #[test]
    fn global_delete_clears_everything() {
        let mut ledger = MatchLedger::new();
        ledger
            .report(T, PlayerId::new(), PlayerId::new(), MatchOutcome::Draw)
            .unwrap();
        ledger.award_bye(TournamentId(1), PlayerId::new()).unwrap();
        ledger.delete_matches(None);
        assert!(ledger.is_empty());
    }
}
