//! Match records — the append-only facts the engine derives everything from.
//!
//! A record is either a played match between two distinct players or a bye
//! awarded to a single player. The bye is a tagged variant, not a sentinel
//! player id: a bye scores as one win and one match for its recipient and
//! contributes no opponent to tie-break computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, PairKey, PlayerId, TournamentId};

/// Outcome of a played match, relative to the record's own slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// `player_a` won.
    PlayerA,
    /// `player_b` won.
    PlayerB,
    /// Neither player won; both played.
    Draw,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerA => write!(f, "PLAYER_A"),
            Self::PlayerB => write!(f, "PLAYER_B"),
            Self::Draw => write!(f, "DRAW"),
        }
    }
}

/// What actually happened: a played match or an awarded bye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEntry {
    /// Two distinct players met; `outcome` names the winner (or a draw).
    Played {
        player_a: PlayerId,
        player_b: PlayerId,
        outcome: MatchOutcome,
    },
    /// An unplayed round awarded to one player. Scores as a win.
    Bye { player: PlayerId },
}

/// One immutable entry in a partition's match ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub tournament: TournamentId,
    pub entry: MatchEntry,
    pub reported_at: DateTime<Utc>,
}

impl MatchRecord {
    #[must_use]
    pub fn played(
        tournament: TournamentId,
        player_a: PlayerId,
        player_b: PlayerId,
        outcome: MatchOutcome,
    ) -> Self {
        Self {
            id: MatchId::new(),
            tournament,
            entry: MatchEntry::Played {
                player_a,
                player_b,
                outcome,
            },
            reported_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn bye(tournament: TournamentId, player: PlayerId) -> Self {
        Self {
            id: MatchId::new(),
            tournament,
            entry: MatchEntry::Bye { player },
            reported_at: Utc::now(),
        }
    }

    /// The winner, if any. Byes count as a win for the recipient.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.entry {
            MatchEntry::Played {
                player_a, outcome, ..
            } if outcome == MatchOutcome::PlayerA => Some(player_a),
            MatchEntry::Played {
                player_b, outcome, ..
            } if outcome == MatchOutcome::PlayerB => Some(player_b),
            MatchEntry::Played { .. } => None,
            MatchEntry::Bye { player } => Some(player),
        }
    }

    /// Whether this record counts toward `player`'s match total.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        match self.entry {
            MatchEntry::Played {
                player_a, player_b, ..
            } => player_a == player || player_b == player,
            MatchEntry::Bye { player: p } => p == player,
        }
    }

    /// The opponent `player` faced in this record. `None` for byes or for
    /// records not involving `player`.
    #[must_use]
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        match self.entry {
            MatchEntry::Played {
                player_a, player_b, ..
            } if player_a == player => Some(player_b),
            MatchEntry::Played {
                player_a, player_b, ..
            } if player_b == player => Some(player_a),
            _ => None,
        }
    }

    /// Normalized pair for rematch checks. `None` for byes — facing the bye
    /// is constrained by bye uniqueness, not by the rematch rule.
    #[must_use]
    pub fn pair_key(&self) -> Option<PairKey> {
        match self.entry {
            MatchEntry::Played {
                player_a, player_b, ..
            } => Some(PairKey::new(player_a, player_b)),
            MatchEntry::Bye { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_resolution() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        let t = TournamentId::DEFAULT;

        let rec = MatchRecord::played(t, a, b, MatchOutcome::PlayerA);
        assert_eq!(rec.winner(), Some(a));

        let rec = MatchRecord::played(t, a, b, MatchOutcome::PlayerB);
        assert_eq!(rec.winner(), Some(b));

        let rec = MatchRecord::played(t, a, b, MatchOutcome::Draw);
        assert_eq!(rec.winner(), None);
    }

    #[test]
    fn bye_scores_as_win_with_no_opponent() {
        let p = PlayerId::new();
        let rec = MatchRecord::bye(TournamentId::DEFAULT, p);
        assert_eq!(rec.winner(), Some(p));
        assert!(rec.involves(p));
        assert_eq!(rec.opponent_of(p), None);
        assert_eq!(rec.pair_key(), None);
    }

    #[test]
    fn opponent_lookup_is_symmetric() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        let rec = MatchRecord::played(TournamentId::DEFAULT, a, b, MatchOutcome::Draw);
        assert_eq!(rec.opponent_of(a), Some(b));
        assert_eq!(rec.opponent_of(b), Some(a));
        assert_eq!(rec.opponent_of(PlayerId::new()), None);
    }

    #[test]
    fn serde_roundtrip() {
        let rec = MatchRecord::played(
            TournamentId(3),
            PlayerId::new(),
            PlayerId::new(),
            MatchOutcome::Draw,
        );
        let json = serde_json::to_string(&rec).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }
}
