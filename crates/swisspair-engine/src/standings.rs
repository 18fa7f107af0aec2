//! Standings computation: wins, matches, and OMW tie-break over a snapshot.
//!
//! Ranking is a total order: wins descending, then OMW (Opponent Match
//! Wins) descending, then registration order ascending. The last key makes
//! the order fully deterministic for a fixed snapshot.

use std::collections::HashMap;

use swisspair_types::{MatchRecord, PlayerId, RoundSnapshot, Standing};

/// Per-player tally accumulated from the match ledger.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    wins: u32,
    matches: u32,
}

/// Compute the ranked standings for the snapshot's partition.
///
/// ## Algorithm
///
/// 1. Tally wins and match counts from every record. A draw counts one
///    match for both players and a win for neither; a bye counts one match
///    and one win for its recipient.
/// 2. OMW for each player = sum of the win totals of every opponent faced,
///    counted once per played record. Byes contribute no opponent.
/// 3. Sort by wins desc, OMW desc, registration order asc (stable).
///
/// Every rostered player appears exactly once, including players with no
/// matches (wins = matches = omw = 0). An empty roster yields an empty vec.
#[must_use]
pub fn compute_standings(snapshot: &RoundSnapshot) -> Vec<Standing> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();

    for record in &snapshot.matches {
        if let Some(winner) = record.winner() {
            tallies.entry(winner).or_default().wins += 1;
        }
        for player in participants(record) {
            tallies.entry(player).or_default().matches += 1;
        }
    }

    let mut standings: Vec<Standing> = snapshot
        .roster
        .iter()
        .map(|player| {
            let tally = tallies.get(&player.id).copied().unwrap_or_default();
            let omw = snapshot
                .matches
                .iter()
                .filter_map(|record| record.opponent_of(player.id))
                .map(|opponent| tallies.get(&opponent).map_or(0, |t| t.wins))
                .sum();
            Standing {
                player: player.id,
                name: player.name.clone(),
                wins: tally.wins,
                matches: tally.matches,
                omw,
            }
        })
        .collect();

    // Stable sort: ties after OMW keep registration order.
    standings.sort_by_key(Standing::rank_key);

    tracing::debug!(
        tournament = %snapshot.tournament,
        players = standings.len(),
        records = snapshot.matches.len(),
        "Standings computed"
    );

    standings
}

fn participants(record: &MatchRecord) -> Vec<PlayerId> {
    match record.entry {
        swisspair_types::MatchEntry::Played {
            player_a, player_b, ..
        } => vec![player_a, player_b],
        swisspair_types::MatchEntry::Bye { player } => vec![player],
    }
}

#[cfg(test)]
mod tests {
    use swisspair_types::RoundSnapshot;

    use super::*;

    #[test]
    fn empty_roster_yields_empty_standings() {
        let snap = RoundSnapshot::empty(swisspair_types::TournamentId(99));
        assert!(compute_standings(&snap).is_empty());
    }

    #[test]
    fn newcomers_appear_with_zero_counts() {
        let snap = RoundSnapshot::with_roster(&["A", "B", "C"]);
        let standings = compute_standings(&snap);
        assert_eq!(standings.len(), 3);
        for s in &standings {
            assert_eq!((s.wins, s.matches, s.omw), (0, 0, 0));
        }
        // All tied: registration order holds.
        let names: Vec<&str> = standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn draw_counts_matches_for_both_and_wins_for_neither() {
        let mut snap = RoundSnapshot::with_roster(&["A", "B"]);
        let a = snap.roster[0].id;
        let b = snap.roster[1].id;
        snap.record_draw(a, b);

        let standings = compute_standings(&snap);
        for s in &standings {
            assert_eq!(s.wins, 0);
            assert_eq!(s.matches, 1);
        }
    }

    #[test]
    fn bye_counts_as_a_win_and_a_match() {
        let mut snap = RoundSnapshot::with_roster(&["A", "B"]);
        let a = snap.roster[0].id;
        snap.record_bye(a);

        let standings = compute_standings(&snap);
        let top = &standings[0];
        assert_eq!(top.player, a);
        assert_eq!(top.wins, 1);
        assert_eq!(top.matches, 1);
        assert_eq!(top.omw, 0, "a bye contributes no opponent to OMW");
    }

    #[test]
    fn two_round_omw_scenario() {
        // Round 1: A beats B, C beats D. Round 2: D beats B, A beats C.
        // Final order must be A (2 wins) > C > D (both 1 win, C's opponents
        // won more) > B (0 wins).
        let mut snap = RoundSnapshot::with_roster(&["A", "B", "C", "D"]);
        let a = snap.roster[0].id;
        let b = snap.roster[1].id;
        let c = snap.roster[2].id;
        let d = snap.roster[3].id;
        snap.record_win(a, b);
        snap.record_win(c, d);
        snap.record_win(d, b);
        snap.record_win(a, c);

        let standings = compute_standings(&snap);
        let order: Vec<PlayerId> = standings.iter().map(|s| s.player).collect();
        assert_eq!(order, vec![a, c, d, b]);

        assert_eq!(standings[0].wins, 2);
        assert_eq!(standings[1].wins, 1);
        assert_eq!(standings[2].wins, 1);
        assert_eq!(standings[3].wins, 0);
        assert!(
            standings[1].omw > standings[2].omw,
            "C's opponents out-won D's: {} vs {}",
            standings[1].omw,
            standings[2].omw
        );
    }

    #[test]
    fn ties_after_omw_fall_back_to_registration_order() {
        // Two disjoint wins produce identical (wins, omw) rows for the two
        // winners and for the two losers.
        let mut snap = RoundSnapshot::with_roster(&["A", "B", "C", "D"]);
        let a = snap.roster[0].id;
        let b = snap.roster[1].id;
        let c = snap.roster[2].id;
        let d = snap.roster[3].id;
        snap.record_win(a, b);
        snap.record_win(c, d);

        let standings = compute_standings(&snap);
        let order: Vec<PlayerId> = standings.iter().map(|s| s.player).collect();
        assert_eq!(order, vec![a, c, b, d]);
    }

    #[test]
    fn determinism_across_repeated_calls() {
        let mut snap = RoundSnapshot::with_roster(&["A", "B", "C", "D", "E"]);
        let ids: Vec<PlayerId> = snap.roster.iter().map(|p| p.id).collect();
        snap.record_win(ids[0], ids[1]);
        snap.record_draw(ids[2], ids[3]);
        snap.record_bye(ids[4]);

        let first = compute_standings(&snap);
        for _ in 0..5 {
            assert_eq!(compute_standings(&snap), first);
        }
    }
}
