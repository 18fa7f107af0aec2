//! Next-round pairing generation.
//!
//! Pairs adjacent players in the standings while never repeating a recorded
//! match. Odd rosters award a bye to the lowest-ranked player who has not
//! had one yet.
//!
//! ## Conflict resolution
//!
//! Adjacent pairing can collide with the no-rematch rule, so the generator
//! runs a deterministic backtracking search over the ranked list: the
//! highest-ranked unpaired player tries opponents downward in rank order and
//! the search backtracks on dead ends. The first opponent tried is always
//! the rank-adjacent one, so the result degrades minimally from pure
//! adjacent pairing. The search fails only when no rematch-free perfect
//! matching exists at all, which is reported as
//! [`SwisspairError::PairingExhausted`] — never as a silent rematch.

use std::collections::HashSet;

use swisspair_types::{PairKey, Pairing, Result, RoundSnapshot, Seat, SwisspairError};

use crate::standings::compute_standings;

/// Generate the pairings for the partition's next round.
///
/// Every rostered player appears in exactly one pairing. Each `Players`
/// pairing lists the higher-ranked seat first; the bye pairing, if any, is
/// emitted last.
///
/// ## Edge cases
///
/// - Empty roster -> `Ok(vec![])`
/// - Single player -> a single bye pairing
/// - No rematch-free round exists -> `Err(PairingExhausted)`
pub fn pair_next_round(snapshot: &RoundSnapshot) -> Result<Vec<Pairing>> {
    let standings = compute_standings(snapshot);
    if standings.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<Seat> = standings
        .iter()
        .map(|s| Seat::new(s.player, s.name.clone()))
        .collect();

    // Odd roster: pull the bye recipient out before matching. Scan from the
    // bottom of the standings for a player without a prior bye; if everyone
    // has had one, the lowest-ranked player takes a second.
    let bye_seat = if ranked.len() % 2 == 1 {
        let idx = ranked
            .iter()
            .rposition(|seat| !snapshot.has_received_bye(seat.id))
            .unwrap_or(ranked.len() - 1);
        Some(ranked.remove(idx))
    } else {
        None
    };

    let played = snapshot.played_pairs();
    let mut partner: Vec<Option<usize>> = vec![None; ranked.len()];
    if !assign_partners(&ranked, &played, &mut partner, 0) {
        tracing::warn!(
            tournament = %snapshot.tournament,
            players = ranked.len(),
            "No rematch-free pairing exists"
        );
        return Err(SwisspairError::PairingExhausted {
            tournament: snapshot.tournament,
        });
    }

    let mut pairings = Vec::with_capacity(ranked.len() / 2 + 1);
    for (i, &p) in partner.iter().enumerate() {
        match p {
            // Emit each pair once, higher-ranked seat first.
            Some(j) if j > i => {
                pairings.push(Pairing::Players(ranked[i].clone(), ranked[j].clone()));
            }
            Some(_) => {}
            None => unreachable!("assign_partners pairs every index on success"),
        }
    }
    if let Some(seat) = bye_seat {
        pairings.push(Pairing::Bye(seat));
    }

    tracing::debug!(
        tournament = %snapshot.tournament,
        pairings = pairings.len(),
        bye = pairings.last().is_some_and(Pairing::is_bye),
        "Round pairings generated"
    );

    Ok(pairings)
}

/// Deterministic backtracking over the ranked list.
///
/// Invariant: indices below `from` with a partner are final for the current
/// branch. Opponents are tried in rank order, so the first complete matching
/// found is the one closest to plain adjacent pairing.
fn assign_partners(
    ranked: &[Seat],
    played: &HashSet<PairKey>,
    partner: &mut [Option<usize>],
    from: usize,
) -> bool {
    let Some(i) = (from..partner.len()).find(|&i| partner[i].is_none()) else {
        return true;
    };
    for j in (i + 1)..partner.len() {
        if partner[j].is_some() {
            continue;
        }
        if played.contains(&PairKey::new(ranked[i].id, ranked[j].id)) {
            continue;
        }
        partner[i] = Some(j);
        partner[j] = Some(i);
        if assign_partners(ranked, played, partner, i + 1) {
            return true;
        }
        partner[i] = None;
        partner[j] = None;
    }
    false
}
