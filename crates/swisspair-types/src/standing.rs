//! Derived standings — computed fresh from the ledger, never stored.

use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// One row of the standings for a partition.
///
/// `omw` (Opponent Match Wins) is the tie-break score: the sum of the win
/// totals of every opponent this player has faced, counted once per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
    pub omw: u32,
}

impl Standing {
    /// Rank key: wins descending, then OMW descending. The final tie-break
    /// (registration order) is applied by the caller that knows the roster.
    #[must_use]
    pub fn rank_key(&self) -> (std::cmp::Reverse<u32>, std::cmp::Reverse<u32>) {
        (std::cmp::Reverse(self.wins), std::cmp::Reverse(self.omw))
    }
}
