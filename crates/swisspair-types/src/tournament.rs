//! Tournament partition entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{TournamentId, constants};

/// An isolated tournament instance. Players, matches, and rankings never
/// cross partition boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    #[must_use]
    pub fn new(id: TournamentId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }

    /// The permanent default partition, pre-seeded at registry construction.
    #[must_use]
    pub fn default_partition() -> Self {
        Self::new(TournamentId::DEFAULT, constants::DEFAULT_TOURNAMENT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_partition_has_reserved_id() {
        let t = Tournament::default_partition();
        assert!(t.id.is_default());
        assert_eq!(t.title, constants::DEFAULT_TOURNAMENT_TITLE);
    }
}
