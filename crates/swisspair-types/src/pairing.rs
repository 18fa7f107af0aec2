//! Derived pairings for the next round — ephemeral, recomputed per request.

use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// One side of a proposed pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

impl Seat {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A proposed next-round pairing.
///
/// The bye is its own variant rather than a fake opponent with a sentinel
/// id. In a `Players` pairing the higher-ranked seat comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing {
    Players(Seat, Seat),
    Bye(Seat),
}

impl Pairing {
    /// Whether `player` occupies a seat in this pairing.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        match self {
            Self::Players(a, b) => a.id == player || b.id == player,
            Self::Bye(seat) => seat.id == player,
        }
    }

    /// The players seated in this pairing (one for a bye, two otherwise).
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        match self {
            Self::Players(a, b) => vec![a.id, b.id],
            Self::Bye(seat) => vec![seat.id],
        }
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involvement_and_player_listing() {
        let a = Seat::new(PlayerId::new(), "A");
        let b = Seat::new(PlayerId::new(), "B");
        let pair = Pairing::Players(a.clone(), b.clone());
        assert!(pair.involves(a.id));
        assert!(pair.involves(b.id));
        assert!(!pair.involves(PlayerId::new()));
        assert_eq!(pair.players(), vec![a.id, b.id]);
        assert!(!pair.is_bye());

        let bye = Pairing::Bye(a.clone());
        assert!(bye.is_bye());
        assert_eq!(bye.players(), vec![a.id]);
    }
}
