//! Error types for the SwissPair tournament engine.
//!
//! All errors use the `SP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Player / registration errors
//! - 2xx: Match ledger errors
//! - 3xx: Tournament partition errors
//! - 4xx: Pairing errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{PlayerId, TournamentId};

/// Central error enum for all SwissPair operations.
#[derive(Debug, Error)]
pub enum SwisspairError {
    // =================================================================
    // Player / Registration Errors (1xx)
    // =================================================================
    /// The requested player does not exist in the directory.
    #[error("SP_ERR_100: Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The player is already registered in this partition.
    #[error("SP_ERR_101: Player {player} already registered in {tournament}")]
    DuplicateRegistration {
        tournament: TournamentId,
        player: PlayerId,
    },

    /// A match was reported for a player not registered in the partition.
    #[error("SP_ERR_102: Player {player} is not registered in {tournament}")]
    NotRegistered {
        tournament: TournamentId,
        player: PlayerId,
    },

    // =================================================================
    // Match Ledger Errors (2xx)
    // =================================================================
    /// The unordered pair has already played in this partition.
    #[error("SP_ERR_200: Rematch rejected in {tournament}: {player_a} vs {player_b}")]
    RematchRejected {
        tournament: TournamentId,
        player_a: PlayerId,
        player_b: PlayerId,
    },

    /// A match was reported with the same player on both sides.
    #[error("SP_ERR_201: Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    /// The player has already received a bye in this partition.
    #[error("SP_ERR_202: Player {player} already received a bye in {tournament}")]
    ByeAlreadyAwarded {
        tournament: TournamentId,
        player: PlayerId,
    },

    // =================================================================
    // Tournament Partition Errors (3xx)
    // =================================================================
    /// The requested tournament partition does not exist.
    #[error("SP_ERR_300: Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// The default partition can be cleared but never removed.
    #[error("SP_ERR_301: The default tournament partition cannot be deleted")]
    DefaultTournamentImmutable,

    // =================================================================
    // Pairing Errors (4xx)
    // =================================================================
    /// No legal pairing exists: every completion forces a rematch.
    #[error("SP_ERR_400: Pairing exhausted in {tournament}: no rematch-free round exists")]
    PairingExhausted { tournament: TournamentId },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SP_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwisspairError>;
