//! System-wide constants for the SwissPair tournament engine.

/// Title of the pre-seeded default tournament partition.
pub const DEFAULT_TOURNAMENT_TITLE: &str = "Default";

/// First identifier handed out for user-created tournament partitions.
pub const FIRST_USER_TOURNAMENT: u64 = 1;
