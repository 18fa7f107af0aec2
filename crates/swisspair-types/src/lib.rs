//! # swisspair-types
//!
//! Shared types, errors, and constants for the **SwissPair** tournament
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PlayerId`], [`MatchId`], [`TournamentId`], [`PairKey`]
//! - **Entities**: [`Player`], [`Tournament`]
//! - **Match model**: [`MatchRecord`], [`MatchEntry`], [`MatchOutcome`]
//! - **Derived results**: [`Standing`], [`Seat`], [`Pairing`]
//! - **Engine input**: [`RoundSnapshot`] — the consistent read-only view
//!   handed from the storage plane to the pure engine
//! - **Errors**: [`SwisspairError`] with `SP_ERR_` prefix codes
//! - **Constants**: reserved defaults

pub mod constants;
pub mod error;
pub mod ids;
pub mod pairing;
pub mod player;
pub mod record;
pub mod snapshot;
pub mod standing;
pub mod tournament;

// Re-export all primary types at crate root for ergonomic imports:
//   use swisspair_types::{PlayerId, MatchRecord, Standing, Pairing, ...};

pub use error::*;
pub use ids::*;
pub use pairing::*;
pub use player::*;
pub use record::*;
pub use snapshot::*;
pub use standing::*;
pub use tournament::*;

// Constants are accessed via `swisspair_types::constants::FOO`
// (not re-exported to avoid name collisions).
