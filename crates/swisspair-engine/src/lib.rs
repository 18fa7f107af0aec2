//! # swisspair-engine
//!
//! **Pure deterministic standings and pairing engine for SwissPair.**
//!
//! The engine is the compute plane — it takes a [`RoundSnapshot`] of one
//! partition's roster and match ledger and produces rankings and next-round
//! pairings. It has:
//!
//! - **Zero side effects**: no storage writes, no registration logic
//! - **Deterministic output**: same snapshot -> same standings and pairings
//! - **Rematch avoidance**: no proposed pair repeats a recorded match
//! - **Bye handling**: odd rosters pair the lowest-ranked un-byed player
//!   with a bye slot
//!
//! [`RoundSnapshot`]: swisspair_types::RoundSnapshot

pub mod pairing;
pub mod standings;

pub use pairing::pair_next_round;
pub use standings::compute_standings;
