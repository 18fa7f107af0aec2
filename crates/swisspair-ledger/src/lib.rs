//! # swisspair-ledger
//!
//! **Storage plane**: player directory, tournament partition registry,
//! and the append-only match ledger.
//!
//! ## Architecture
//!
//! The storage plane sits between the caller and the pure engine:
//! 1. **PlayerDirectory**: owns player identities (id, name)
//! 2. **TournamentRegistry**: partition set + per-partition registrations;
//!    the default partition is pre-seeded and can never be removed
//! 3. **MatchLedger**: append-only match records; enforces the no-rematch
//!    uniqueness constraint and bye uniqueness at write time
//! 4. **TournamentStore**: façade composing the three, producing consistent
//!    [`RoundSnapshot`]s for the engine
//!
//! ## Data Flow
//!
//! ```text
//! caller → TournamentStore.report_win() → MatchLedger.append()
//!        → TournamentStore.snapshot() → RoundSnapshot → swisspair-engine
//! ```
//!
//! The engine re-derives standings and pairings from a fresh snapshot on
//! every call; nothing derived is ever stored here.
//!
//! [`RoundSnapshot`]: swisspair_types::RoundSnapshot

pub mod directory;
pub mod ledger;
pub mod registry;
pub mod store;

pub use directory::PlayerDirectory;
pub use ledger::MatchLedger;
pub use registry::TournamentRegistry;
pub use store::TournamentStore;
