//! # euchred
//!
//! Score tracking and leader detection for a Euchre scoreboard.
//!
//! ## Design Principles
//!
//! 1. **Configured Roster**: Player names and roster size come from
//!    `RosterConfig`. Four players is only the default.
//!
//! 2. **Explicit Recompute**: The roster never notifies anyone. Callers
//!    mutate, then call `LeaderTracker::recompute` (or use `Scoreboard`,
//!    which does both).
//!
//! 3. **Ids, Not Names**: Every operation is keyed by `PlayerId`. Display
//!    names may repeat.
//!
//! ## Architecture
//!
//! - **Write-through store**: `PlayerStore` keeps the roster in memory and
//!   forwards each change to a host-provided `PlayerRepository`.
//!
//! - **Leader state machine**: `LeaderTracker` keeps only the previous
//!   leader set and score, and reports a `celebrate` flag when a new
//!   maximum is reached or a player joins the leaders.
//!
//! ## Modules
//!
//! - `core`: Player ids and records, configuration, errors
//! - `store`: Roster store and persistence seam
//! - `leaders`: Leader tracking state machine
//! - `scoreboard`: Store and tracker composed for the presentation layer

pub mod core;
pub mod store;
pub mod leaders;
pub mod scoreboard;

// Re-export commonly used types
pub use crate::core::{normalize_name, PlayerId, PlayerRecord, RosterConfig, ScoreError, MAX_NAME_LEN};

pub use crate::store::{MemoryRepository, PlayerField, PlayerRepository, PlayerStore};

pub use crate::leaders::{LeaderChange, LeaderState, LeaderTracker, LeaderUpdate};

pub use crate::scoreboard::{Headline, Scoreboard};
