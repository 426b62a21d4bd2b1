//! Core types: player ids and records, configuration, errors.
//!
//! These are shared by the roster store, the leader tracker, and the
//! scoreboard. Hosts configure the roster via `RosterConfig` rather than
//! relying on built-in constants.

pub mod player;
pub mod config;
pub mod error;

pub use player::{normalize_name, PlayerId, PlayerRecord, MAX_NAME_LEN};
pub use config::{RosterConfig, DEFAULT_CELEBRATION_MS};
pub use error::ScoreError;
