//! Error type shared by the roster, configuration, and scoreboard.

use super::player::PlayerId;

/// Errors surfaced by roster mutations and configuration loading.
///
/// Leader recomputation never fails, so it has no variant here.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// A mutation referenced a player id that is not in the roster.
    #[error("{0} not found")]
    NotFound(PlayerId),

    /// Input was rejected by local validation (e.g. a blank name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// Rows loaded from a repository break the roster rules.
    #[error("invalid roster: {0}")]
    Roster(String),

    /// A config document or repository snapshot could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoreError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn roster(msg: impl Into<String>) -> Self {
        Self::Roster(msg.into())
    }
}
