//! Roster configuration.
//!
//! The host provides a `RosterConfig` at startup:
//! - default player names (also the roster size)
//! - the display name length cap
//! - how long the presentation layer should show a celebration
//!
//! Nothing in the core assumes four players; that is only the default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ScoreError;
use super::player::MAX_NAME_LEN;

/// Default celebration length, in milliseconds.
pub const DEFAULT_CELEBRATION_MS: u64 = 3_000;

/// Complete roster configuration.
///
/// ## Example
///
/// ```
/// use euchred::core::RosterConfig;
///
/// let config = RosterConfig::new(["North", "East", "South", "West"])
///     .with_max_name_len(12)
///     .with_celebration_ms(1_500);
///
/// assert_eq!(config.player_count(), 4);
/// assert_eq!(config.max_name_len, 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Names given to players when the roster is first created, in display
    /// order. Also used by "reset names".
    pub default_names: Vec<String>,

    /// Maximum display name length, in characters.
    pub max_name_len: usize,

    /// How long the presentation layer keeps a celebration on screen.
    ///
    /// The core never tracks this timer; it only hands the value out.
    pub celebration_ms: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_names: ["Player One", "Player Two", "Player Three", "Player Four"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_name_len: MAX_NAME_LEN,
            celebration_ms: DEFAULT_CELEBRATION_MS,
        }
    }
}

impl RosterConfig {
    /// Create a configuration with the given default names.
    pub fn new<I, S>(default_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_names: default_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the display name length cap.
    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Set the celebration length.
    #[must_use]
    pub fn with_celebration_ms(mut self, ms: u64) -> Self {
        self.celebration_ms = ms;
        self
    }

    /// Number of players created for an empty roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.default_names.len()
    }

    #[must_use]
    pub fn celebration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }

    /// Check the configuration for values the roster cannot honor.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.max_name_len == 0 {
            return Err(ScoreError::config("max_name_len must be at least 1"));
        }
        if let Some(index) = self.default_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ScoreError::config(format!(
                "default name at position {index} is blank"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let config = RosterConfig::default();

        assert_eq!(config.player_count(), 4);
        assert_eq!(config.default_names[0], "Player One");
        assert_eq!(config.default_names[3], "Player Four");
        assert_eq!(config.max_name_len, 20);
        assert_eq!(config.celebration(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = RosterConfig::new(["A", "B"])
            .with_max_name_len(8)
            .with_celebration_ms(500);

        assert_eq!(config.player_count(), 2);
        assert_eq!(config.max_name_len, 8);
        assert_eq!(config.celebration(), Duration::from_millis(500));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let config = RosterConfig::new(["A", "  ", "C"]);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ScoreError::Config(_)));
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_validate_rejects_zero_length_cap() {
        let config = RosterConfig::default().with_max_name_len(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let config = RosterConfig::new(Vec::<String>::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.player_count(), 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RosterConfig::from_json(r#"{ "default_names": ["Ann", "Ben", "Cal"] }"#).unwrap();

        assert_eq!(config.player_count(), 3);
        assert_eq!(config.max_name_len, MAX_NAME_LEN);
        assert_eq!(config.celebration_ms, DEFAULT_CELEBRATION_MS);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RosterConfig::from_json("{ not json"),
            Err(ScoreError::Serialization(_))
        ));
        assert!(matches!(
            RosterConfig::from_json(r#"{ "max_name_len": 0 }"#),
            Err(ScoreError::Config(_))
        ));
    }
}
