//! Player identification and roster records.
//!
//! ## PlayerId
//!
//! Opaque, stable player identifier. Assigned once when the record is
//! created and never reused for another player. All roster operations are
//! keyed by id because display names are not guaranteed to be unique.
//!
//! ## PlayerRecord
//!
//! One row of the roster: id, display name, euchre count, and display order.

use serde::{Deserialize, Serialize};

use super::error::ScoreError;

/// Default cap on display name length, in characters.
pub const MAX_NAME_LEN: usize = 20;

/// Stable player identifier.
///
/// ```
/// use euchred::core::PlayerId;
///
/// let id = PlayerId::new(3);
/// assert_eq!(id.raw(), 3);
/// assert_eq!(id.to_string(), "Player 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one, used when allocating new records.
    ///
    /// Returns `None` once the id space is exhausted.
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A single player on the roster.
///
/// `id` and `order` are fixed at creation. `name` and `score` change through
/// `PlayerStore`, which enforces the name rules and the non-negative score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    id: PlayerId,
    name: String,
    score: u32,
    order: u32,
}

impl PlayerRecord {
    /// Create a record with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            order,
        }
    }

    /// Set the starting score. Used by repositories restoring saved rows.
    #[must_use]
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current euchre count.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Display position (0-based).
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

/// Clean up a user-entered display name.
///
/// Surrounding whitespace is trimmed, then the name is cut to `max_len`
/// characters. A name that is blank after trimming, or that the cut leaves
/// empty, is rejected.
///
/// ```
/// use euchred::core::normalize_name;
///
/// assert_eq!(normalize_name("  Bob ", 20).unwrap(), "Bob");
/// assert!(normalize_name("   ", 20).is_err());
/// ```
pub fn normalize_name(raw: &str, max_len: usize) -> Result<String, ScoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScoreError::invalid_input("player name is blank"));
    }

    // Truncation can expose an inner space at the cut point.
    let clipped: String = trimmed.chars().take(max_len).collect();
    let name = clipped.trim_end();
    if name.is_empty() {
        return Err(ScoreError::invalid_input(format!(
            "player name is empty when cut to {max_len} characters"
        )));
    }
    Ok(name.to_owned())
}
