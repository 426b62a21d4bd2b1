//! Persistence seam for the roster.
//!
//! Durable storage belongs to the host. The store only needs three things
//! from it: list the players in display order, insert a new player, and
//! update one field of an existing player. Repositories are assumed to
//! succeed; storage failures are the host's concern.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerRecord, ScoreError};

/// A single-field change written through to the repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerField {
    Name(String),
    Score(u32),
}

/// Storage collaborator for `PlayerStore`.
///
/// ## Implementation Notes
///
/// - `list_ordered`: sorted by `PlayerRecord::order`
/// - `update`: ignore unknown ids; the store validates ids before writing
pub trait PlayerRepository {
    /// All players, sorted by display order.
    fn list_ordered(&self) -> Vec<PlayerRecord>;

    /// Add a new player.
    fn insert(&mut self, record: PlayerRecord);

    /// Change one field of an existing player.
    fn update(&mut self, id: PlayerId, field: PlayerField);
}

/// In-process repository backed by a `Vec`.
///
/// Serializable, so a host without a database can save the roster as JSON
/// and restore it on the next launch.
///
/// ```
/// use euchred::core::{PlayerId, PlayerRecord};
/// use euchred::store::{MemoryRepository, PlayerField, PlayerRepository};
///
/// let mut repo = MemoryRepository::new();
/// repo.insert(PlayerRecord::new(PlayerId::new(0), "Ann", 0));
/// repo.update(PlayerId::new(0), PlayerField::Score(2));
///
/// assert_eq!(repo.list_ordered()[0].score(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRepository {
    records: Vec<PlayerRecord>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously saved rows.
    pub fn from_records(records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a snapshot written by `to_json`. Duplicate ids are rejected.
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        let repo: Self = serde_json::from_str(json)?;

        let mut seen = FxHashSet::default();
        if let Some(id) = repo.records.iter().map(PlayerRecord::id).find(|id| !seen.insert(*id)) {
            return Err(ScoreError::roster(format!("{id} is stored more than once")));
        }
        Ok(repo)
    }
}

impl PlayerRepository for MemoryRepository {
    fn list_ordered(&self) -> Vec<PlayerRecord> {
        let mut records = self.records.clone();
        records.sort_by_key(PlayerRecord::order);
        records
    }

    fn insert(&mut self, record: PlayerRecord) {
        self.records.push(record);
    }

    fn update(&mut self, id: PlayerId, field: PlayerField) {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return;
        };
        match field {
            PlayerField::Name(name) => record.set_name(name),
            PlayerField::Score(score) => record.set_score(score),
        }
    }
}
