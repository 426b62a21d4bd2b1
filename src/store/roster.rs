//! Roster store: the ordered set of players and their mutation rules.
//!
//! `PlayerStore` keeps an in-memory copy of the roster in display order and
//! writes every change through to its `PlayerRepository`. It never triggers
//! leader recomputation itself; callers feed `snapshot()` to a
//! `LeaderTracker` after a mutation (or after a batch of them).

use rustc_hash::FxHashMap;

use super::repository::{PlayerField, PlayerRepository};
use crate::core::{normalize_name, PlayerId, PlayerRecord, ScoreError, MAX_NAME_LEN};

const LOG_TARGET: &str = "euchred::store";

/// Roster of players backed by a repository.
///
/// ## Usage
///
/// ```
/// use euchred::store::{MemoryRepository, PlayerStore};
///
/// let mut store = PlayerStore::open(MemoryRepository::new()).unwrap();
/// store.initialize_if_empty(&["Ann", "Ben"]).unwrap();
///
/// let ann = store.players()[0].id();
/// store.increment(ann).unwrap();
/// store.increment(ann).unwrap();
/// store.decrement(ann).unwrap();
///
/// assert_eq!(store.get(ann).unwrap().score(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PlayerStore<R> {
    repository: R,

    /// Players sorted by `order`.
    players: Vec<PlayerRecord>,

    /// Position of each player in `players`.
    index: FxHashMap<PlayerId, usize>,

    max_name_len: usize,
}

impl<R: PlayerRepository> PlayerStore<R> {
    /// Load the roster from a repository with the default name cap.
    pub fn open(repository: R) -> Result<Self, ScoreError> {
        Self::with_name_limit(repository, MAX_NAME_LEN)
    }

    /// Load the roster from a repository with a custom name cap.
    ///
    /// A cap of zero is a `Config` error. Stored rows must have unique ids
    /// and non-blank names, otherwise loading fails with `Roster` and the
    /// repository is left untouched. Stored names that are longer than the
    /// cap or padded with whitespace are cleaned up and written back.
    pub fn with_name_limit(mut repository: R, max_name_len: usize) -> Result<Self, ScoreError> {
        if max_name_len == 0 {
            return Err(ScoreError::config("name length cap must be at least 1"));
        }

        let mut players = repository.list_ordered();
        let mut index = FxHashMap::default();
        let mut cleaned = Vec::new();
        for (i, record) in players.iter_mut().enumerate() {
            let id = record.id();
            if index.insert(id, i).is_some() {
                return Err(ScoreError::roster(format!("{id} is stored more than once")));
            }

            let name = normalize_name(record.name(), max_name_len)
                .map_err(|_| ScoreError::roster(format!("{id} has a blank name")))?;
            if name != record.name() {
                record.set_name(name.clone());
                cleaned.push((id, name));
            }
        }

        for (id, name) in cleaned {
            tracing::warn!(target: LOG_TARGET, player = %id, name = %name, "stored name cleaned up");
            repository.update(id, PlayerField::Name(name));
        }

        tracing::debug!(target: LOG_TARGET, players = players.len(), "roster loaded");

        Ok(Self {
            repository,
            players,
            index,
            max_name_len,
        })
    }

    /// Create one player per default name if the roster is empty.
    ///
    /// Returns `true` if players were created. A non-empty roster is left
    /// alone, so calling this on every launch is safe. Names go through the
    /// same cleanup as `rename`; if any is blank nothing is created.
    pub fn initialize_if_empty<S: AsRef<str>>(&mut self, default_names: &[S]) -> Result<bool, ScoreError> {
        if !self.players.is_empty() {
            return Ok(false);
        }

        let names = self.normalize_all(default_names)?;
        for record in allocate_records(PlayerId::new(0), names)? {
            self.repository.insert(record.clone());
            self.index.insert(record.id(), self.players.len());
            self.players.push(record);
        }

        tracing::info!(target: LOG_TARGET, players = self.players.len(), "roster initialized");
        Ok(!self.players.is_empty())
    }

    /// Add one to a player's score.
    pub fn increment(&mut self, id: PlayerId) -> Result<u32, ScoreError> {
        let record = self.record_mut(id)?;
        let score = record.score().saturating_add(1);
        record.set_score(score);
        self.repository.update(id, PlayerField::Score(score));

        tracing::debug!(target: LOG_TARGET, player = %id, score, "score incremented");
        Ok(score)
    }

    /// Subtract one from a player's score. No-op at zero.
    pub fn decrement(&mut self, id: PlayerId) -> Result<u32, ScoreError> {
        let record = self.record_mut(id)?;
        let score = record.score();
        if score == 0 {
            return Ok(0);
        }

        let score = score - 1;
        record.set_score(score);
        self.repository.update(id, PlayerField::Score(score));

        tracing::debug!(target: LOG_TARGET, player = %id, score, "score decremented");
        Ok(score)
    }

    /// Rename a player.
    ///
    /// The name is trimmed and then cut to the configured length. A name
    /// that is blank after trimming is rejected with `InvalidInput` and the
    /// previous name is kept.
    pub fn rename(&mut self, id: PlayerId, new_name: &str) -> Result<(), ScoreError> {
        let max_name_len = self.max_name_len;
        let record = self.record_mut(id)?;
        let name = normalize_name(new_name, max_name_len)?;

        record.set_name(name.clone());
        tracing::debug!(target: LOG_TARGET, player = %id, name = %name, "player renamed");
        self.repository.update(id, PlayerField::Name(name));
        Ok(())
    }

    /// Set every score to zero.
    pub fn reset_all_scores(&mut self) {
        for record in &mut self.players {
            if record.score() != 0 {
                record.set_score(0);
                self.repository.update(record.id(), PlayerField::Score(0));
            }
        }
        tracing::info!(target: LOG_TARGET, "all scores reset");
    }

    /// Reassign names by display position. Scores are untouched.
    ///
    /// Players positioned beyond the end of `default_names` keep their
    /// current name.
    pub fn reset_all_names<S: AsRef<str>>(&mut self, default_names: &[S]) -> Result<(), ScoreError> {
        let names = self.normalize_all(default_names)?;

        for (record, name) in self.players.iter_mut().zip(names) {
            if record.name() != name {
                record.set_name(name.clone());
                self.repository.update(record.id(), PlayerField::Name(name));
            }
        }
        tracing::info!(target: LOG_TARGET, "player names reset");
        Ok(())
    }

    /// Players in display order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    /// Current `(id, score)` pairs, ready for `LeaderTracker::recompute`.
    pub fn snapshot(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.players.iter().map(|p| (p.id(), p.score()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Give the repository back, e.g. to save it on shutdown.
    pub fn into_repository(self) -> R {
        self.repository
    }

    fn record_mut(&mut self, id: PlayerId) -> Result<&mut PlayerRecord, ScoreError> {
        let i = *self.index.get(&id).ok_or(ScoreError::NotFound(id))?;
        Ok(&mut self.players[i])
    }

    fn normalize_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>, ScoreError> {
        names
            .iter()
            .map(|n| normalize_name(n.as_ref(), self.max_name_len))
            .collect()
    }
}

/// Build one record per name with consecutive ids starting at `first`.
///
/// Fails with `Config` if the ids or the display positions run past `u32`.
fn allocate_records(first: PlayerId, names: Vec<String>) -> Result<Vec<PlayerRecord>, ScoreError> {
    let mut records = Vec::with_capacity(names.len());
    let mut next = Some(first);
    for (position, name) in names.into_iter().enumerate() {
        let id = next.ok_or_else(|| ScoreError::config("roster exhausts the player id space"))?;
        let order = u32::try_from(position)
            .map_err(|_| ScoreError::config("roster has more positions than fit in u32"))?;
        records.push(PlayerRecord::new(id, name, order));
        next = id.checked_next();
    }
    Ok(records)
}
