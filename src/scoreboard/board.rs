//! Scoreboard: roster plus leader tracking, driven by the presentation layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerRecord, RosterConfig, ScoreError};
use crate::leaders::{LeaderTracker, LeaderUpdate};
use crate::store::{MemoryRepository, PlayerRepository, PlayerStore};

const LOG_TARGET: &str = "euchred::scoreboard";

/// Leader banner text for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Headline {
    /// Nobody has scored yet.
    NoLeader,
    /// Leader names in display order, one per line when tied.
    Leaders(SmallVec<[String; 4]>),
}

impl std::fmt::Display for Headline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Headline::NoLeader => write!(f, "No Leader Yet"),
            Headline::Leaders(names) => write!(f, "{}", names.join("\n")),
        }
    }
}

/// A roster and its leader tracker, kept in step.
///
/// Every score mutation is followed by an explicit recompute; the returned
/// `LeaderUpdate` tells the caller what to render and whether to start a
/// celebration. The celebration timer itself belongs to the caller.
///
/// ## Example
///
/// ```
/// use euchred::core::RosterConfig;
/// use euchred::scoreboard::Scoreboard;
///
/// let mut board = Scoreboard::in_memory(RosterConfig::default()).unwrap();
/// let first = board.players()[0].id();
///
/// let update = board.increment(first).unwrap();
/// assert!(update.celebrate);
/// assert_eq!(board.headline().to_string(), "Player One");
/// ```
#[derive(Clone, Debug)]
pub struct Scoreboard<R = MemoryRepository> {
    config: RosterConfig,
    store: PlayerStore<R>,
    tracker: LeaderTracker<PlayerId>,
}

impl Scoreboard<MemoryRepository> {
    /// Open a scoreboard on a fresh in-memory repository.
    pub fn in_memory(config: RosterConfig) -> Result<Self, ScoreError> {
        Self::open(MemoryRepository::new(), config)
    }
}

impl<R: PlayerRepository> Scoreboard<R> {
    /// Load the roster, create default players if it is empty, and prime
    /// the leader tracker from the loaded scores.
    ///
    /// Fails with `Roster` if the stored rows have duplicate ids or blank
    /// names.
    pub fn open(repository: R, config: RosterConfig) -> Result<Self, ScoreError> {
        config.validate()?;

        let mut store = PlayerStore::with_name_limit(repository, config.max_name_len)?;
        store.initialize_if_empty(config.default_names.as_slice())?;
        let tracker = LeaderTracker::primed(store.snapshot());

        tracing::info!(
            target: LOG_TARGET,
            players = store.len(),
            leaders = tracker.state().leaders.len(),
            "scoreboard opened"
        );

        Ok(Self {
            config,
            store,
            tracker,
        })
    }

    /// Add a win for a player and recompute leaders.
    pub fn increment(&mut self, id: PlayerId) -> Result<LeaderUpdate, ScoreError> {
        self.store.increment(id)?;
        Ok(self.recompute())
    }

    /// Take back a win (no-op at zero) and recompute leaders.
    pub fn decrement(&mut self, id: PlayerId) -> Result<LeaderUpdate, ScoreError> {
        self.store.decrement(id)?;
        Ok(self.recompute())
    }

    /// Rename a player.
    ///
    /// Returns `Ok(false)` when the name is blank after trimming; the old
    /// name is kept. Unknown ids are still an error.
    pub fn rename(&mut self, id: PlayerId, new_name: &str) -> Result<bool, ScoreError> {
        match self.store.rename(id, new_name) {
            Ok(()) => Ok(true),
            Err(ScoreError::InvalidInput(reason)) => {
                tracing::debug!(target: LOG_TARGET, player = %id, %reason, "rename ignored");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Clear every score. Leaders return to the empty state, so the next
    /// point scored celebrates again.
    pub fn reset_scores(&mut self) -> LeaderUpdate {
        self.store.reset_all_scores();
        self.recompute()
    }

    /// Restore the configured default names by display position.
    pub fn reset_names(&mut self) -> Result<(), ScoreError> {
        self.store.reset_all_names(self.config.default_names.as_slice())
    }

    /// Recompute leaders from the current scores.
    ///
    /// Hosts that batch several store mutations call this once afterwards.
    pub fn recompute(&mut self) -> LeaderUpdate {
        self.tracker.recompute(self.store.snapshot())
    }

    /// Players in display order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        self.store.players()
    }

    /// Current leader records in display order.
    #[must_use]
    pub fn leaders(&self) -> SmallVec<[&PlayerRecord; 4]> {
        let state = self.tracker.state();
        self.store
            .players()
            .iter()
            .filter(|p| state.is_leader(&p.id()))
            .collect()
    }

    /// Score held by the current leaders (0 with no leader).
    #[must_use]
    pub fn leader_score(&self) -> u32 {
        self.tracker.state().score
    }

    #[must_use]
    pub fn headline(&self) -> Headline {
        let leaders = self.leaders();
        if leaders.is_empty() {
            Headline::NoLeader
        } else {
            Headline::Leaders(leaders.iter().map(|p| p.name().to_owned()).collect())
        }
    }

    /// How long the presentation layer should show a celebration.
    #[must_use]
    pub fn celebration(&self) -> Duration {
        self.config.celebration()
    }

    #[must_use]
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &PlayerStore<R> {
        &self.store
    }

    /// Mutable access for batched edits; call `recompute` afterwards.
    pub fn store_mut(&mut self) -> &mut PlayerStore<R> {
        &mut self.store
    }

    #[must_use]
    pub fn tracker(&self) -> &LeaderTracker<PlayerId> {
        &self.tracker
    }

    /// Give the repository back, e.g. to save it on shutdown.
    pub fn into_repository(self) -> R {
        self.store.into_repository()
    }
}
