//! Leader determination and celebration decisions.
//!
//! `LeaderTracker` remembers the last leader set and its score. Each call to
//! `recompute` compares the current maximum against that memory and reports
//! whether a celebration should fire.
//!
//! ## Transitions
//!
//! | Current max vs. stored                 | Change        | Celebrate |
//! |----------------------------------------|---------------|-----------|
//! | max is 0 or no players                 | `Cleared`     | no        |
//! | nothing stored yet                     | `FirstScore`  | yes       |
//! | max > stored score                     | `NewHigh`     | yes       |
//! | max == stored score, someone new at it | `TieJoined`   | yes       |
//! | max == stored score, someone dropped   | `TieNarrowed` | no        |
//! | max == stored score, same set          | `Unchanged`   | no        |
//! | max < stored score, same set           | `Lowered`     | no        |
//! | max < stored score, different set      | `Handover`    | no        |
//!
//! A decrease never celebrates; the new top set is adopted quietly.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

const LOG_TARGET: &str = "euchred::leaders";

/// The leader set and the score it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderState<K: Ord + Clone = PlayerId> {
    /// Keys tied at the maximum score. Empty when nobody has scored.
    pub leaders: OrdSet<K>,

    /// Score held by `leaders`; 0 when `leaders` is empty.
    pub score: u32,
}

impl<K: Ord + Clone> Default for LeaderState<K> {
    fn default() -> Self {
        Self {
            leaders: OrdSet::new(),
            score: 0,
        }
    }
}

impl<K: Ord + Clone> LeaderState<K> {
    /// Derive the leader state from a score snapshot, with no history.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut leaders = OrdSet::new();
        let mut score = 0;

        for (key, value) in scores {
            if value == 0 || value < score {
                continue;
            }
            if value > score {
                score = value;
                leaders.clear();
            }
            leaders.insert(key);
        }

        Self { leaders, score }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    #[must_use]
    pub fn is_leader(&self, key: &K) -> bool {
        self.leaders.contains(key)
    }
}

/// What kind of transition a recompute observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaderChange {
    /// Nobody has a positive score.
    Cleared,
    /// First positive score since start or since the last clear.
    FirstScore,
    /// The maximum score went up.
    NewHigh,
    /// Same maximum, and at least one player newly reached it.
    TieJoined,
    /// Same maximum, held by a subset of the previous leaders.
    TieNarrowed,
    /// Same maximum, same players.
    Unchanged,
    /// The maximum went down but the same players hold it.
    Lowered,
    /// The maximum went down and different players hold it.
    Handover,
}

impl LeaderChange {
    /// Whether this transition should trigger a celebration.
    #[must_use]
    pub const fn celebrates(self) -> bool {
        matches!(self, Self::FirstScore | Self::NewHigh | Self::TieJoined)
    }
}

/// Result of a recompute, ready for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderUpdate<K: Ord + Clone = PlayerId> {
    /// Keys tied at the maximum score.
    pub leaders: OrdSet<K>,

    /// The maximum score (0 when there are no leaders).
    pub score: u32,

    /// Fire a one-shot celebration now.
    pub celebrate: bool,

    /// Which transition produced this update.
    pub change: LeaderChange,
}

impl<K: Ord + Clone> LeaderUpdate<K> {
    fn new(state: &LeaderState<K>, change: LeaderChange) -> Self {
        Self {
            leaders: state.leaders.clone(),
            score: state.score,
            celebrate: change.celebrates(),
            change,
        }
    }
}

/// Tracks the leader set across score changes.
///
/// Generic over the player key. The scoreboard uses `PlayerId`; any
/// `Ord + Clone` key works, which keeps the tracker usable on its own.
///
/// ## Example
///
/// ```
/// use euchred::leaders::{LeaderChange, LeaderTracker};
///
/// let mut tracker = LeaderTracker::new();
///
/// let update = tracker.recompute([("A", 1), ("B", 0)]);
/// assert!(update.celebrate);
/// assert_eq!(update.change, LeaderChange::FirstScore);
///
/// let update = tracker.recompute([("A", 1), ("B", 1)]);
/// assert!(update.celebrate);
/// assert_eq!(update.leaders.len(), 2);
///
/// let update = tracker.recompute([("A", 0), ("B", 1)]);
/// assert!(!update.celebrate);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeaderTracker<K: Ord + Clone = PlayerId> {
    state: LeaderState<K>,
}

impl<K: Ord + Clone> Default for LeaderTracker<K> {
    fn default() -> Self {
        Self {
            state: LeaderState::default(),
        }
    }
}

impl<K: Ord + Clone + std::fmt::Debug> LeaderTracker<K> {
    /// Create a tracker with no leader recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker already primed from existing scores.
    pub fn primed<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        let mut tracker = Self::new();
        tracker.prime(scores);
        tracker
    }

    /// Current stored leader state.
    #[must_use]
    pub fn state(&self) -> &LeaderState<K> {
        &self.state
    }

    /// Adopt the leaders of `scores` without celebrating.
    ///
    /// Call once after loading persisted scores so the first recompute
    /// after a restart does not replay a celebration.
    pub fn prime<I>(&mut self, scores: I)
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        self.state = LeaderState::from_scores(scores);
        tracing::debug!(
            target: LOG_TARGET,
            leaders = ?self.state.leaders,
            score = self.state.score,
            "leader state primed"
        );
    }

    /// Forget the stored leaders.
    pub fn reset(&mut self) {
        self.state = LeaderState::default();
    }

    /// Recompute leaders from the full current score snapshot.
    ///
    /// Never fails: an empty or all-zero snapshot clears the leaders.
    pub fn recompute<I>(&mut self, scores: I) -> LeaderUpdate<K>
    where
        I: IntoIterator<Item = (K, u32)>,
    {
        let top = LeaderState::from_scores(scores);

        if top.is_empty() {
            if !self.state.is_empty() {
                tracing::info!(target: LOG_TARGET, "leaders cleared");
            }
            self.state = top;
            return LeaderUpdate::new(&self.state, LeaderChange::Cleared);
        }

        let change = if self.state.is_empty() {
            LeaderChange::FirstScore
        } else if top.score > self.state.score {
            LeaderChange::NewHigh
        } else if top.score < self.state.score {
            if top.leaders == self.state.leaders {
                LeaderChange::Lowered
            } else {
                LeaderChange::Handover
            }
        } else if top.leaders.iter().any(|k| !self.state.leaders.contains(k)) {
            LeaderChange::TieJoined
        } else if top.leaders != self.state.leaders {
            LeaderChange::TieNarrowed
        } else {
            LeaderChange::Unchanged
        };

        if change != LeaderChange::Unchanged {
            tracing::info!(
                target: LOG_TARGET,
                ?change,
                leaders = ?top.leaders,
                score = top.score,
                "leader state changed"
            );
        }

        self.state = top;
        LeaderUpdate::new(&self.state, change)
    }
}
