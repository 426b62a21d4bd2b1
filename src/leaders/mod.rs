//! Leader tracking.
//!
//! Leaders are derived purely from the current scores; the only history kept
//! is the previous leader set, which decides whether a change is worth
//! celebrating. Callers invoke `LeaderTracker::recompute` explicitly after
//! each mutation (or batch of mutations).

pub mod tracker;

pub use tracker::{LeaderChange, LeaderState, LeaderTracker, LeaderUpdate};
