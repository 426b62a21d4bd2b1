//! Scoreboard: the composition the presentation layer drives.
//!
//! A gesture maps to one call (`increment`, `decrement`, `rename`, ...).
//! Score-changing calls return a `LeaderUpdate`; when its `celebrate` flag
//! is set the caller starts a celebration lasting `celebration()`.

mod board;

pub use board::{Headline, Scoreboard};
