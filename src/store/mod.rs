//! Roster storage.
//!
//! ## Key Types
//!
//! - `PlayerStore`: Ordered roster with increment/decrement/rename/reset
//! - `PlayerRepository`: Persistence seam the host implements
//! - `MemoryRepository`: In-process repository, serializable as JSON

pub mod repository;
pub mod roster;

pub use repository::{MemoryRepository, PlayerField, PlayerRepository};
pub use roster::PlayerStore;
