//! Core engine types: clock, RNG, configuration, errors.
//!
//! These are the building blocks the card, leaderboard, and game modules
//! share. Nothing in here knows about cards or scores.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{GameConfig, DEFAULT_LEVELS, MAX_BONUS_POINTS_LIMIT};
pub use error::{MemorizeError, Result};
pub use rng::GameRng;
