//! Persisted leaderboard: best score per player across sessions.

pub mod codec;
pub mod leaderboard;

pub use leaderboard::{Leaderboard, Rank, RecordOutcome, Standing};
