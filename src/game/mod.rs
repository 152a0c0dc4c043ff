//! The game engine: selection protocol, scoring, levels, and leaderboard
//! recording.
//!
//! ## Key Types
//!
//! - `MemoryGame`: The engine, generic over content and storage
//! - `ChooseOutcome`: What a single card choice did
//! - `GameSnapshot` / `CardView`: Read-only views for rendering
//! - `emoji_game`: A `String` game over the vehicle emoji theme

pub mod emoji;
pub mod engine;
pub mod snapshot;

pub use emoji::{emoji_game, EmojiMemoryGame};
pub use engine::{ChooseOutcome, MemoryGame};
pub use snapshot::{CardView, GameSnapshot};
