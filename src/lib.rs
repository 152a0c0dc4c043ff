//! # memorize
//!
//! A pair-matching memory card game engine.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: Cards carry any `Clone + PartialEq` token.
//!    Games supply content through a `ContentSource`.
//!
//! 2. **Injected Time**: Bonus decay is computed from stored timestamps
//!    against a caller-supplied clock, never a global one.
//!
//! 3. **Injected Storage**: The leaderboard and player identity persist
//!    through a `KeyValueStore` handed to the engine at construction.
//!
//! ## Architecture
//!
//! - **Single Writer**: The engine is owned and mutated by one controller.
//!   Every call completes synchronously; there is no internal locking.
//!
//! - **Persistent Data Structures**: The deck is an `im::Vector`, so
//!   snapshots for rendering are O(1).
//!
//! ## Modules
//!
//! - `core`: Clock, RNG, configuration, errors
//! - `cards`: Cards, bonus clock, deck generation, emoji themes
//! - `storage`: Key-value persistence port
//! - `ranks`: Leaderboard and its wire format
//! - `game`: The engine and its read-only views

pub mod core;
pub mod cards;
pub mod storage;
pub mod ranks;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock, Timestamp,
    GameRng, GameConfig,
    MemorizeError, Result,
};

pub use crate::cards::{Card, CardId, ContentSource, DeckGenerator, EmojiTheme};

pub use crate::storage::{KeyValueStore, MemoryStore};

pub use crate::ranks::{Leaderboard, Rank, RecordOutcome, Standing};

pub use crate::game::{
    emoji_game, EmojiMemoryGame,
    ChooseOutcome, MemoryGame,
    CardView, GameSnapshot,
};
