//! Card system: cards, deck generation, and content themes.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card within one deck
//! - `Card`: Face-up/matched state plus the per-card bonus clock
//! - `ContentSource`: Maps a pair index to its content token
//! - `DeckGenerator`: Builds shuffled decks of pairs
//! - `EmojiTheme`: Ready-made emoji content

pub mod card;
pub mod deck;
pub mod theme;

pub use card::{Card, CardId};
pub use deck::{ContentSource, DeckGenerator};
pub use theme::{EmojiTheme, VEHICLES};
