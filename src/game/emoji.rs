//! Ready-to-play emoji game.

use super::engine::MemoryGame;
use crate::cards::EmojiTheme;
use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::storage::KeyValueStore;

/// A memory game over emoji strings.
pub type EmojiMemoryGame<S> = MemoryGame<String, S>;

/// Create a game over the vehicle emoji theme.
///
/// # Errors
/// Returns [`MemorizeError::Config`] if a level needs more pairs than the
/// theme has emoji, or if `config` is otherwise invalid.
pub fn emoji_game<S: KeyValueStore>(
    config: GameConfig,
    store: S,
    clock: impl Clock + 'static,
) -> Result<EmojiMemoryGame<S>> {
    MemoryGame::new(config, EmojiTheme::vehicles(), store, clock)
}
