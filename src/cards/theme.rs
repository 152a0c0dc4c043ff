//! Emoji content themes.

use super::deck::ContentSource;

/// Vehicle emoji, one per pair. Large enough for the default ladder.
pub const VEHICLES: [&str; 28] = [
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎", "🚓", "🚑", "🚒", "🚐", "🛻", "🚚", "🚛", "🚜",
    "✈️", "🛩", "🚀", "🚁", "🚆", "🚲", "🦽", "🛴", "🛥", "⛵️", "🚤", "🛶", "🛸", "⛴",
];

/// A fixed list of emoji used as pair content.
#[derive(Clone, Copy, Debug)]
pub struct EmojiTheme {
    emojis: &'static [&'static str],
}

impl EmojiTheme {
    #[must_use]
    pub const fn new(emojis: &'static [&'static str]) -> Self {
        Self { emojis }
    }

    #[must_use]
    pub const fn vehicles() -> Self {
        Self::new(&VEHICLES)
    }

    /// How many distinct pairs the theme can fill.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

impl ContentSource<String> for EmojiTheme {
    /// Indices past `len()` wrap around and repeat emoji. `MemoryGame::new`
    /// refuses ladders that would reach them.
    fn content_at(&self, pair_index: usize) -> String {
        if self.emojis.is_empty() {
            return String::new();
        }
        self.emojis[pair_index % self.emojis.len()].to_string()
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.emojis.len())
    }
}
