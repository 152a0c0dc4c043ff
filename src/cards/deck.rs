//! Deck generation.
//!
//! A deck of `n` pairs holds cards `0..2n`: pair `i` is cards `2i` and
//! `2i + 1`, both carrying `content_at(i)`. The deck is shuffled before it
//! is handed to the engine, so callers must not rely on card order.

use std::time::Duration;

use super::card::{Card, CardId};
use crate::core::rng::GameRng;

/// Supplies the content token for each pair index.
///
/// Implemented for any `Fn(usize) -> C`, so a closure is usually enough:
///
/// ```
/// use memorize::cards::ContentSource;
///
/// let letters = |i: usize| (b'A' + i as u8) as char;
/// assert_eq!(letters.content_at(2), 'C');
/// ```
pub trait ContentSource<C> {
    /// Content for pair `pair_index`. Distinct indices must yield distinct content.
    fn content_at(&self, pair_index: usize) -> C;

    /// How many pairs this source can fill with distinct content, if bounded.
    fn capacity(&self) -> Option<usize> {
        None
    }
}

impl<C, F> ContentSource<C> for F
where
    F: Fn(usize) -> C,
{
    fn content_at(&self, pair_index: usize) -> C {
        self(pair_index)
    }
}

/// Builds shuffled decks of paired cards.
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    rng: GameRng,
    bonus_time_limit: Duration,
}

impl DeckGenerator {
    /// Create a generator that shuffles with `rng` and gives every card
    /// `bonus_time_limit`.
    #[must_use]
    pub fn new(rng: GameRng, bonus_time_limit: Duration) -> Self {
        Self {
            rng,
            bonus_time_limit,
        }
    }

    /// Generate `2 * pair_count` face-down cards in random order.
    pub fn generate<C, S>(&mut self, pair_count: usize, source: &S) -> Vec<Card<C>>
    where
        C: Clone,
        S: ContentSource<C> + ?Sized,
    {
        let mut cards = Vec::with_capacity(pair_count * 2);

        for pair_index in 0..pair_count {
            let content = source.content_at(pair_index);
            let first = CardId::new((pair_index * 2) as u32);
            let second = CardId::new((pair_index * 2 + 1) as u32);
            cards.push(Card::new(first, content.clone(), self.bonus_time_limit));
            cards.push(Card::new(second, content, self.bonus_time_limit));
        }

        self.rng.shuffle(&mut cards);
        cards
    }
}
