//! The memory game engine.
//!
//! `MemoryGame` owns the deck, the score, the level ladder position, and
//! the leaderboard. Callers mutate it through four entry points
//! (`choose`, `next_level`, `reset`, `set_user_id`) and read everything
//! else through accessors or a [`GameSnapshot`].
//!
//! ## Selection Protocol
//!
//! The *open set* is every card that is face up and not matched.
//!
//! - Choosing a card while exactly one other card is open compares the
//!   two. Equal content matches both and scores; unequal content leaves
//!   both face up so the player can see the pair.
//! - Choosing a card in any other situation (nothing open, or a shown
//!   mismatch) turns every open card face down and opens the chosen one.
//!   Matched cards are never turned down.
//!
//! Choosing an unknown, face-up, or matched card does nothing.
//!
//! ## Example
//!
//! ```
//! use memorize::cards::CardId;
//! use memorize::core::{GameConfig, ManualClock, Timestamp};
//! use memorize::game::{ChooseOutcome, MemoryGame};
//! use memorize::storage::MemoryStore;
//!
//! let config = GameConfig::default().with_levels(vec![1]);
//! let mut game: MemoryGame<char, MemoryStore> =
//!     MemoryGame::new(config, |_: usize| 'A', MemoryStore::new(), ManualClock::new())?;
//!
//! let now = Timestamp::from_secs(0);
//! assert_eq!(game.choose_at(CardId::new(0), now), ChooseOutcome::Opened);
//! assert!(matches!(game.choose_at(CardId::new(1), now), ChooseOutcome::Matched { .. }));
//! assert!(game.done());
//! # Ok::<(), memorize::core::MemorizeError>(())
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardId, ContentSource, DeckGenerator};
use crate::core::clock::{Clock, Timestamp};
use crate::core::config::GameConfig;
use crate::core::error::{MemorizeError, Result};
use crate::core::rng::GameRng;
use crate::ranks::{Leaderboard, Rank, Standing};
use crate::storage::KeyValueStore;

/// Result of a single `choose` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown, face-up, or matched card. Nothing changed.
    Ignored,
    /// The chosen card is now the only open card.
    Opened,
    /// The chosen card matched the open card.
    Matched {
        /// Points added by this match.
        points: u32,
    },
    /// The chosen card did not match; both stay face up.
    Mismatched,
}

/// Pair-matching game over content `C`, persisting through store `S`.
pub struct MemoryGame<C, S> {
    config: GameConfig,
    cards: Vector<Card<C>>,
    level: usize,
    level_done: bool,
    points: u32,
    user_id: String,
    leaderboard: Leaderboard,
    deck: DeckGenerator,
    content: Box<dyn ContentSource<C>>,
    store: S,
    clock: Box<dyn Clock>,
}

impl<C: std::fmt::Debug + Clone, S> std::fmt::Debug for MemoryGame<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("level", &self.level)
            .field("level_done", &self.level_done)
            .field("points", &self.points)
            .field("user_id", &self.user_id)
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

impl<C, S> MemoryGame<C, S>
where
    C: Clone + PartialEq,
    S: KeyValueStore,
{
    /// Create a game and deal the first level.
    ///
    /// The leaderboard and player identity are read from `store`; unreadable
    /// values start out empty.
    ///
    /// # Errors
    /// Returns [`MemorizeError::Config`](crate::core::MemorizeError::Config)
    /// if `config` fails validation, or if a level needs more pairs than
    /// `content` can fill.
    pub fn new(
        config: GameConfig,
        content: impl ContentSource<C> + 'static,
        store: S,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        config.validate()?;
        if let Some(capacity) = content.capacity() {
            if config.max_pairs() > capacity {
                return Err(MemorizeError::Config(format!(
                    "a level needs {} pairs but the content source has {capacity}",
                    config.max_pairs()
                )));
            }
        }

        let leaderboard = Leaderboard::load(&store, &config.ranks_key);
        let user_id = match store.load_string(&config.user_id_key) {
            Ok(user_id) => user_id.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "Player identity unreadable, starting anonymous");
                String::new()
            }
        };
        let deck = DeckGenerator::new(
            GameRng::from_seed_option(config.seed),
            config.bonus_time_limit(),
        );

        let mut game = Self {
            config,
            cards: Vector::new(),
            level: 0,
            level_done: false,
            points: 0,
            user_id,
            leaderboard,
            deck,
            content: Box::new(content),
            store,
            clock: Box::new(clock),
        };
        game.next_level();
        Ok(game)
    }

    // === Mutations ===

    /// Choose a card at the injected clock's current time.
    pub fn choose(&mut self, card_id: CardId) -> ChooseOutcome {
        let now = self.clock.now();
        self.choose_at(card_id, now)
    }

    /// Choose a card at an explicit time.
    pub fn choose_at(&mut self, card_id: CardId, now: Timestamp) -> ChooseOutcome {
        let Some(chosen) = self.position_of(card_id) else {
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            return ChooseOutcome::Ignored;
        }

        let open: SmallVec<[usize; 2]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_open())
            .map(|(i, _)| i)
            .collect();

        let outcome = match open.as_slice() {
            &[pending] => {
                let outcome = if self.cards[pending].content() == self.cards[chosen].content() {
                    let points = self
                        .bonus_points(pending, now)
                        .saturating_add(self.bonus_points(chosen, now))
                        .saturating_add(1);
                    self.cards[pending].mark_matched(now);
                    self.cards[chosen].mark_matched(now);
                    self.points = self.points.saturating_add(points);
                    debug!(card = %card_id, points, total = self.points, "Match");
                    ChooseOutcome::Matched { points }
                } else {
                    debug!(card = %card_id, "Mismatch");
                    ChooseOutcome::Mismatched
                };
                self.cards[chosen].flip_up(now);
                outcome
            }
            _ => {
                for &i in &open {
                    self.cards[i].flip_down(now);
                }
                self.cards[chosen].flip_up(now);
                debug!(card = %card_id, hidden = open.len(), "Opened");
                ChooseOutcome::Opened
            }
        };

        if self.cards.iter().all(Card::is_matched) {
            self.level_done = true;
            self.level += 1;
            info!(level = self.level, points = self.points, "Level cleared");

            if self.done() {
                info!(points = self.points, "Ladder complete");
                self.record_score();
            }
        }

        outcome
    }

    /// Deal the current level's deck.
    ///
    /// Records the score so far. Once the ladder is exhausted this starts
    /// over from the first level, like [`reset`](Self::reset).
    pub fn next_level(&mut self) {
        if self.done() {
            self.reset();
            return;
        }

        self.record_score();
        self.level_done = false;

        let pairs = self.config.levels[self.level];
        self.cards = Vector::from(self.deck.generate(pairs, &*self.content));
        info!(level = self.level + 1, pairs, "Level dealt");
    }

    /// Back to the first level with zero points.
    pub fn reset(&mut self) {
        self.level = 0;
        self.points = 0;
        info!("Game reset");
        self.next_level();
    }

    /// Set the active player, trimming surrounding whitespace.
    ///
    /// An empty result disables score recording. The identity is saved to
    /// the store; a failed save is logged and otherwise ignored.
    pub fn set_user_id(&mut self, name: &str) {
        self.user_id = name.trim().to_string();
        if let Err(err) = self.store.save_string(&self.config.user_id_key, &self.user_id) {
            warn!(error = %err, "Failed to persist player identity");
        }
    }

    // === Read-only views ===

    /// Current deck, in dealt order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id() == card_id)
    }

    /// The single open card, if exactly one card is face up and unmatched.
    #[must_use]
    pub fn open_card_id(&self) -> Option<CardId> {
        let mut open = self.cards.iter().filter(|card| card.is_open());
        match (open.next(), open.next()) {
            (Some(card), None) => Some(card.id()),
            _ => None,
        }
    }

    /// 0-based ladder position; equals the ladder length once done.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// 1-based level for display; stays at the ladder length once done.
    #[must_use]
    pub fn display_level(&self) -> usize {
        if self.done() {
            self.level
        } else {
            self.level + 1
        }
    }

    #[must_use]
    pub fn level_done(&self) -> bool {
        self.level_done
    }

    /// Whether every level of the ladder has been cleared.
    #[must_use]
    pub fn done(&self) -> bool {
        self.level >= self.config.levels.len()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// All leaderboard entries, best first.
    #[must_use]
    pub fn ranks(&self) -> Vec<Rank> {
        self.leaderboard.ranked()
    }

    /// Top entries, as many as the configured leaderboard size.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.leaderboard.standings(self.config.leaderboard_size)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current time on the injected clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Capture the read-only view at the current time.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        self.snapshot_at(self.clock.now())
    }

    /// Capture the read-only view at `now`.
    #[must_use]
    pub fn snapshot_at(&self, now: Timestamp) -> GameSnapshot<C> {
        GameSnapshot {
            taken_at: now,
            cards: self.cards.clone(),
            level: self.level,
            display_level: self.display_level(),
            points: self.points,
            level_done: self.level_done,
            done: self.done(),
            user_id: self.user_id.clone(),
        }
    }

    // === Internals ===

    fn position_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == card_id)
    }

    fn bonus_points(&self, index: usize, now: Timestamp) -> u32 {
        let fraction = self.cards[index].remaining_bonus_fraction(now);
        (fraction * f64::from(self.config.max_bonus_points)).ceil() as u32
    }

    /// Upsert the current score and persist the leaderboard.
    fn record_score(&mut self) {
        let outcome = self.leaderboard.record_score(&self.user_id, self.points);
        if !outcome.is_recorded() {
            return;
        }

        info!(user = %self.user_id, points = self.points, ?outcome, "Score recorded");
        if let Err(err) = self.leaderboard.save(&mut self.store, &self.config.ranks_key) {
            warn!(error = %err, "Failed to persist leaderboard");
        }
    }
}
