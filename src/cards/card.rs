//! A single playing tile and its bonus clock.
//!
//! Each card carries a fixed bonus time budget. The budget drains only
//! while the card is face up and unmatched; flipping it down or matching
//! it folds the running interval into `past_face_up_time` and stops the
//! drain. All timing reads are pure functions of `now`.
//!
//! ```
//! use std::time::Duration;
//! use memorize::cards::{Card, CardId};
//! use memorize::core::Timestamp;
//!
//! let mut card = Card::new(CardId::new(0), "A", Duration::from_secs(6));
//! card.flip_up(Timestamp::from_secs(0));
//!
//! assert!(card.is_consuming_bonus(Timestamp::from_secs(3)));
//! assert_eq!(card.remaining_bonus_fraction(Timestamp::from_secs(3)), 0.5);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::clock::Timestamp;

/// Card identifier, unique within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in the current deck.
///
/// Two cards with equal `content` form a pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    bonus_time_limit: Duration,
    /// Face-up time consumed by intervals that have already closed.
    past_face_up_time: Duration,
    /// Start of the open face-up interval, if the bonus is draining.
    last_face_up: Option<Timestamp>,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card with a full bonus clock.
    #[must_use]
    pub fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus_time_limit,
            past_face_up_time: Duration::ZERO,
            last_face_up: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Face up and still waiting for a partner.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_face_up && !self.is_matched
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Start of the running face-up interval, if any.
    #[must_use]
    pub fn face_up_since(&self) -> Option<Timestamp> {
        self.last_face_up
    }

    /// Total face-up time counted against the bonus at `now`.
    #[must_use]
    pub fn elapsed_face_up_time(&self, now: Timestamp) -> Duration {
        match self.last_face_up {
            Some(since) => self.past_face_up_time + now.saturating_duration_since(since),
            None => self.past_face_up_time,
        }
    }

    /// Bonus time left at `now`, never negative.
    #[must_use]
    pub fn remaining_bonus_time(&self, now: Timestamp) -> Duration {
        self.bonus_time_limit
            .saturating_sub(self.elapsed_face_up_time(now))
    }

    /// Remaining bonus as a fraction of the limit, in `[0, 1]`.
    ///
    /// Zero when the limit itself is zero.
    #[must_use]
    pub fn remaining_bonus_fraction(&self, now: Timestamp) -> f64 {
        let remaining = self.remaining_bonus_time(now);
        if remaining.is_zero() || self.bonus_time_limit.is_zero() {
            return 0.0;
        }
        remaining.as_secs_f64() / self.bonus_time_limit.as_secs_f64()
    }

    /// Whether the bonus is draining at `now`.
    #[must_use]
    pub fn is_consuming_bonus(&self, now: Timestamp) -> bool {
        self.is_open() && !self.remaining_bonus_time(now).is_zero()
    }

    /// Turn the card face up, starting a bonus interval if one applies.
    pub fn flip_up(&mut self, now: Timestamp) {
        self.is_face_up = true;
        if self.last_face_up.is_none() && self.is_consuming_bonus(now) {
            self.last_face_up = Some(now);
        }
    }

    /// Turn the card face down, closing any bonus interval.
    pub fn flip_down(&mut self, now: Timestamp) {
        self.is_face_up = false;
        self.stop_bonus(now);
    }

    /// Mark the card matched. Its bonus never drains again.
    pub fn mark_matched(&mut self, now: Timestamp) {
        self.is_matched = true;
        self.stop_bonus(now);
    }

    fn stop_bonus(&mut self, now: Timestamp) {
        self.past_face_up_time = self.elapsed_face_up_time(now);
        self.last_face_up = None;
    }
}
