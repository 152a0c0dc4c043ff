//! Read-only views for the presentation layer.
//!
//! A `GameSnapshot` is taken at a single instant. The deck is an
//! `im::Vector`, so capturing it is O(1) and later engine mutations do not
//! show through.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::clock::Timestamp;

/// Engine state captured at `taken_at`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot<C: Clone> {
    pub taken_at: Timestamp,
    pub cards: Vector<Card<C>>,
    /// 0-based ladder position.
    pub level: usize,
    /// 1-based level for display.
    pub display_level: usize,
    pub points: u32,
    pub level_done: bool,
    pub done: bool,
    pub user_id: String,
}

/// What a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    pub remaining_bonus_fraction: f64,
    pub is_consuming_bonus: bool,
}

impl<C: Clone> GameSnapshot<C> {
    /// Per-card views, with bonus values read at `taken_at`.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView<C>> {
        self.cards
            .iter()
            .map(|card| CardView {
                id: card.id(),
                content: card.content().clone(),
                is_face_up: card.is_face_up(),
                is_matched: card.is_matched(),
                remaining_bonus_fraction: card.remaining_bonus_fraction(self.taken_at),
                is_consuming_bonus: card.is_consuming_bonus(self.taken_at),
            })
            .collect()
    }
}
