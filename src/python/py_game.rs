//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CardId;
use crate::core::{GameConfig, SystemClock};
use crate::game::{emoji_game, CardView, ChooseOutcome, EmojiMemoryGame};
use crate::storage::MemoryStore;

/// Card tuple handed to Python.
type CardRow = (u32, String, bool, bool, f64, bool);

fn card_row(view: CardView<String>) -> CardRow {
    (
        view.id.raw(),
        view.content,
        view.is_face_up,
        view.is_matched,
        view.remaining_bonus_fraction,
        view.is_consuming_bonus,
    )
}

/// Python wrapper for an emoji memory game.
///
/// Uses the wall clock and an in-memory store, so the leaderboard lives as
/// long as the object.
#[pyclass(name = "MemoryGame", unsendable)]
pub struct PyMemoryGame {
    game: EmojiMemoryGame<MemoryStore>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - levels: Pair count per level (default ladder if omitted)
    /// - seed: RNG seed for deterministic shuffles
    #[new]
    #[pyo3(signature = (levels = None, seed = None))]
    fn new(levels: Option<Vec<usize>>, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::default();
        if let Some(levels) = levels {
            config = config.with_levels(levels);
        }
        config.seed = seed;

        let game = emoji_game(config, MemoryStore::new(), SystemClock::new())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    /// Choose a card by id.
    ///
    /// Returns "ignored", "opened", "matched", or "mismatched".
    fn choose(&mut self, card_id: u32) -> &'static str {
        match self.game.choose(CardId::new(card_id)) {
            ChooseOutcome::Ignored => "ignored",
            ChooseOutcome::Opened => "opened",
            ChooseOutcome::Matched { .. } => "matched",
            ChooseOutcome::Mismatched => "mismatched",
        }
    }

    /// Deal the next level (or start over once the ladder is done).
    fn next_level(&mut self) {
        self.game.next_level();
    }

    /// Start over from the first level.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Set the active player name.
    fn set_user_id(&mut self, name: &str) {
        self.game.set_user_id(name);
    }

    /// Cards as (id, content, face_up, matched, bonus_fraction,
    /// consuming_bonus) tuples.
    fn cards(&self) -> Vec<CardRow> {
        self.game.snapshot().card_views().into_iter().map(card_row).collect()
    }

    /// Leaderboard as (place, id, points) tuples.
    fn standings(&self) -> Vec<(usize, String, u32)> {
        self.game
            .standings()
            .into_iter()
            .map(|s| (s.place, s.id, s.points))
            .collect()
    }

    /// 1-based level for display.
    #[getter]
    fn level(&self) -> usize {
        self.game.display_level()
    }

    #[getter]
    fn points(&self) -> u32 {
        self.game.points()
    }

    #[getter]
    fn level_done(&self) -> bool {
        self.game.level_done()
    }

    #[getter]
    fn done(&self) -> bool {
        self.game.done()
    }

    #[getter]
    fn user_id(&self) -> String {
        self.game.user_id().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(level={}, points={}, done={})",
            self.game.display_level(),
            self.game.points(),
            self.game.done()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, Timestamp};

    #[test]
    fn test_card_row_reports_bonus_clock() {
        let config = GameConfig::default().with_seed(5);
        let mut game = emoji_game(config, MemoryStore::new(), ManualClock::new()).unwrap();
        let first = game.cards()[0].id();
        game.choose_at(first, Timestamp::ZERO);

        let rows: Vec<CardRow> = game
            .snapshot_at(Timestamp::from_secs(3))
            .card_views()
            .into_iter()
            .map(card_row)
            .collect();
        let open = rows.iter().find(|row| row.0 == first.raw()).unwrap();
        assert!(open.2);
        assert!((open.4 - 0.5).abs() < 1e-9);
        assert!(open.5);
        assert!(rows.iter().filter(|row| row.0 != first.raw()).all(|row| !row.5));
    }
}
