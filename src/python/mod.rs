//! Python bindings for the memorize engine.
//!
//! # Quick Start
//!
//! ```python
//! import memorize
//!
//! game = memorize.MemoryGame(levels=[2, 4], seed=42)
//! game.set_user_id("alice")
//!
//! card_id = game.cards()[0][0]
//! game.choose(card_id)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// memorize: a pair-matching memory game engine.
#[pymodule]
fn memorize(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;
    Ok(())
}
