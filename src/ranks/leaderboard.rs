//! Cross-session leaderboard.
//!
//! Maps player id to the best score that player ever recorded. Entries
//! keep their insertion order; the ranked view sorts by points descending
//! with a stable sort, so equal scores stay in insertion order.
//!
//! ```
//! use memorize::ranks::{Leaderboard, RecordOutcome};
//!
//! let mut board = Leaderboard::new();
//! assert_eq!(board.record_score("alice", 50), RecordOutcome::Inserted);
//! assert_eq!(board.record_score("alice", 30), RecordOutcome::Kept);
//! assert_eq!(board.get("alice"), Some(50));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::codec;
use crate::core::error::Result;
use crate::storage::KeyValueStore;

/// A player's best score.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank {
    pub id: String,
    pub points: u32,
}

impl Rank {
    #[must_use]
    pub fn new(id: impl Into<String>, points: u32) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }
}

/// One row of the ranked view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position.
    pub place: usize,
    pub id: String,
    pub points: u32,
}

/// What `record_score` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Empty id; nothing recorded.
    Ignored,
    /// First score for this id.
    Inserted,
    /// Existing entry raised to a new best.
    Raised,
    /// Existing entry already at least this high.
    Kept,
}

impl RecordOutcome {
    /// Whether an entry was inserted or touched.
    #[must_use]
    pub fn is_recorded(self) -> bool {
        self != RecordOutcome::Ignored
    }
}

/// Best score per player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    /// Insertion order.
    entries: Vec<Rank>,
    /// id -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ranks. Duplicate ids collapse onto their first
    /// position, keeping the highest score.
    #[must_use]
    pub fn from_ranks(ranks: Vec<Rank>) -> Self {
        let mut board = Self::new();
        for rank in ranks {
            board.record_score(&rank.id, rank.points);
        }
        board
    }

    /// Load from `store`, treating missing or unreadable data as empty.
    #[must_use]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        let bytes = match store.load_bytes(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Self::new(),
            Err(err) => {
                warn!(key, error = %err, "Leaderboard unreadable, starting empty");
                return Self::new();
            }
        };

        match codec::decode(&bytes) {
            Ok(ranks) => {
                let board = Self::from_ranks(ranks);
                info!(key, entries = board.len(), "Leaderboard loaded");
                board
            }
            Err(err) => {
                warn!(key, error = %err, "Leaderboard corrupt, starting empty");
                Self::new()
            }
        }
    }

    /// Write the full leaderboard to `store`.
    ///
    /// # Errors
    /// Returns a storage or codec error; the in-memory board is unaffected.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, key: &str) -> Result<()> {
        let bytes = codec::encode(&self.entries)?;
        store.save_bytes(key, &bytes)
    }

    /// Upsert `points` for `user_id`, keeping the higher score.
    pub fn record_score(&mut self, user_id: &str, points: u32) -> RecordOutcome {
        if user_id.is_empty() {
            return RecordOutcome::Ignored;
        }

        match self.index.get(user_id) {
            Some(&position) => {
                let rank = &mut self.entries[position];
                if points > rank.points {
                    rank.points = points;
                    RecordOutcome::Raised
                } else {
                    RecordOutcome::Kept
                }
            }
            None => {
                self.index.insert(user_id.to_string(), self.entries.len());
                self.entries.push(Rank::new(user_id, points));
                RecordOutcome::Inserted
            }
        }
    }

    /// Best score for `user_id`.
    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<u32> {
        self.index.get(user_id).map(|&i| self.entries[i].points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Rank] {
        &self.entries
    }

    /// Entries by points descending; ties keep insertion order.
    #[must_use]
    pub fn ranked(&self) -> Vec<Rank> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }

    /// The top `limit` entries with their places.
    #[must_use]
    pub fn standings(&self, limit: usize) -> Vec<Standing> {
        self.ranked()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, rank)| Standing {
                place: i + 1,
                id: rank.id,
                points: rank.points,
            })
            .collect()
    }
}
