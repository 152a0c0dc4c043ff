//! Game configuration.
//!
//! `GameConfig` fixes everything the engine treats as a constant during
//! play: the level ladder, bonus timing, leaderboard presentation, and the
//! storage keys it persists under.
//!
//! ```
//! use memorize::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_levels(vec![2, 4])
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.total_levels(), 2);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MemorizeError, Result};

/// Default level ladder (pairs per level).
pub const DEFAULT_LEVELS: [usize; 4] = [4, 10, 15, 28];

/// Largest accepted `max_bonus_points`.
pub const MAX_BONUS_POINTS_LIMIT: u32 = (u32::MAX - 1) / 2;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pair count for each level, in play order.
    pub levels: Vec<usize>,

    /// Face-up time each card may spend before its bonus runs out.
    pub bonus_time_limit_secs: f64,

    /// Bonus points a single card is worth with a full bonus clock.
    pub max_bonus_points: u32,

    /// Number of entries the standings view returns.
    pub leaderboard_size: usize,

    /// Store key holding the active player identity.
    pub user_id_key: String,

    /// Store key holding the encoded leaderboard.
    pub ranks_key: String,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS.to_vec(),
            bonus_time_limit_secs: 6.0,
            max_bonus_points: 10,
            leaderboard_size: 10,
            user_id_key: "userId".to_string(),
            ranks_key: "ranks".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns [`MemorizeError::Config`] if the TOML is malformed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| MemorizeError::Config(e.to_string()))
    }

    /// Set the level ladder.
    #[must_use]
    pub fn with_levels(mut self, levels: Vec<usize>) -> Self {
        self.levels = levels;
        self
    }

    /// Set the per-card bonus time limit.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit_secs = limit.as_secs_f64();
        self
    }

    /// Set the maximum bonus points per card.
    #[must_use]
    pub fn with_max_bonus_points(mut self, points: u32) -> Self {
        self.max_bonus_points = points;
        self
    }

    /// Set how many standings the leaderboard view returns.
    #[must_use]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of levels in the ladder.
    #[must_use]
    pub fn total_levels(&self) -> usize {
        self.levels.len()
    }

    /// Largest pair count any level needs.
    #[must_use]
    pub fn max_pairs(&self) -> usize {
        self.levels.iter().copied().max().unwrap_or(0)
    }

    /// Bonus time limit as a `Duration`.
    ///
    /// Only meaningful on a validated config; an unrepresentable limit
    /// reads as zero.
    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.bonus_time_limit_secs).unwrap_or(Duration::ZERO)
    }

    /// Check the configuration is playable.
    ///
    /// # Errors
    /// Returns [`MemorizeError::Config`] for an empty ladder, a level with
    /// no pairs, a bonus limit that does not fit a `Duration`, or a
    /// per-match maximum that could overflow the score.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(MemorizeError::Config("level ladder is empty".to_string()));
        }
        if let Some(index) = self.levels.iter().position(|&pairs| pairs == 0) {
            return Err(MemorizeError::Config(format!("level {index} has no pairs")));
        }
        if Duration::try_from_secs_f64(self.bonus_time_limit_secs).is_err() {
            return Err(MemorizeError::Config(format!(
                "invalid bonus time limit: {}",
                self.bonus_time_limit_secs
            )));
        }
        // A match pays at most 2 * max + 1
        if self.max_bonus_points > MAX_BONUS_POINTS_LIMIT {
            return Err(MemorizeError::Config(format!(
                "max bonus points {} exceeds {MAX_BONUS_POINTS_LIMIT}",
                self.max_bonus_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.levels, vec![4, 10, 15, 28]);
        assert_eq!(config.bonus_time_limit(), Duration::from_secs(6));
        assert_eq!(config.max_bonus_points, 10);
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.user_id_key, "userId");
        assert_eq!(config.ranks_key, "ranks");
        assert_eq!(config.max_pairs(), 28);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_levels(vec![1, 2])
            .with_bonus_time_limit(Duration::from_millis(2500))
            .with_max_bonus_points(5)
            .with_leaderboard_size(3)
            .with_seed(99);

        assert_eq!(config.total_levels(), 2);
        assert_eq!(config.bonus_time_limit(), Duration::from_millis(2500));
        assert_eq!(config.max_bonus_points, 5);
        assert_eq!(config.leaderboard_size, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_empty_ladder() {
        let config = GameConfig::default().with_levels(vec![]);
        assert!(matches!(config.validate(), Err(MemorizeError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_pair_level() {
        let config = GameConfig::default().with_levels(vec![2, 0]);
        assert!(matches!(config.validate(), Err(MemorizeError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_bonus_limit() {
        let mut config = GameConfig::default();
        config.bonus_time_limit_secs = -1.0;
        assert!(config.validate().is_err());

        config.bonus_time_limit_secs = f64::NAN;
        assert!(config.validate().is_err());

        config.bonus_time_limit_secs = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_bonus_limit() {
        let mut config = GameConfig::default();
        config.bonus_time_limit_secs = 1e30;
        assert!(matches!(config.validate(), Err(MemorizeError::Config(_))));
        assert_eq!(config.bonus_time_limit(), Duration::ZERO);

        config.bonus_time_limit_secs = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_max_bonus_points() {
        let config = GameConfig::default().with_max_bonus_points(MAX_BONUS_POINTS_LIMIT);
        assert!(config.validate().is_ok());
        assert_eq!(
            MAX_BONUS_POINTS_LIMIT.checked_mul(2).and_then(|p| p.checked_add(1)),
            Some(u32::MAX)
        );

        let config = GameConfig::default().with_max_bonus_points(u32::MAX);
        assert!(matches!(config.validate(), Err(MemorizeError::Config(_))));
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml(
            r#"
            levels = [2, 3]
            bonus_time_limit_secs = 4.5
            seed = 11
            "#,
        )
        .unwrap();

        assert_eq!(config.levels, vec![2, 3]);
        assert_eq!(config.bonus_time_limit_secs, 4.5);
        assert_eq!(config.seed, Some(11));
        // Unspecified keys fall back to defaults
        assert_eq!(config.max_bonus_points, 10);
        assert_eq!(config.ranks_key, "ranks");
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = GameConfig::from_toml("levels = \"four\"");
        assert!(matches!(result, Err(MemorizeError::Config(_))));
    }

    #[test]
    fn test_serde() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
