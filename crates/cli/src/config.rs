//! Configuration for the command-line driver.
//!
//! Values come from an optional TOML file (`--config` or `CONNECT4_CONFIG`)
//! with `[mcts]` and `[arena]` tables. Command-line flags take priority over
//! the file, and built-in defaults fill everything else.

use std::path::Path;

use connect4_mcts::{MctsConfig, RolloutPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings for `connect4 match`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    /// Number of games to play
    pub games: u32,
    /// Seed for the random opponent; entropy when absent
    pub opponent_seed: Option<u64>,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            games: 10,
            opponent_seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub mcts: MctsConfig,
    pub arena: ArenaSettings,
}

/// Search flags shared by every subcommand. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct SearchOverrides {
    pub iterations: Option<u32>,
    pub exploration_constant: Option<f64>,
    pub seed: Option<u64>,
    pub adopt_wins: bool,
}

impl FileConfig {
    pub fn apply_search_overrides(&mut self, overrides: &SearchOverrides) {
        if let Some(iterations) = overrides.iterations {
            self.mcts.num_iterations = iterations;
        }
        if let Some(c) = overrides.exploration_constant {
            self.mcts.exploration_constant = c;
        }
        if let Some(seed) = overrides.seed {
            self.mcts.seed = Some(seed);
        }
        if overrides.adopt_wins {
            self.mcts.rollout_policy = RolloutPolicy::AdoptImmediateWin;
        }
    }
}

/// Load configuration from `path`, or built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> FileConfig {
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            load_from_path(path)
        }
        None => {
            debug!("No config file given, using built-in defaults");
            FileConfig::default()
        }
    }
}

/// Load configuration from a specific path, falling back to defaults when the
/// file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> FileConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                FileConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            FileConfig::default()
        }
    }
}
