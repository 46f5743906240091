use serde::{Deserialize, Serialize};

use crate::error::{MctsError, Result};

/// How a rollout picks the next move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutPolicy {
    /// Sample uniformly among all legal drops
    #[default]
    Uniform,

    /// Take an immediately winning drop whenever one exists, otherwise sample
    /// uniformly. Sharper tactics, slower playouts.
    AdoptImmediateWin,
}

/// Configuration for MCTS search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Number of search iterations to run per decision
    pub num_iterations: u32,

    /// Numerator of the per-node exploration weight `c / sqrt(visits + 1)`
    pub exploration_constant: f64,

    /// Move choice inside rollouts
    pub rollout_policy: RolloutPolicy,

    /// Seed for the search RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl MctsConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of iterations
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.num_iterations = n;
        self
    }

    /// Set exploration constant
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set rollout policy
    pub fn with_rollout_policy(mut self, policy: RolloutPolicy) -> Self {
        self.rollout_policy = policy;
        self
    }

    /// Fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use OS entropy for the RNG
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MctsError::InvalidConfig(format!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_iterations: 10_000,
            exploration_constant: 4.0,
            rollout_policy: RolloutPolicy::Uniform,
            seed: None,
        }
    }
}
