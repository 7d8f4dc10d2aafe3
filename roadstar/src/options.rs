//! Search configuration.

use serde::{Deserialize, Serialize};

/// Distance to the goal, in normalized units, below which the goal counts as reached.
pub const DEFAULT_EPSILON: f32 = 0.001;

/// How a newly found path to an already discovered node is treated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
  /// Keep the cheapest known path: a node gets a new parent only if the new cost is strictly smaller.
  Improving,
  /// Every rediscovery overwrites parent and cost, even if the new path is more expensive.
  ///
  /// Routes found this way are not guaranteed to be the shortest ones.
  LastWriteWins,
}

impl Default for Relaxation {
  fn default() -> Self {
    Relaxation::Improving
  }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
  pub epsilon: f32,
  pub relaxation: Relaxation,
}

impl Default for SearchOptions {
  fn default() -> Self {
    SearchOptions {
      epsilon: DEFAULT_EPSILON,
      relaxation: Relaxation::default(),
    }
  }
}

impl SearchOptions {
  pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
    self.relaxation = relaxation;
    self
  }

  pub fn with_epsilon(mut self, epsilon: f32) -> Self {
    self.epsilon = epsilon;
    self
  }
}
