use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

pub const DEFAULT_HIT_THRESHOLD: u32 = 17;

/// Player decisions driven purely by the visible state of a hand.
///
/// Only [`should_hit`](GameStrategy::should_hit) is used by round play;
/// insurance, split and double default to declining.
pub trait GameStrategy: Send + Sync {
    fn should_hit(&self, hand: &Hand) -> bool;

    fn insurance(&self, _hand: &Hand) -> bool {
        false
    }

    fn split(&self, _hand: &Hand) -> bool {
        false
    }

    fn double(&self, _hand: &Hand) -> bool {
        false
    }

    fn name(&self) -> &str;
}

/// Hits while the hand total is at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitThreshold {
    threshold: u32,
}

impl HitThreshold {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for HitThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_THRESHOLD)
    }
}

impl GameStrategy for HitThreshold {
    fn should_hit(&self, hand: &Hand) -> bool {
        hand.total() <= self.threshold
    }

    fn name(&self) -> &str {
        "HitThreshold"
    }
}

/// How the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealerRule {
    /// Draw on soft 17.
    #[default]
    Hit17,
    /// Stand on every 17.
    Stand17,
}

impl DealerRule {
    pub fn should_draw(self, total: u32, soft: bool) -> bool {
        match self {
            DealerRule::Hit17 => total < 17 || (total == 17 && soft),
            DealerRule::Stand17 => total < 17,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DealerRule::Hit17 => "hit17",
            DealerRule::Stand17 => "stand17",
        }
    }
}

impl fmt::Display for DealerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealerRule {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit17" => Ok(DealerRule::Hit17),
            "stand17" => Ok(DealerRule::Stand17),
            other => Err(GameError::InvalidBetConfiguration(format!(
                "unknown dealer rule '{}'",
                other
            ))),
        }
    }
}
