//! Betting progressions.
//!
//! Every progression implements [`BettingStrategy`], so a player or table can
//! hold any of them as `Box<dyn BettingStrategy>` without knowing which one
//! it is. Stakes are expressed in betting units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// A stateful stake policy that reacts to round outcomes.
pub trait BettingStrategy: Send {
    /// Stake for the next round; always at least 1.
    fn bet(&self) -> u32;

    fn record_win(&mut self);

    fn record_loss(&mut self);

    fn name(&self) -> &str;
}

/// Always bets one unit.
#[derive(Debug, Clone, Default)]
pub struct Flat;

impl BettingStrategy for Flat {
    fn bet(&self) -> u32 {
        1
    }
    fn record_win(&mut self) {}
    fn record_loss(&mut self) {}
    fn name(&self) -> &str {
        "Flat"
    }
}

/// Doubles the stake after every loss and drops back to one unit on a win.
#[derive(Debug, Clone)]
pub struct Martingale {
    stage: u32,
}

impl Martingale {
    pub fn new() -> Self {
        Self { stage: 1 }
    }
}

impl Default for Martingale {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingStrategy for Martingale {
    fn bet(&self) -> u32 {
        self.stage
    }
    fn record_win(&mut self) {
        self.stage = 1;
    }
    fn record_loss(&mut self) {
        self.stage = self.stage.saturating_mul(2);
    }
    fn name(&self) -> &str {
        "Martingale"
    }
}

/// The 1-3-2-6 system: walk the sequence on consecutive wins, restart on a loss.
#[derive(Debug, Clone, Default)]
pub struct OneThreeTwoSix {
    wins: usize,
}

impl OneThreeTwoSix {
    pub const SEQUENCE: [u32; 4] = [1, 3, 2, 6];

    pub fn new() -> Self {
        Self { wins: 0 }
    }
}

impl BettingStrategy for OneThreeTwoSix {
    fn bet(&self) -> u32 {
        Self::SEQUENCE[self.wins % Self::SEQUENCE.len()]
    }
    fn record_win(&mut self) {
        self.wins = (self.wins + 1) % Self::SEQUENCE.len();
    }
    fn record_loss(&mut self) {
        self.wins = 0;
    }
    fn name(&self) -> &str {
        "OneThreeTwoSix"
    }
}

/// Selector for the available betting progressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BettingKind {
    #[default]
    Flat,
    Martingale,
    OneThreeTwoSix,
}

impl BettingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BettingKind::Flat => "flat",
            BettingKind::Martingale => "martingale",
            BettingKind::OneThreeTwoSix => "one-three-two-six",
        }
    }
}

impl fmt::Display for BettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BettingKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(BettingKind::Flat),
            "martingale" => Ok(BettingKind::Martingale),
            "one-three-two-six" | "onethreetwosix" | "1326" | "1-3-2-6" => {
                Ok(BettingKind::OneThreeTwoSix)
            }
            other => Err(GameError::InvalidBetConfiguration(format!(
                "unknown betting strategy '{}'",
                other
            ))),
        }
    }
}

/// Creates a fresh betting strategy of the given kind.
///
/// # Examples
///
/// ```
/// use cardsim_engine::betting::{create_betting, BettingKind};
///
/// let mut strategy = create_betting(BettingKind::Martingale);
/// strategy.record_loss();
/// assert_eq!(strategy.bet(), 2);
/// ```
pub fn create_betting(kind: BettingKind) -> Box<dyn BettingStrategy> {
    match kind {
        BettingKind::Flat => Box::new(Flat),
        BettingKind::Martingale => Box::new(Martingale::new()),
        BettingKind::OneThreeTwoSix => Box::new(OneThreeTwoSix::new()),
    }
}
