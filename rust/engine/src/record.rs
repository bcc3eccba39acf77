use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

/// Snapshot of one finished round.
/// Plain data, serialized as one JSON object per round by the CLI.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Dealer's up-card
    pub dealer_card: Card,
    /// Player cards in the order they were dealt, hits included
    pub player_cards: Vec<Card>,
    /// Player's final total
    pub final_total: u32,
    /// Dealer's final total; absent when the player busted before the dealer played
    #[serde(default)]
    pub dealer_total: Option<u32>,
    /// Stake placed on the round
    pub bet_amount: u32,
    pub outcome: Outcome,
}

/// Aggregate result of one player's session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Index of the session within a simulation run
    pub session: u64,
    /// Seed of the session's table generator
    pub seed: u64,
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub initial_stake: u32,
    pub final_stake: u32,
    /// Highest bankroll reached during the session
    pub max_stake: u32,
    /// Times the deck ran out and was rebuilt
    pub reshuffles: u32,
}

impl SessionSummary {
    pub fn net(&self) -> i64 {
        self.final_stake as i64 - self.initial_stake as i64
    }
}
