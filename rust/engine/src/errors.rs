use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid rank: {rank} (expected 1..=13)")]
    InvalidRank { rank: u8 },
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Invalid bet configuration: {0}")]
    InvalidBetConfiguration(String),
    #[error("Deck count must be at least 1")]
    InvalidDeckCount,
}
