//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to exit code 2 after printing it.

use cardsim_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The engine rejected an operation
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_convert_and_display() {
        let e: CliError = GameError::InvalidDeckCount.into();
        assert_eq!(e.to_string(), "Engine error: Deck count must be at least 1");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(e.source().is_some());
        assert!(e.to_string().contains("disk full"));
    }
}
