//! Command-line argument definitions.

use cardsim_engine::betting::BettingKind;
use cardsim_engine::strategy::DealerRule;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cardsim",
    version,
    about = "Blackjack betting-strategy simulator"
)]
pub struct CardsimCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Deal a single hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        decks: Option<usize>,
    },
    /// Run many independent sessions in parallel
    Sim {
        #[arg(long)]
        sessions: Option<u64>,
        #[arg(long)]
        rounds: Option<u32>,
        /// flat, martingale or one-three-two-six
        #[arg(long)]
        betting: Option<BettingKind>,
        #[arg(long)]
        stake: Option<u32>,
        /// Table maximum per wager
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        decks: Option<usize>,
        #[arg(long)]
        hit_threshold: Option<u32>,
        /// hit17 or stand17
        #[arg(long)]
        dealer_rule: Option<DealerRule>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON summary per session to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Play one session and print every round as a JSON line
    Round {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        betting: Option<BettingKind>,
        #[arg(long)]
        rounds: Option<u32>,
        /// Table maximum per wager
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Overrides for a `sim` run; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct SimArgs {
    pub sessions: Option<u64>,
    pub rounds: Option<u32>,
    pub betting: Option<BettingKind>,
    pub stake: Option<u32>,
    pub limit: Option<u32>,
    pub decks: Option<usize>,
    pub hit_threshold: Option<u32>,
    pub dealer_rule: Option<DealerRule>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}
