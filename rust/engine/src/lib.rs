//! # cardsim-engine: Blackjack Simulation Core
//!
//! The scoring, dealing and betting kernel of a simplified blackjack game.
//! Every shuffle is driven by a seedable generator, so whole sessions can be
//! replayed exactly from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card values (hard/soft points) and the card factory
//! - [`deck`] - Multi-deck shoes with seeded shuffling and optional burn
//! - [`hand`] - Hand totals with the single-soft-ace rule, lazy and eager
//! - [`betting`] - Flat, Martingale and 1-3-2-6 stake progressions
//! - [`strategy`] - Hit/stand policies and dealer drawing rules
//! - [`table`] - Dealing with transparent reshuffle on exhaustion
//! - [`player`] - Round play and bankroll settlement
//! - [`session`] - Whole-session simulation and summaries
//! - [`record`] - Serializable round snapshots and session summaries
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardsim_engine::cards::{make_card, Suit};
//! use cardsim_engine::hand::Hand;
//!
//! let dealer = make_card(6, Suit::Club).unwrap();
//! let mut hand = Hand::new(
//!     dealer,
//!     [make_card(1, Suit::Spade).unwrap(), make_card(13, Suit::Heart).unwrap()],
//! );
//! assert_eq!(hand.total(), 21);
//!
//! hand.add_card(make_card(5, Suit::Diamond).unwrap());
//! assert_eq!(hand.total(), 16);
//! ```
//!
//! ## Betting
//!
//! ```rust
//! use cardsim_engine::betting::{create_betting, BettingKind};
//!
//! let mut strategy = create_betting(BettingKind::OneThreeTwoSix);
//! let mut stakes = Vec::new();
//! for _ in 0..5 {
//!     stakes.push(strategy.bet());
//!     strategy.record_win();
//! }
//! assert_eq!(stakes, vec![1, 3, 2, 6, 1]);
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod record;
pub mod session;
pub mod strategy;
pub mod table;
