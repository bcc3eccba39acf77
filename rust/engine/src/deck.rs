use std::num::NonZeroUsize;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Largest number of cards discarded by a burn.
pub const MAX_BURN: usize = 32;

/// How a [`Deck`] is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Number of 52-card decks combined into the shoe.
    pub num_decks: usize,
    /// Discard a random 1..=32 cards from the top after shuffling.
    pub burn: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            num_decks: 1,
            burn: false,
        }
    }
}

/// A shuffled shoe of one or more standard decks.
///
/// The top of the deck is the end of the backing vector, so dealing is a
/// `pop`. The shuffle and the optional burn both draw from the generator
/// handed to [`Deck::new`], which makes any deck reproducible from a seed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    burned: usize,
}

impl Deck {
    pub fn new<R: Rng + ?Sized>(opts: DeckOptions, rng: &mut R) -> Result<Self, GameError> {
        let num_decks = NonZeroUsize::new(opts.num_decks).ok_or(GameError::InvalidDeckCount)?;
        Ok(Self::build(num_decks, opts.burn, rng))
    }

    pub(crate) fn build<R: Rng + ?Sized>(num_decks: NonZeroUsize, burn: bool, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(52 * num_decks.get());
        for _ in 0..num_decks.get() {
            cards.extend(full_deck());
        }
        cards.shuffle(rng);

        let mut burned = 0;
        if burn {
            burned = rng.random_range(1..=MAX_BURN).min(cards.len());
            cards.truncate(cards.len() - burned);
        }
        Self { cards, burned }
    }

    /// Single deck shuffled with a ChaCha20 generator seeded from `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::build(NonZeroUsize::MIN, false, &mut rng)
    }

    /// Removes and returns the top card.
    pub fn deal(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckEmpty)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn burned(&self) -> usize {
        self.burned
    }
}
