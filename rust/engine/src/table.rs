use std::num::NonZeroUsize;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::betting::BettingStrategy;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::Hand;

/// Construction parameters for a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of 52-card decks in the shoe.
    pub num_decks: usize,
    /// Burn 1..=32 cards every time a deck is built.
    pub burn: bool,
    /// Seed for the table's generator; a random seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_decks: 1,
            burn: false,
            seed: None,
        }
    }
}

/// Deals hands from a deck it owns and rebuilds that deck when it runs out.
///
/// All shuffles, including the ones after exhaustion, draw from a single
/// ChaCha20 generator, so a table created with the same seed deals the same
/// sequence of hands.
///
/// # Examples
///
/// ```
/// use cardsim_engine::table::{Table, TableConfig};
///
/// let mut table = Table::new(TableConfig {
///     seed: Some(7),
///     ..TableConfig::default()
/// })
/// .unwrap();
///
/// for _ in 0..27 {
///     let hand = table.deal_hand().expect("reshuffles instead of failing");
///     assert_eq!(hand.cards().len(), 2);
/// }
/// assert!(table.reshuffles() >= 1);
/// ```
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    rng: ChaCha20Rng,
    num_decks: NonZeroUsize,
    burn: bool,
    seed: u64,
    reshuffles: u32,
}

impl Table {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        let num_decks = NonZeroUsize::new(config.num_decks).ok_or(GameError::InvalidDeckCount)?;
        Ok(Self::build(num_decks, config.burn, config.seed))
    }

    fn build(num_decks: NonZeroUsize, burn: bool, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let deck = Deck::build(num_decks, burn, &mut rng);
        debug!(seed, num_decks = num_decks.get(), burn, "table opened");
        Self {
            deck,
            rng,
            num_decks,
            burn,
            seed,
            reshuffles: 0,
        }
    }

    /// Deals the dealer's up-card followed by two player cards.
    ///
    /// If the deck runs out part way, the cards already drawn are discarded,
    /// the deck is rebuilt and the deal is tried once more.
    pub fn deal_hand(&mut self) -> Result<Hand, GameError> {
        match self.draw_hand() {
            Err(GameError::DeckEmpty) => {
                self.reshuffle();
                self.draw_hand()
            }
            other => other,
        }
    }

    /// Deals a single card with the same reshuffle-once policy as [`deal_hand`](Self::deal_hand).
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        match self.deck.deal() {
            Err(GameError::DeckEmpty) => {
                self.reshuffle();
                self.deck.deal()
            }
            other => other,
        }
    }

    /// Stake for the coming round, straight from the strategy.
    pub fn place_bet(&self, strategy: &dyn BettingStrategy) -> u32 {
        strategy.bet()
    }

    pub fn can_insure(&self, hand: &Hand) -> bool {
        hand.dealer_card().can_insure()
    }

    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn draw_hand(&mut self) -> Result<Hand, GameError> {
        let dealer_card = self.deck.deal()?;
        let first = self.deck.deal()?;
        let second = self.deck.deal()?;
        Ok(Hand::new(dealer_card, [first, second]))
    }

    fn reshuffle(&mut self) {
        self.deck = Deck::build(self.num_decks, self.burn, &mut self.rng);
        self.reshuffles += 1;
        info!(
            reshuffles = self.reshuffles,
            remaining = self.deck.remaining(),
            "deck exhausted, reshuffled"
        );
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::build(NonZeroUsize::MIN, false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betting::{Flat, Martingale};

    fn seeded(seed: u64) -> Table {
        Table::new(TableConfig {
            seed: Some(seed),
            ..TableConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn deal_hand_takes_three_cards() {
        let mut t = seeded(1);
        t.deal_hand().unwrap();
        assert_eq!(t.deck_remaining(), 49);
    }

    #[test]
    fn eighteenth_hand_forces_a_reshuffle() {
        // 17 hands use 51 cards; the 18th finds one card left
        let mut t = seeded(2);
        for _ in 0..17 {
            t.deal_hand().unwrap();
        }
        assert_eq!(t.reshuffles(), 0);
        assert_eq!(t.deck_remaining(), 1);
        t.deal_hand().unwrap();
        assert_eq!(t.reshuffles(), 1);
        assert_eq!(t.deck_remaining(), 49);
    }

    #[test]
    fn deal_card_reshuffles_on_empty() {
        let mut t = seeded(3);
        for _ in 0..52 {
            t.deal_card().unwrap();
        }
        assert_eq!(t.deck_remaining(), 0);
        t.deal_card().unwrap();
        assert_eq!(t.reshuffles(), 1);
        assert_eq!(t.deck_remaining(), 51);
    }

    #[test]
    fn zero_decks_is_rejected() {
        let err = Table::new(TableConfig {
            num_decks: 0,
            ..TableConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, GameError::InvalidDeckCount);
    }

    #[test]
    fn place_bet_delegates_to_strategy() {
        let t = seeded(4);
        let mut m = Martingale::new();
        m.record_loss();
        assert_eq!(t.place_bet(&Flat), 1);
        assert_eq!(t.place_bet(&m), 2);
    }

    #[test]
    fn same_seed_deals_same_hands() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..40 {
            let ha = a.deal_hand().unwrap();
            let hb = b.deal_hand().unwrap();
            assert_eq!(ha.dealer_card(), hb.dealer_card());
            assert_eq!(ha.cards(), hb.cards());
        }
    }

    #[test]
    fn default_table_has_one_full_deck() {
        let t = Table::default();
        assert_eq!(t.deck_remaining(), 52);
    }
}
