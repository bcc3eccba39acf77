//! Blackjack hands and their scoring.
//!
//! A hand's total counts every card at its hard value, then adds the largest
//! single soft bonus if that keeps the hand at 21 or under. Only one Ace can
//! ever be counted as 11 (two would be at least 22), so taking the maximum
//! per-card delta is enough.
//!
//! Two representations share that rule and always agree:
//!
//! - [`Hand`] recomputes the total from its cards on every call.
//! - [`EagerHand`] keeps a running hard total and soft delta and refreshes
//!   the total on every mutation.

use std::cmp::Ordering;
use std::fmt;

use crate::cards::Card;

/// Best blackjack score for a set of cards.
///
/// # Examples
///
/// ```
/// use cardsim_engine::cards::{make_card, Suit};
/// use cardsim_engine::hand::score;
///
/// let ace = make_card(1, Suit::Spade).unwrap();
/// let king = make_card(13, Suit::Heart).unwrap();
/// let five = make_card(5, Suit::Club).unwrap();
///
/// assert_eq!(score(&[ace, king]), 21);
/// assert_eq!(score(&[ace, king, five]), 16);
/// assert_eq!(score(&[]), 0);
/// ```
pub fn score(cards: &[Card]) -> u32 {
    let hard_total: u32 = cards.iter().map(|c| c.hard()).sum();
    let delta = cards.iter().map(|c| c.soft_delta()).max().unwrap_or(0);
    clamp_total(hard_total, delta)
}

fn clamp_total(hard_total: u32, delta: u32) -> u32 {
    if hard_total + delta <= 21 {
        hard_total + delta
    } else {
        hard_total
    }
}

/// Common view of a scored hand.
pub trait Scored {
    fn dealer_card(&self) -> Card;
    fn cards(&self) -> &[Card];
    fn total(&self) -> u32;

    fn hard_total(&self) -> u32 {
        self.cards().iter().map(|c| c.hard()).sum()
    }

    /// An Ace is currently being counted as 11.
    fn is_soft(&self) -> bool {
        self.total() != self.hard_total()
    }

    fn is_bust(&self) -> bool {
        self.total() > 21
    }

    fn is_blackjack(&self) -> bool {
        self.cards().len() == 2 && self.total() == 21
    }
}

/// A player's cards plus the dealer's up-card, scored lazily.
#[derive(Debug, Clone)]
pub struct Hand {
    dealer_card: Card,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(dealer_card: Card, initial_cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            dealer_card,
            cards: initial_cards.into_iter().collect(),
        }
    }

    /// Appends a card. Busting is not checked here.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Takes back the most recently added card.
    pub fn remove_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn dealer_card(&self) -> Card {
        self.dealer_card
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> u32 {
        score(&self.cards)
    }

    pub fn hard_total(&self) -> u32 {
        Scored::hard_total(self)
    }

    pub fn is_soft(&self) -> bool {
        Scored::is_soft(self)
    }

    pub fn is_bust(&self) -> bool {
        Scored::is_bust(self)
    }

    pub fn is_blackjack(&self) -> bool {
        Scored::is_blackjack(self)
    }
}

impl Scored for Hand {
    fn dealer_card(&self) -> Card {
        self.dealer_card
    }
    fn cards(&self) -> &[Card] {
        &self.cards
    }
    fn total(&self) -> u32 {
        score(&self.cards)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.total() == other.total()
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
    }
}

impl PartialEq<u32> for Hand {
    fn eq(&self, other: &u32) -> bool {
        self.total() == *other
    }
}

impl PartialOrd<u32> for Hand {
    fn partial_cmp(&self, other: &u32) -> Option<Ordering> {
        Some(self.total().cmp(other))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |", self.dealer_card)?;
        for c in &self.cards {
            write!(f, " {}", c)?;
        }
        write!(f, " ({})", self.total())
    }
}

/// A hand that maintains its total incrementally.
///
/// Adding a card is O(1). Removing one is O(n): the soft delta has to be
/// rescanned over the remaining cards, because several cards can share the
/// maximum delta and nothing records which of them is left.
#[derive(Debug, Clone)]
pub struct EagerHand {
    dealer_card: Card,
    cards: Vec<Card>,
    hard_total: u32,
    delta: u32,
    total: u32,
}

impl EagerHand {
    pub fn new(dealer_card: Card, initial_cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            dealer_card,
            cards: Vec::new(),
            hard_total: 0,
            delta: 0,
            total: 0,
        };
        for c in initial_cards {
            hand.add_card(c);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.hard_total += card.hard();
        self.delta = self.delta.max(card.soft_delta());
        self.total = clamp_total(self.hard_total, self.delta);
    }

    pub fn remove_card(&mut self) -> Option<Card> {
        let removed = self.cards.pop()?;
        self.hard_total -= removed.hard();
        self.delta = self
            .cards
            .iter()
            .map(|c| c.soft_delta())
            .max()
            .unwrap_or(0);
        self.total = clamp_total(self.hard_total, self.delta);
        Some(removed)
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn dealer_card(&self) -> Card {
        self.dealer_card
    }
}

impl Scored for EagerHand {
    fn dealer_card(&self) -> Card {
        self.dealer_card
    }
    fn cards(&self) -> &[Card] {
        &self.cards
    }
    fn total(&self) -> u32 {
        self.total
    }
    fn hard_total(&self) -> u32 {
        self.hard_total
    }
}

impl From<EagerHand> for Hand {
    fn from(h: EagerHand) -> Self {
        Hand::new(h.dealer_card, h.cards)
    }
}

impl From<Hand> for EagerHand {
    fn from(h: Hand) -> Self {
        EagerHand::new(h.dealer_card, h.cards)
    }
}
