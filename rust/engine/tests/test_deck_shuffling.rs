use std::collections::HashSet;

use cardsim_engine::cards::Card;
use cardsim_engine::deck::{Deck, DeckOptions};
use cardsim_engine::errors::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn shoe(num_decks: usize, seed: u64) -> Deck {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    Deck::new(
        DeckOptions {
            num_decks,
            burn: false,
        },
        &mut rng,
    )
    .expect("valid deck count")
}

#[test]
fn single_deck_has_52_unique_cards() {
    let mut deck = shoe(1, 42);
    assert_eq!(deck.remaining(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal().expect("should have 52 cards");
        assert!(
            set.insert((c.rank(), c.suit())),
            "card {} duplicated at position {}",
            c,
            i
        );
    }
    assert!(deck.is_empty());
}

#[test]
fn fifty_third_deal_is_deck_empty() {
    let mut deck = shoe(1, 7);
    for _ in 0..52 {
        deck.deal().unwrap();
    }
    assert_eq!(deck.deal(), Err(GameError::DeckEmpty));
}

#[test]
fn six_deck_shoe_has_312_cards_six_of_each() {
    let mut deck = shoe(6, 3);
    assert_eq!(deck.remaining(), 312);
    let mut counts = std::collections::HashMap::new();
    while let Ok(c) = deck.deal() {
        *counts.entry((c.rank(), c.suit())).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 52);
    assert!(counts.values().all(|&n| n == 6));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = shoe(1, 12345);
    let mut d2 = shoe(1, 12345);
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = shoe(1, 1);
    let mut d2 = shoe(1, 2);
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn new_with_seed_matches_seeded_generator() {
    let mut a = Deck::new_with_seed(99);
    let mut b = shoe(1, 99);
    for _ in 0..52 {
        assert_eq!(a.deal().unwrap(), b.deal().unwrap());
    }
}

#[test]
fn burned_shoe_is_reproducible() {
    let opts = DeckOptions {
        num_decks: 2,
        burn: true,
    };
    let d1 = Deck::new(opts, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
    let d2 = Deck::new(opts, &mut ChaCha20Rng::seed_from_u64(5)).unwrap();
    assert_eq!(d1.burned(), d2.burned());
    assert_eq!(d1.remaining(), 104 - d1.burned());
}
