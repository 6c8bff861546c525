//! Card and deck tests.

use std::collections::HashSet;

use bjcore::{Card, DECK_SIZE, Deck, Rank, Suit, draw_one, new_deck, shuffle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn new_deck_has_every_card_once() {
    let deck = new_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn new_deck_is_suit_major_order() {
    let deck = new_deck();
    let cards = deck.cards();

    assert_eq!(cards[0], Card::new(Suit::Clubs, Rank::Two));
    assert_eq!(cards[12], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(cards[13], Card::new(Suit::Diamonds, Rank::Two));
    assert_eq!(cards[51], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck, Deck::new());
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let shuffled = shuffle(new_deck());
    assert_eq!(shuffled.len(), DECK_SIZE);

    let original: HashSet<Card> = new_deck().cards().iter().copied().collect();
    let after: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(original, after);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let a = new_deck().shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    let b = new_deck().shuffled(&mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, b);

    let unique: HashSet<Card> = a.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn draw_takes_the_last_card() {
    let deck = Deck::from_cards(vec![
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Spades, Rank::King),
    ]);

    let (card, rest) = draw_one(deck).unwrap();
    assert_eq!(card, Card::new(Suit::Spades, Rank::King));
    assert_eq!(rest.cards(), &[Card::new(Suit::Hearts, Rank::Two)]);

    let (card, rest) = rest.draw().unwrap();
    assert_eq!(card, Card::new(Suit::Hearts, Rank::Two));
    assert!(rest.is_empty());
    assert!(rest.draw().is_none());
}

#[test]
fn rank_points() {
    assert_eq!(Rank::Two.points(), 2);
    assert_eq!(Rank::Nine.points(), 9);
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(rank.points(), 10);
    }
    assert_eq!(Rank::Ace.points(), 1);
}

#[test]
fn card_display_and_asset_names() {
    let ace = Card::new(Suit::Spades, Rank::Ace);
    let ten = Card::new(Suit::Hearts, Rank::Ten);
    let queen = Card::new(Suit::Clubs, Rank::Queen);

    assert_eq!(ace.to_string(), "A♠");
    assert_eq!(ten.to_string(), "10♥");
    assert_eq!(queen.to_string(), "Q♣");

    assert_eq!(ace.asset_name(), "spade_1");
    assert_eq!(ten.asset_name(), "heart_10");
    assert_eq!(queen.asset_name(), "club_queen");
    assert_eq!(
        Card::new(Suit::Diamonds, Rank::Seven).asset_name(),
        "diamond_7"
    );
}
