//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! A round is a [`GameState`] value. [`setup_game`] deals one, then
//! [`player_hits`] and [`player_stands`] each return the next state, and
//! [`determine_game_result`] compares the hands. Nothing is mutated in place,
//! so the caller holds one state and replaces it after every action.
//!
//! # Example
//!
//! ```
//! use bjcore::{GameOptions, Turn, determine_game_result, player_stands, setup_game_seeded};
//!
//! let state = setup_game_seeded(GameOptions::default(), 42);
//! let state = player_stands(&state).unwrap();
//! assert_eq!(state.turn(), Turn::DealerTurn);
//! assert!(state.dealer_score() >= 17);
//! let _ = determine_game_result(&state);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, draw_one, new_deck};
#[cfg(feature = "std")]
pub use deck::shuffle;
pub use error::ActionError;
#[cfg(feature = "std")]
pub use game::setup_game;
pub use game::{GameState, Turn, player_hits, player_stands, setup_game_seeded, setup_game_with_rng};
pub use hand::{BLACKJACK, Hand, calculate_hand_score};
pub use options::GameOptions;
pub use result::{GameResult, determine_game_result, settled_result};
