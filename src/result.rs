//! Round outcome.

use crate::game::GameState;
use crate::hand::{BLACKJACK, calculate_hand_score};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// The player wins.
    PlayerWin,
    /// The dealer wins.
    DealerWin,
    /// Push (tie).
    Draw,
}

/// Compares the player's hand against the dealer's.
///
/// Scores are recomputed from the hands. A player bust loses before the
/// dealer's hand is looked at, then a dealer bust, then a natural beats any
/// other 21, and finally the higher score wins.
///
/// The function is total: it answers even in the middle of the player's turn,
/// where the answer is meaningless. Use [`settled_result`] to only get a result
/// once the round is over.
#[must_use]
pub fn determine_game_result(state: &GameState) -> GameResult {
    let player = state.player_hand().cards();
    let dealer = state.dealer_hand().cards();
    let player_score = calculate_hand_score(player);
    let dealer_score = calculate_hand_score(dealer);

    if player_score > BLACKJACK {
        return GameResult::DealerWin;
    }
    if dealer_score > BLACKJACK {
        return GameResult::PlayerWin;
    }

    let player_blackjack = player_score == BLACKJACK && player.len() == 2;
    let dealer_blackjack = dealer_score == BLACKJACK && dealer.len() == 2;
    if player_blackjack && !dealer_blackjack {
        return GameResult::PlayerWin;
    }
    if dealer_blackjack && !player_blackjack {
        return GameResult::DealerWin;
    }

    match player_score.cmp(&dealer_score) {
        core::cmp::Ordering::Greater => GameResult::PlayerWin,
        core::cmp::Ordering::Less => GameResult::DealerWin,
        core::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Returns the round result once it is available.
///
/// A result is available when the player has reached 21 or more, or when the
/// dealer has played. Returns `None` while the player can still act.
#[must_use]
pub fn settled_result(state: &GameState) -> Option<GameResult> {
    state.is_settled().then(|| determine_game_result(state))
}
