//! CLI blackjack example.
//!
//! Run with `RUST_LOG=debug` to see the engine's log output.

use std::io::{self, BufRead, Write};

use bjcore::{
    Card, GameResult, GameState, Suit, Turn, player_hits, player_stands, settled_result,
    setup_game,
};

fn main() {
    env_logger::init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let mut state = setup_game();

    loop {
        print_table(&state);

        if let Some(result) = settled_result(&state) {
            println!("{}", format_result(result));
            match prompt_line("Play again? (y/n): ").as_deref() {
                Some("y" | "yes" | "r" | "reset") => {
                    state = setup_game();
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    return;
                }
            }
        }

        println!("{}", format_actions(&state));
        let Some(action) = prompt_line("Action: ") else {
            println!("Goodbye.");
            return;
        };

        // Settled rounds were handled above, so hit and stand are always on offer here.
        let next = match action.as_str() {
            "h" | "hit" => player_hits(&state),
            "s" | "stand" => player_stands(&state),
            "r" | "reset" => Ok(setup_game()),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match next {
            Ok(next) => state = next,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

/// Prints `prompt` and reads one command from stdin.
///
/// Returns `None` once stdin is closed or unreadable.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    read_command(&mut io::stdin().lock())
}

fn read_command<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn print_table(state: &GameState) {
    let remaining = state.cards_remaining();
    println!("\nThere are {remaining} cards left in deck");

    if state.turn() == Turn::PlayerTurn {
        let mut parts = vec!["??".to_string()];
        parts.extend(state.visible_dealer_cards().iter().map(format_card));
        println!("\nDealer: {}", parts.join(" "));
    } else {
        println!(
            "\nDealer: {} (score {})",
            format_cards(state.dealer_hand().cards()),
            state.dealer_score()
        );
    }

    println!(
        "Player: {} (score {})",
        format_cards(state.player_hand().cards()),
        state.player_score()
    );
    println!();
}

fn format_actions(state: &GameState) -> String {
    let allowed = state.can_act();
    let parts = [
        format_action("hit", "h", allowed),
        format_action("stand", "s", allowed),
        format_action("reset", "r", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn format_result(result: GameResult) -> String {
    match result {
        GameResult::PlayerWin => colorize("You win.", "32"),
        GameResult::DealerWin => colorize("Dealer wins.", "31"),
        GameResult::Draw => colorize("Push.", "33"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
