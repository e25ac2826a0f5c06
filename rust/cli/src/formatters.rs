//! Card, board, and action formatters for terminal display.
//!
//! Cards are shown with Unicode suit symbols where the terminal is known to
//! render them, and with the plain notation letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! assert_eq!(format_board(&[]), "[ ]");
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.code().to_string()
    }
}

/// Rank symbol followed by the suit, e.g. `T♥`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Cards in brackets separated by spaces; an empty board is `[ ]`.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "[ ]".to_string();
    }
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// Short imperative form used in prompts and summaries.
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise to {}", amount),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// Chip change with an explicit sign, e.g. `+150` or `-40`.
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}
