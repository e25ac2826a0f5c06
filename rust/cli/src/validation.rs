//! Input parsing and validation for interactive commands.
//!
//! Parsing turns a typed line into a [`ParseResult`]; legality against the
//! current hand is checked separately by [`check_action`], so a typo and an
//! illegal bet produce different messages.

use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction;
use holdem_engine::rules::validate_action;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// User asked for the coach's recommendation
    Hint,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check, "call" → Call
/// - "bet X" → Bet with amount X
/// - "raise X" → Raise to a street total of X
/// - "allin" or "all-in" → All-in
/// - "h" or "hint" → Hint
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("bet 100"),
///     ParseResult::Action(PlayerAction::Bet(100))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&first) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match first {
        "q" | "quit" => ParseResult::Quit,
        "h" | "hint" => ParseResult::Hint,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "bet" => parse_amount(&parts, "Bet", "bet 100").map_or_else(ParseResult::Invalid, |a| {
            ParseResult::Action(PlayerAction::Bet(a))
        }),
        "raise" => parse_amount(&parts, "Raise", "raise 50")
            .map_or_else(ParseResult::Invalid, |a| {
                ParseResult::Action(PlayerAction::Raise(a))
            }),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, hint, q",
            first
        )),
    }
}

fn parse_amount(parts: &[&str], verb: &str, example: &str) -> Result<u32, String> {
    let Some(raw) = parts.get(1) else {
        return Err(format!("{verb} requires an amount (e.g., '{example}')"));
    };
    match raw.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        Ok(_) => Err(format!("{verb} amount must be positive")),
        Err(_) => Err(format!("Invalid {} amount", verb.to_lowercase())),
    }
}

/// Checks a parsed action against the hand in progress.
///
/// Returns the action to submit, or a message explaining why it is not
/// allowed (for example a check while facing a bet, or an undersized raise).
pub fn check_action(state: &GameState, idx: usize, action: PlayerAction) -> Result<PlayerAction, String> {
    validate_action(state, idx, action)
        .map(PlayerAction::from)
        .map_err(|e| e.to_string())
}

/// Parses blinds written as `sb/bb`, e.g. `5/10`.
pub fn parse_blinds(s: &str) -> Result<(u32, u32), String> {
    let (sb, bb) = s
        .split_once('/')
        .ok_or_else(|| format!("Invalid blinds '{s}', expected sb/bb"))?;
    let sb: u32 = sb
        .trim()
        .parse()
        .map_err(|_| format!("Invalid small blind '{sb}'"))?;
    let bb: u32 = bb
        .trim()
        .parse()
        .map_err(|_| format!("Invalid big blind '{bb}'"))?;
    if sb == 0 || sb > bb {
        return Err(format!("Invalid blinds {sb}/{bb}: need 0 < sb <= bb"));
    }
    Ok((sb, bb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amounts_and_rejects_garbage() {
        assert_eq!(
            parse_player_action("RAISE 40"),
            ParseResult::Action(PlayerAction::Raise(40))
        );
        assert_eq!(
            parse_player_action("bet"),
            ParseResult::Invalid("Bet requires an amount (e.g., 'bet 100')".to_string())
        );
        assert_eq!(
            parse_player_action("raise 0"),
            ParseResult::Invalid("Raise amount must be positive".to_string())
        );
        assert_eq!(
            parse_player_action("bet lots"),
            ParseResult::Invalid("Invalid bet amount".to_string())
        );
        assert_eq!(parse_player_action("  "), ParseResult::Invalid("Empty input".to_string()));
        assert_eq!(parse_player_action("h"), ParseResult::Hint);
        assert_eq!(parse_player_action("all-in"), ParseResult::Action(PlayerAction::AllIn));
    }

    #[test]
    fn blinds_notation() {
        assert_eq!(parse_blinds("5/10"), Ok((5, 10)));
        assert_eq!(parse_blinds(" 25 / 50 "), Ok((25, 50)));
        assert!(parse_blinds("10").is_err());
        assert!(parse_blinds("20/10").is_err());
        assert!(parse_blinds("0/10").is_err());
    }
}
