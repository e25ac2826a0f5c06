//! Card evaluation command handler.
//!
//! - Two cards: starting-hand notation and chart tier.
//! - Five to seven cards: best five-card hand.
//! - Five or six cards: also the draws, reading the first two as hole cards.

use std::collections::HashSet;
use std::io::Write;

use holdem_ai::chart::{hand_description, tier_of};
use holdem_engine::cards::{Card, HoleCards, parse_cards};
use holdem_engine::hand::evaluate;
use holdem_engine::odds::{analyze_draws, count_outs, estimate_equity};

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_eval_command(args: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_args(args)?;
    match cards.len() {
        2 => {
            let hole = HoleCards::new(cards[0], cards[1]);
            writeln!(out, "Hole cards: {} ({})", format_board(&cards), hole.notation())?;
            writeln!(out, "Tier: {}", tier_of(&hole).name())?;
            writeln!(out, "{}", hand_description(&hole))?;
        }
        5..=7 => {
            let best = evaluate(&cards)?;
            writeln!(out, "Cards: {}", format_board(&cards))?;
            writeln!(out, "Category: {}", best.category)?;
            writeln!(out, "Best hand: {}", best.describe())?;
            if cards.len() < 7 {
                let hole = HoleCards::new(cards[0], cards[1]);
                let board = &cards[2..];
                let draws = analyze_draws(&hole, board);
                let outs = count_outs(&hole, board);
                // flop has two cards to come, turn one
                let to_come = (7 - cards.len()) as u8;
                writeln!(out, "Draws: {}", draws.describe())?;
                writeln!(out, "Outs: {}", outs)?;
                writeln!(
                    out,
                    "Estimated equity: {:.0}%",
                    estimate_equity(outs, to_come) * 100.0
                )?;
            }
        }
        n => {
            return Err(CliError::InvalidInput(format!(
                "expected 2 hole cards or a 5-7 card hand, got {} cards",
                n
            )));
        }
    }
    Ok(())
}

/// Accepts `As Kd`, `As,Kd` and run-together `AsKd`.
fn parse_args(args: &[String]) -> Result<Vec<Card>, CliError> {
    let mut tokens = Vec::new();
    for arg in args {
        for token in arg.split(|c: char| c.is_whitespace() || c == ',') {
            if token.len() > 2 && token.len() % 2 == 0 && token.is_ascii() {
                tokens.extend(token.as_bytes().chunks(2).map(|c| String::from_utf8_lossy(c).into_owned()));
            } else if !token.is_empty() {
                tokens.push(token.to_string());
            }
        }
    }
    let cards = parse_cards(&tokens.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn run_together_notation_is_split() {
        let cards = parse_args(&args(&["AsKd", "Qh,Jh"])).unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1].to_string(), "Kd");
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(matches!(
            parse_args(&args(&["As", "As"])),
            Err(CliError::InvalidInput(_))
        ));
    }
}
