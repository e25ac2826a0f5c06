//! Terminal rendering for the interactive table.

use std::io::Write;

use holdem_engine::analysis::DecisionReport;
use holdem_engine::game::GameState;

use crate::formatters::{format_action, format_board, format_card, format_delta};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Draws the table as the human at table seat `human` sees it. Other
/// players' hole cards stay hidden.
pub fn render_table(out: &mut dyn Write, state: &GameState, human: usize) -> std::io::Result<()> {
    writeln!(
        out,
        "--- {} | Pot: {} | Current bet: {} ---",
        state.street().name(),
        state.pot(),
        state.current_bet()
    )?;
    writeln!(out, "Board: {}", format_board(state.board()))?;
    for (idx, p) in state.players().iter().enumerate() {
        let pos = p.position().map(|pos| pos.abbreviation()).unwrap_or("-");
        let cards = match p.hole_cards() {
            Some(hole) if p.id() == human => {
                let [a, b] = hole.cards();
                format!("[{} {}]", format_card(&a), format_card(&b))
            }
            _ if p.is_folded() => "(folded)".to_string(),
            _ => "[?? ??]".to_string(),
        };
        let mut line = format!(
            "  {:<5} {:<18} stack {:>6}  bet {:>5}  {}",
            pos,
            p.name(),
            p.stack(),
            p.street_bet(),
            cards
        );
        if p.is_all_in() {
            line.push_str(" ALL-IN");
        }
        if idx == state.to_act() && p.can_act() {
            line.push_str("  <-");
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Prompt for the seat at hand index `idx`, listing what it may do.
pub fn prompt_line(state: &GameState, idx: usize) -> String {
    let to_call = state.amount_to_call(idx);
    if to_call == 0 {
        format!(
            "Your action (check, bet <amount>, allin, fold, hint, q) [min bet {}]: ",
            state.big_blind()
        )
    } else {
        format!(
            "Your action (call {}, raise <to>, allin, fold, hint, q) [min raise to {}]: ",
            to_call,
            state.min_raise()
        )
    }
}

pub fn render_report(out: &mut dyn Write, report: &DecisionReport) -> std::io::Result<()> {
    writeln!(
        out,
        "Coach: {} (you chose {})",
        report.verdict(),
        format_action(&report.action)
    )?;
    if !report.feedback.is_empty() {
        writeln!(out, "{}", report.feedback.trim_end())?;
    }
    for tip in &report.tips {
        writeln!(out, "  Tip: {}", tip)?;
    }
    Ok(())
}

pub fn render_hand_delta(out: &mut dyn Write, hand_number: u64, delta: i64) -> std::io::Result<()> {
    writeln!(out, "Hand #{} result for you: {}", hand_number, format_delta(delta))
}
