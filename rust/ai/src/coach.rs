//! Recommendations and decision feedback for the human seat.

use holdem_engine::analysis::{Advice, DecisionAnalyzer, DecisionReport};
use holdem_engine::cards::HoleCards;
use holdem_engine::game::{GameState, Street};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::odds::OddsSummary;
use holdem_engine::player::{PlayerAction, Position};
use tracing::debug;

use crate::chart::{self, Tier};

/// What the coach would do, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub advice: Advice,
    pub reasoning: String,
    pub tips: Vec<String>,
    /// Raise size or call amount; 0 for check and fold
    pub suggested_amount: u32,
}

impl Recommendation {
    pub fn summary(&self) -> String {
        let mut out = format!("=== Recommendation ===\nAction: {}", self.advice);
        if self.suggested_amount > 0 {
            out.push_str(&format!(" ({})", self.suggested_amount));
        }
        out.push_str("\n\n");
        out.push_str(&self.reasoning);
        out.push('\n');
        if !self.tips.is_empty() {
            out.push_str("\nTips:\n");
            for tip in &self.tips {
                out.push_str(&format!("* {tip}\n"));
            }
        }
        out
    }
}

/// Recommendation for the player at `idx`, or `None` without hole cards.
pub fn recommend(state: &GameState, idx: usize) -> Option<Recommendation> {
    let hole = state.player(idx).hole_cards()?;
    if state.street() == Street::Preflop {
        Some(preflop(state, idx, &hole))
    } else {
        postflop(state, idx, &hole)
    }
}

fn preflop(state: &GameState, idx: usize, hole: &HoleCards) -> Recommendation {
    let player = state.player(idx);
    let position = player.position().unwrap_or(Position::Button);
    let facing_raise = state.current_bet() > state.big_blind();
    let raisers = state.raiser_count();
    let advice = chart::preflop_advice(hole, position, facing_raise, raisers);

    let mut reasoning = format!("{}\nPosition: {}\n", chart::hand_description(hole), position);
    if facing_raise {
        reasoning.push_str(&format!("Facing a raise from {raisers} player(s)\n"));
    }
    reasoning.push_str(&format!("Recommendation: {advice}"));

    let tier = chart::tier_of(hole);
    let mut tips = vec![chart::position_advice(position).to_string()];
    if tier == Tier::Trash {
        tips.push("Play tight! Folding trash saves chips.".to_string());
    }
    if state.has_limpers() && tier >= Tier::Playable {
        tips.push("Punish limpers with a raise. They often fold or continue weak.".to_string());
    }

    let suggested_amount = match advice {
        Advice::Raise | Advice::Reraise => {
            chart::suggested_raise_size(state.big_blind(), state.has_limpers())
        }
        Advice::Call => state.amount_to_call(idx),
        Advice::Fold | Advice::Check => 0,
    };

    Recommendation {
        advice,
        reasoning,
        tips,
        suggested_amount,
    }
}

fn postflop(state: &GameState, idx: usize, hole: &HoleCards) -> Option<Recommendation> {
    let mut cards = state.board().to_vec();
    cards.extend(hole.cards());
    let made = evaluate(&cards).ok()?.category;
    let odds = OddsSummary::for_player(state, idx)?;
    let to_call = state.amount_to_call(idx);
    let passive = if to_call == 0 { Advice::Check } else { Advice::Fold };

    let (advice, reasoning) = if made >= Category::TwoPair {
        (Advice::Raise, format!("Strong hand: {made}. Bet for value!"))
    } else if made >= Category::OnePair {
        if to_call == 0 {
            (
                Advice::Raise,
                format!("{made}: bet for value. Beginners call too wide."),
            )
        } else if odds.should_call() {
            (
                Advice::Call,
                format!(
                    "{made} with {:.1}% equity against {:.1}% pot odds: a call is fine.",
                    odds.equity * 100.0,
                    odds.pot_odds * 100.0
                ),
            )
        } else {
            (
                Advice::Fold,
                format!(
                    "{made} is too weak. Equity {:.1}% < required {:.1}%. Fold.",
                    odds.equity * 100.0,
                    odds.required_equity * 100.0
                ),
            )
        }
    } else if odds.outs > 0 {
        if odds.should_call() {
            let advice = if to_call == 0 { Advice::Check } else { Advice::Call };
            (
                advice,
                format!(
                    "Draw: {} outs = {:.1}% to improve. The pot odds allow a call.",
                    odds.outs,
                    odds.equity * 100.0
                ),
            )
        } else {
            (
                passive,
                format!(
                    "Draw: {} outs = {:.1}%, but {:.1}% pot odds are too steep. Check or fold.",
                    odds.outs,
                    odds.equity * 100.0,
                    odds.pot_odds * 100.0
                ),
            )
        }
    } else {
        (
            passive,
            "Nothing here, no hand and no draw. Don't bluff beginners!".to_string(),
        )
    };

    let mut tips = Vec::new();
    if made >= Category::OnePair {
        tips.push("Value bet bigger! Beginners call with weak hands.".to_string());
    }
    if made < Category::OnePair && odds.outs == 0 {
        tips.push("Don't bluff often! Beginners don't know how to fold.".to_string());
    }
    if odds.outs > 0 {
        let multiplier = if state.street() == Street::Flop { 4 } else { 2 };
        tips.push(format!(
            "4-2 rule: {} outs x {} = {:.0}% to improve",
            odds.outs,
            multiplier,
            odds.equity * 100.0
        ));
    }

    let suggested_amount = match advice {
        Advice::Raise | Advice::Reraise => (u64::from(state.pot()) * 66 / 100) as u32,
        Advice::Call => to_call,
        Advice::Fold | Advice::Check => 0,
    };

    Some(Recommendation {
        advice,
        reasoning,
        tips,
        suggested_amount,
    })
}

/// Rule-based reminders attached to a finished analysis.
pub fn contextual_feedback(report: &DecisionReport) -> String {
    let mut out = String::new();
    if let Some(hole) = report.hole {
        if chart::tier_of(&hole) == Tier::Trash && report.action != PlayerAction::Fold {
            out.push_str(&format!(
                "\n[Play tight]\n{} is trash. Beginners play far too many hands.\nPatience saves chips!\n",
                hole.notation()
            ));
        }
    }
    let bluff = report.action.is_aggressive() && report.odds.is_some_and(|o| o.outs == 0);
    if bluff && !report.optimal {
        out.push_str(
            "\n[Don't bluff beginners]\nCalling stations call too often.\nBluffing them usually loses.\n",
        );
    }
    if report.street != Street::Preflop && report.optimal && report.advice == Advice::Raise {
        out.push_str("\n[Value bet bigger]\nRight to bet your strong hand!\nBeginners will pay.\n");
    }
    out
}

/// Plain-language explanation of the outs and pot odds behind a decision.
pub fn odds_explanation(odds: &OddsSummary, street: Street) -> String {
    let mut out = String::new();
    if odds.outs > 0 {
        out.push_str(&format!("You have {} outs.\n", odds.outs));
        let pct = (odds.equity * 100.0) as u32;
        match street {
            Street::Flop => out.push_str(&format!(
                "4-2 rule: {} x 4 = {pct}% by the river.\n",
                odds.outs
            )),
            Street::Turn => out.push_str(&format!(
                "4-2 rule: {} x 2 = {pct}% on the river.\n",
                odds.outs
            )),
            _ => {}
        }
    }
    if odds.pot_odds > 0.0 {
        out.push_str(&format!("Pot odds: {:.1}%\n", odds.pot_odds * 100.0));
        if odds.should_call() {
            out.push_str("Your equity beats the pot odds, calling is profitable!\n");
        } else {
            out.push_str("Your equity is below the pot odds, folding is better.\n");
        }
    }
    out
}

/// Judges the human seat's decisions against [`recommend`].
#[derive(Debug, Clone, Default)]
pub struct Coach;

impl Coach {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionAnalyzer for Coach {
    fn analyze(&mut self, state: &GameState, idx: usize, action: PlayerAction) -> DecisionReport {
        let player = state.player(idx);
        let odds = OddsSummary::for_player(state, idx);
        let rec = recommend(state, idx).unwrap_or_else(|| Recommendation {
            advice: if state.can_check(idx) {
                Advice::Check
            } else {
                Advice::Fold
            },
            reasoning: String::new(),
            tips: Vec::new(),
            suggested_amount: 0,
        });
        let optimal = rec.advice.matches(action);

        let mut feedback = if optimal {
            "Correct! ".to_string()
        } else {
            format!(
                "Could be better: {} beats your move ({action}). ",
                rec.advice
            )
        };
        feedback.push('\n');
        feedback.push_str(&rec.reasoning);

        let mut tips = rec.tips;
        let early = player.position().is_some_and(|p| p.is_early());
        if early && action != PlayerAction::Fold && rec.advice == Advice::Fold {
            tips.push("From early position play only premium hands!".to_string());
        }
        if let (Some(amount), true) = (action.amount(), action.is_aggressive()) {
            let pot = state.pot();
            if amount > 0 && pot > 0 {
                let ratio = f64::from(amount) / f64::from(pot);
                if ratio < 0.5 {
                    tips.push(
                        "Small bets (<50% of the pot) give opponents good odds to call."
                            .to_string(),
                    );
                } else if ratio > 2.0 {
                    tips.push(
                        "Overbets (>200% of the pot) often look like a bluff or a monster."
                            .to_string(),
                    );
                }
            }
        }

        let mut report = DecisionReport {
            seat: player.id(),
            street: state.street(),
            hole: player.hole_cards(),
            board: state.board().to_vec(),
            action,
            advice: rec.advice,
            suggested_amount: rec.suggested_amount,
            optimal,
            odds,
            feedback,
            tips,
        };
        let context = contextual_feedback(&report);
        report.feedback.push_str(&context);
        if let (false, Some(odds)) = (optimal, &report.odds) {
            let explained = odds_explanation(odds, report.street);
            if !explained.is_empty() {
                report.feedback.push('\n');
                report.feedback.push_str(&explained);
            }
        }
        debug!(seat = report.seat, advice = %report.advice, optimal, "decision analyzed");
        report
    }
}
