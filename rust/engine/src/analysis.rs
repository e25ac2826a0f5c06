//! Decision-quality analysis interface.
//!
//! The engine only knows the [`DecisionAnalyzer`] seam; concrete coaching
//! logic lives outside this crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::game::{GameState, Street};
use crate::odds::OddsSummary;
use crate::player::PlayerAction;

/// Recommended kind of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Advice {
    Fold,
    Check,
    Call,
    Raise,
    Reraise,
}

impl Advice {
    pub fn name(self) -> &'static str {
        match self {
            Advice::Fold => "Fold",
            Advice::Check => "Check",
            Advice::Call => "Call",
            Advice::Raise => "Raise",
            Advice::Reraise => "Re-raise",
        }
    }

    /// Whether `action` follows this advice. A check counts as following
    /// call advice, and any bet, raise or all-in follows raise advice.
    pub fn matches(self, action: PlayerAction) -> bool {
        match self {
            Advice::Fold => action == PlayerAction::Fold,
            Advice::Check => action == PlayerAction::Check,
            Advice::Call => matches!(action, PlayerAction::Call | PlayerAction::Check),
            Advice::Raise | Advice::Reraise => action.is_aggressive(),
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verdict on one decision, with the odds behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    /// Table seat that acted
    pub seat: usize,
    pub street: Street,
    pub hole: Option<HoleCards>,
    pub board: Vec<Card>,
    pub action: PlayerAction,
    pub advice: Advice,
    /// Suggested chips for a call or raise, 0 otherwise
    pub suggested_amount: u32,
    pub optimal: bool,
    pub odds: Option<OddsSummary>,
    pub feedback: String,
    pub tips: Vec<String>,
}

impl DecisionReport {
    pub fn verdict(&self) -> String {
        if self.optimal {
            "Well played!".to_string()
        } else {
            format!("Not optimal, {} was better", self.advice.name())
        }
    }
}

/// Judges a decision. Receives the state as it was *before* the action was
/// applied and must not change anything about the hand.
pub trait DecisionAnalyzer: Send {
    fn analyze(&mut self, state: &GameState, idx: usize, action: PlayerAction) -> DecisionReport;
}
