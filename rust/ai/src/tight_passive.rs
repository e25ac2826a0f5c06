//! Plays few hands and never raises.

use holdem_engine::game::{GameState, Street};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::player::PlayerAction;

use crate::chart::{tier_of, Tier};
use crate::AIOpponent;

/// Continues preflop only with strong or premium hands, and postflop only
/// with two pair or better. Deterministic.
#[derive(Debug, Clone, Default)]
pub struct TightPassive;

impl TightPassive {
    pub fn new() -> Self {
        Self
    }

    fn wants_to_continue(state: &GameState, idx: usize) -> bool {
        let Some(hole) = state.player(idx).hole_cards() else {
            return false;
        };
        if state.street() == Street::Preflop {
            return tier_of(&hole) >= Tier::Strong;
        }
        let mut cards = state.board().to_vec();
        cards.extend(hole.cards());
        evaluate(&cards).is_ok_and(|h| h.category >= Category::TwoPair)
    }
}

impl AIOpponent for TightPassive {
    fn get_action(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        if state.amount_to_call(idx) == 0 {
            PlayerAction::Check
        } else if Self::wants_to_continue(state, idx) {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "Tight-Passive"
    }

    fn description(&self) -> &str {
        "Plays few hands, never raises, easy to bluff"
    }
}
