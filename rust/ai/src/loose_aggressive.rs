//! Plays most hands and bets big.

use holdem_engine::game::{GameState, Street};
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::chart::{tier_of, Tier};
use crate::{all_in_total, AIOpponent};

/// Chance of giving up with trash preflop.
const TRASH_GIVE_UP_RATE: f64 = 0.40;
/// Chance of betting or raising postflop.
const POSTFLOP_AGGRESSION: f64 = 0.60;

#[derive(Debug, Clone)]
pub struct LooseAggressive {
    rng: ChaCha20Rng,
}

impl LooseAggressive {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn passive(state: &GameState, idx: usize) -> PlayerAction {
        if state.amount_to_call(idx) == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }

    // Raises to the current bet plus 3-5 big blinds.
    fn preflop(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        let trash = state
            .player(idx)
            .hole_cards()
            .is_none_or(|h| tier_of(&h) == Tier::Trash);
        if trash && self.rng.random::<f64>() < TRASH_GIVE_UP_RATE {
            return Self::passive(state, idx);
        }
        let multiplier = self.rng.random_range(3..=5);
        let target = state.current_bet() + state.big_blind() * multiplier;
        if target >= all_in_total(state, idx) {
            PlayerAction::AllIn
        } else {
            PlayerAction::Raise(target)
        }
    }

    // Bets 75-150% of the pot unopened, otherwise raises by the call plus half the pot.
    fn postflop(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        if self.rng.random::<f64>() >= POSTFLOP_AGGRESSION {
            return Self::passive(state, idx);
        }
        let pot = state.pot();
        if state.amount_to_call(idx) == 0 {
            let fraction = self.rng.random_range(0.75..1.5);
            let size = ((f64::from(pot) * fraction) as u32).max(state.big_blind());
            if size >= state.player(idx).stack() {
                PlayerAction::AllIn
            } else {
                PlayerAction::Bet(size)
            }
        } else {
            let target = state.current_bet() + (pot / 2).max(state.big_blind());
            if target >= all_in_total(state, idx) {
                PlayerAction::AllIn
            } else {
                PlayerAction::Raise(target)
            }
        }
    }
}

impl AIOpponent for LooseAggressive {
    fn get_action(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        if state.street() == Street::Preflop {
            self.preflop(state, idx)
        } else {
            self.postflop(state, idx)
        }
    }

    fn name(&self) -> &str {
        "Loose-Aggressive"
    }

    fn description(&self) -> &str {
        "Plays lots of hands aggressively, bluffs often, bets big"
    }
}
