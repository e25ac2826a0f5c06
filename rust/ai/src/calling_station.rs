//! Calls nearly everything and never raises.

use holdem_engine::game::{GameState, Street};
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::chart::{tier_of, Tier};
use crate::AIOpponent;

/// Chance of calling with trash preflop.
const TRASH_CALL_RATE: f64 = 0.40;
/// Chance of calling any postflop bet.
const POSTFLOP_CALL_RATE: f64 = 0.85;

#[derive(Debug, Clone)]
pub struct CallingStation {
    rng: ChaCha20Rng,
}

impl CallingStation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl AIOpponent for CallingStation {
    fn get_action(&mut self, state: &GameState, idx: usize) -> PlayerAction {
        if state.amount_to_call(idx) == 0 {
            return PlayerAction::Check;
        }
        let call_rate = if state.street() == Street::Preflop {
            match state.player(idx).hole_cards().map(|h| tier_of(&h)) {
                Some(Tier::Trash) | None => TRASH_CALL_RATE,
                Some(_) => 1.0,
            }
        } else {
            POSTFLOP_CALL_RATE
        };
        if self.rng.random::<f64>() < call_rate {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "Calling Station"
    }

    fn description(&self) -> &str {
        "Calls almost everything, rarely raises, cannot fold"
    }
}
