//! Winner selection and pot settlement.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::{evaluate, HandStrength};
use crate::player::Player;

/// Outcome of settling a pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    /// Winning players' indices in the hand, in seat order
    pub winners: Vec<usize>,
    /// `(index, chips)` for each winner, same order as `winners`
    pub payouts: Vec<(usize, u32)>,
    /// Best hand shown; `None` when the pot was won uncontested
    pub winning_hand: Option<HandStrength>,
    pub split: bool,
    pub pot: u32,
}

impl ShowdownResult {
    pub fn is_uncontested(&self) -> bool {
        self.winning_hand.is_none()
    }
}

/// Splits `pot` into `winners` shares. Shares differ by at most one chip;
/// the odd chips go to the earliest shares.
pub fn split_pot(pot: u32, winners: usize) -> Vec<u32> {
    if winners == 0 {
        return Vec::new();
    }
    let n = winners as u32;
    let share = pot / n;
    let remainder = (pot % n) as usize;
    (0..winners)
        .map(|i| share + u32::from(i < remainder))
        .collect()
}

/// Evaluates every non-folded player's best hand and returns the indices of
/// all players tied for the best, together with that hand.
///
/// # Errors
///
/// [`GameError::NoPlayersInHand`] if everyone folded,
/// [`GameError::MissingHoleCards`] for a contender without cards, or an
/// evaluation error if the board is too short.
pub fn determine_winners(
    players: &[Player],
    board: &[Card],
) -> Result<(Vec<usize>, HandStrength), GameError> {
    let mut scored = Vec::new();
    for (i, p) in players.iter().enumerate().filter(|(_, p)| p.is_in_hand()) {
        let hole = p
            .hole_cards()
            .ok_or(GameError::MissingHoleCards { seat: p.id() })?;
        let mut cards = board.to_vec();
        cards.extend_from_slice(&hole.cards());
        scored.push((i, evaluate(&cards)?));
    }
    let best = scored
        .iter()
        .map(|(_, h)| h)
        .max()
        .cloned()
        .ok_or(GameError::NoPlayersInHand)?;
    let winners = scored
        .into_iter()
        .filter(|(_, h)| *h == best)
        .map(|(i, _)| i)
        .collect();
    Ok((winners, best))
}

/// Pays the pot out to the winners and empties it.
///
/// A lone remaining player takes everything without a showdown.
pub fn settle(state: &mut GameState) -> Result<ShowdownResult, GameError> {
    let in_hand = state.in_hand_indices();
    let (winners, winning_hand) = match in_hand.as_slice() {
        [] => return Err(GameError::NoPlayersInHand),
        [only] => (vec![*only], None),
        _ => {
            let (w, h) = determine_winners(state.players(), state.board())?;
            (w, Some(h))
        }
    };

    let pot = state.take_pot();
    let payouts: Vec<(usize, u32)> = winners
        .iter()
        .copied()
        .zip(split_pot(pot, winners.len()))
        .collect();
    for &(idx, amount) in &payouts {
        state.player_mut(idx).add_chips(amount);
    }

    let split = winners.len() > 1;
    info!(
        pot,
        winners = ?winners,
        split,
        hand = winning_hand.as_ref().map(|h| h.category.name()).unwrap_or("uncontested"),
        "pot settled"
    );
    Ok(ShowdownResult {
        winners,
        payouts,
        winning_hand,
        split,
        pot,
    })
}
