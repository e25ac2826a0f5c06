//! Chip movement for blinds and player actions, and the round-closure rule.

use tracing::debug;

use crate::game::GameState;
use crate::player::PlayerAction;
use crate::rules::normalize_action;

/// Posts both blinds. Each blind is clamped to the poster's stack and the
/// current bet becomes the full big blind regardless.
pub fn post_blinds(state: &mut GameState) {
    let sb_idx = state.small_blind_index();
    let bb_idx = state.big_blind_index();
    let sb = state.commit(sb_idx, state.small_blind());
    let bb = state.commit(bb_idx, state.big_blind());
    state.set_current_bet(state.big_blind());
    state.skip_to_actor();
    debug!(sb_idx, bb_idx, sb, bb, "blinds posted");
}

/// Applies `action` for player `idx` and returns the action actually taken.
///
/// The action is first normalized (see [`normalize_action`]), so a
/// malformed request is clamped rather than rejected. This does not move the
/// turn pointer.
pub fn apply_action(state: &mut GameState, idx: usize, action: PlayerAction) -> PlayerAction {
    let action = normalize_action(state, idx, action);
    match action {
        PlayerAction::Fold => state.player_mut(idx).fold(),
        PlayerAction::Check => {}
        PlayerAction::Call => {
            let to_call = state.amount_to_call(idx);
            state.commit(idx, to_call);
        }
        PlayerAction::Bet(amount) => {
            state.commit(idx, amount);
            state.raise_current_bet_to(idx);
        }
        PlayerAction::Raise(target) => {
            let add = target.saturating_sub(state.player(idx).street_bet());
            state.commit(idx, add);
            state.raise_current_bet_to(idx);
        }
        PlayerAction::AllIn => {
            let stack = state.player(idx).stack();
            state.commit(idx, stack);
            if state.player(idx).street_bet() > state.current_bet() {
                state.raise_current_bet_to(idx);
            }
        }
    }
    debug!(
        idx,
        ?action,
        pot = state.pot(),
        current_bet = state.current_bet(),
        "action applied"
    );
    action
}

/// True once the current betting round is closed.
///
/// Closed when at most one player is left in the hand, when nobody can act,
/// or when every player who can act has matched the current bet *and* at
/// least that many actions have been taken this round.
pub fn is_round_complete(state: &GameState) -> bool {
    if state.players_in_hand() <= 1 {
        return true;
    }
    let actors: Vec<_> = state.players().iter().filter(|p| p.can_act()).collect();
    if actors.is_empty() {
        return true;
    }
    let matched = actors
        .iter()
        .all(|p| p.street_bet() == state.current_bet());
    matched && state.actions_this_round() >= actors.len()
}
