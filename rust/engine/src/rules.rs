use crate::errors::GameError;
use crate::game::GameState;
use crate::player::PlayerAction as A;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips needed to call
    Call(u32),
    Bet(u32),
    /// Raise target for the street
    Raise(u32),
    /// Whole remaining stack
    AllIn(u32),
}

impl From<ValidatedAction> for A {
    fn from(v: ValidatedAction) -> Self {
        match v {
            ValidatedAction::Fold => A::Fold,
            ValidatedAction::Check => A::Check,
            ValidatedAction::Call(_) => A::Call,
            ValidatedAction::Bet(a) => A::Bet(a),
            ValidatedAction::Raise(t) => A::Raise(t),
            ValidatedAction::AllIn(_) => A::AllIn,
        }
    }
}

/// Rewrites an action into one that is legal for player `idx`.
///
/// This is the engine's tolerance policy for action sources:
/// - Check facing a bet becomes Fold.
/// - Call with nothing to call becomes Check; a call that needs the whole
///   stack becomes AllIn.
/// - Fold when checking is free is kept as a fold.
/// - Bet when a bet already stands is read as a raise by that many chips.
/// - Raise to no more than the current bet becomes a Call.
/// - Bet or raise amounts that need the whole stack become AllIn.
pub fn normalize_action(state: &GameState, idx: usize, action: A) -> A {
    let player = state.player(idx);
    if !player.can_act() {
        return if player.is_folded() { A::Fold } else { A::Check };
    }
    let stack = player.stack();
    let street_bet = player.street_bet();
    let to_call = state.amount_to_call(idx);

    match action {
        A::Fold => A::Fold,
        A::Check if to_call == 0 => A::Check,
        A::Check => A::Fold,
        A::Call if to_call == 0 => A::Check,
        A::Call if to_call >= stack => A::AllIn,
        A::Call => A::Call,
        A::Bet(amount) if state.current_bet() > 0 => {
            normalize_action(state, idx, A::Raise(street_bet.saturating_add(amount)))
        }
        A::Bet(0) => A::Check,
        A::Bet(amount) if amount >= stack => A::AllIn,
        A::Bet(amount) => A::Bet(amount),
        A::Raise(target) if target <= state.current_bet() => {
            normalize_action(state, idx, A::Call)
        }
        A::Raise(target) if target - street_bet >= stack => A::AllIn,
        A::Raise(target) => A::Raise(target),
        A::AllIn => A::AllIn,
    }
}

/// Strictly validates an action for interactive input.
///
/// Unlike [`normalize_action`] this refuses a check facing a bet and any bet
/// or raise below the minimum. A bet typed while a bet already stands is
/// treated as a raise to that amount. Amounts that would use the whole stack
/// become [`ValidatedAction::AllIn`].
///
/// # Errors
///
/// - [`GameError::IllegalCheck`] when checking is not free
/// - [`GameError::InvalidBetAmount`] when a bet is below the big blind or a
///   raise is below [`GameState::min_raise`]
///
/// # Examples
///
/// ```
/// use holdem_engine::betting::post_blinds;
/// use holdem_engine::errors::GameError;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let players = vec![Player::new(0, "a", 1000), Player::new(1, "b", 1000), Player::new(2, "c", 1000)];
/// let mut state = GameState::new(players, 0, 5, 10).unwrap();
/// post_blinds(&mut state);
///
/// // the button is first to act three-handed
/// assert_eq!(validate_action(&state, 0, PlayerAction::Call), Ok(ValidatedAction::Call(10)));
/// assert_eq!(
///     validate_action(&state, 0, PlayerAction::Check),
///     Err(GameError::IllegalCheck { to_call: 10 })
/// );
/// assert!(matches!(
///     validate_action(&state, 0, PlayerAction::Raise(15)),
///     Err(GameError::InvalidBetAmount { minimum: 20, .. })
/// ));
/// ```
pub fn validate_action(
    state: &GameState,
    idx: usize,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let player = state.player(idx);
    let stack = player.stack();
    let to_call = state.amount_to_call(idx);

    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::IllegalCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) if state.current_bet() > 0 => validate_action(state, idx, A::Raise(amount)),
        A::Bet(amount) => {
            if amount >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < state.big_blind() || amount == 0 {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: state.big_blind().max(1),
                })
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(target) => {
            if target.saturating_sub(player.street_bet()) >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if target < state.min_raise() {
                Err(GameError::InvalidBetAmount {
                    amount: target,
                    minimum: state.min_raise(),
                })
            } else {
                Ok(ValidatedAction::Raise(target))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
    }
}
