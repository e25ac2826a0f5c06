use holdem_engine::betting::{apply_action, is_round_complete, post_blinds};
use holdem_engine::errors::GameError;
use holdem_engine::game::GameState;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::rules::{normalize_action, validate_action, ValidatedAction};

fn state_with(stacks: &[u32], button: usize) -> GameState {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(i, format!("p{i}"), s))
        .collect();
    let mut state = GameState::new(players, button, 5, 10).unwrap();
    post_blinds(&mut state);
    state
}

fn act(state: &mut GameState, action: PlayerAction) -> PlayerAction {
    let idx = state.to_act();
    let applied = apply_action(state, idx, action);
    state.next_player();
    applied
}

#[test]
fn blinds_move_chips_and_set_current_bet() {
    let state = state_with(&[1000, 1000, 1000], 0);
    assert_eq!(state.player(1).street_bet(), 5);
    assert_eq!(state.player(2).street_bet(), 10);
    assert_eq!(state.pot(), 15);
    assert_eq!(state.current_bet(), 10);
    assert_eq!(state.actions_this_round(), 0);
}

#[test]
fn short_blind_is_clamped_but_current_bet_is_full() {
    let state = state_with(&[1000, 1000, 4], 0);
    assert_eq!(state.player(2).street_bet(), 4);
    assert!(state.player(2).is_all_in());
    assert_eq!(state.pot(), 9);
    assert_eq!(state.current_bet(), 10);
}

#[test]
fn round_needs_every_actor_to_act_even_when_bets_match() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    state.advance();
    assert!(!is_round_complete(&state));
    act(&mut state, PlayerAction::Check);
    assert!(!is_round_complete(&state));
    act(&mut state, PlayerAction::Check);
    assert!(!is_round_complete(&state));
    act(&mut state, PlayerAction::Check);
    assert!(is_round_complete(&state));
    // asking again changes nothing
    assert!(is_round_complete(&state));
    assert!(is_round_complete(&state));
}

#[test]
fn preflop_big_blind_keeps_the_option() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    act(&mut state, PlayerAction::Call);
    act(&mut state, PlayerAction::Call);
    assert!(!is_round_complete(&state));
    assert_eq!(state.to_act(), 2);
    assert_eq!(act(&mut state, PlayerAction::Check), PlayerAction::Check);
    assert!(is_round_complete(&state));
    assert_eq!(state.pot(), 30);
}

#[test]
fn raise_commits_difference_and_records_aggressor() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    act(&mut state, PlayerAction::Call);
    // small blind raises to 40 having already posted 5
    assert_eq!(state.to_act(), 1);
    assert_eq!(act(&mut state, PlayerAction::Raise(40)), PlayerAction::Raise(40));
    assert_eq!(state.player(1).street_bet(), 40);
    assert_eq!(state.player(1).stack(), 960);
    assert_eq!(state.current_bet(), 40);
    assert_eq!(state.last_aggressor(), Some(1));
    act(&mut state, PlayerAction::Call);
    // three actions taken, but the button still owes chips
    assert!(!is_round_complete(&state));
    act(&mut state, PlayerAction::Call);
    assert!(is_round_complete(&state));
    assert_eq!(state.pot(), 120);
}

#[test]
fn bet_sets_current_bet_to_committed_total() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    for _ in 0..3 {
        act(&mut state, PlayerAction::Call);
    }
    state.advance();
    assert_eq!(act(&mut state, PlayerAction::Bet(25)), PlayerAction::Bet(25));
    assert_eq!(state.current_bet(), 25);
    assert_eq!(state.last_aggressor(), Some(1));
    assert_eq!(state.amount_to_call(2), 25);
}

#[test]
fn all_in_above_current_bet_is_aggressive() {
    let mut state = state_with(&[1000, 1000, 1000, 100], 0);
    assert_eq!(state.to_act(), 3);
    act(&mut state, PlayerAction::AllIn);
    assert_eq!(state.current_bet(), 100);
    assert_eq!(state.last_aggressor(), Some(3));
}

#[test]
fn all_in_for_less_than_the_bet_is_a_call() {
    let mut state = state_with(&[1000, 50, 1000], 0);
    // button raises to 100, small blind only has 45 behind
    act(&mut state, PlayerAction::Raise(100));
    assert_eq!(act(&mut state, PlayerAction::AllIn), PlayerAction::AllIn);
    assert_eq!(state.player(1).street_bet(), 50);
    assert_eq!(state.current_bet(), 100);
    assert_eq!(state.last_aggressor(), Some(0));
}

#[test]
fn illegal_actions_are_normalized() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    // check facing the big blind becomes a fold
    assert_eq!(normalize_action(&state, 0, PlayerAction::Check), PlayerAction::Fold);
    // raise to less than the current bet is just a call
    assert_eq!(normalize_action(&state, 0, PlayerAction::Raise(5)), PlayerAction::Call);
    // more than the stack is all-in
    assert_eq!(normalize_action(&state, 0, PlayerAction::Raise(5000)), PlayerAction::AllIn);
    assert_eq!(normalize_action(&state, 0, PlayerAction::Bet(5000)), PlayerAction::AllIn);
    // a bet facing a bet raises by that many chips
    assert_eq!(normalize_action(&state, 0, PlayerAction::Bet(30)), PlayerAction::Raise(30));

    act(&mut state, PlayerAction::Call);
    act(&mut state, PlayerAction::Call);
    // big blind: nothing to call
    assert_eq!(normalize_action(&state, 2, PlayerAction::Call), PlayerAction::Check);
    // folding with a free check is accepted
    assert_eq!(act(&mut state, PlayerAction::Fold), PlayerAction::Fold);
    assert!(state.player(2).is_folded());
    assert!(is_round_complete(&state));
}

#[test]
fn fold_to_last_player_closes_round() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    act(&mut state, PlayerAction::Fold);
    act(&mut state, PlayerAction::Fold);
    assert_eq!(state.players_in_hand(), 1);
    assert!(is_round_complete(&state));
}

#[test]
fn strict_validation_for_interactive_input() {
    let state = state_with(&[1000, 1000, 100], 0);
    assert_eq!(
        validate_action(&state, 0, PlayerAction::Check),
        Err(GameError::IllegalCheck { to_call: 10 })
    );
    assert_eq!(
        validate_action(&state, 0, PlayerAction::Raise(15)),
        Err(GameError::InvalidBetAmount {
            amount: 15,
            minimum: 20
        })
    );
    assert_eq!(
        validate_action(&state, 0, PlayerAction::Raise(20)),
        Ok(ValidatedAction::Raise(20))
    );
    assert_eq!(
        validate_action(&state, 0, PlayerAction::Raise(1000)),
        Ok(ValidatedAction::AllIn(1000))
    );
    assert_eq!(
        validate_action(&state, 0, PlayerAction::Call),
        Ok(ValidatedAction::Call(10))
    );
    // big blind has 90 behind and nothing to call
    assert_eq!(
        validate_action(&state, 2, PlayerAction::Call),
        Ok(ValidatedAction::Check)
    );
    assert_eq!(
        PlayerAction::from(ValidatedAction::AllIn(90)),
        PlayerAction::AllIn
    );
}

#[test]
fn strict_bet_must_reach_big_blind() {
    let mut state = state_with(&[1000, 1000, 1000], 0);
    for _ in 0..3 {
        act(&mut state, PlayerAction::Call);
    }
    state.advance();
    assert_eq!(
        validate_action(&state, 1, PlayerAction::Bet(5)),
        Err(GameError::InvalidBetAmount {
            amount: 5,
            minimum: 10
        })
    );
    assert_eq!(
        validate_action(&state, 1, PlayerAction::Bet(10)),
        Ok(ValidatedAction::Bet(10))
    );
}
