use holdem_engine::cards::parse_cards;
use holdem_engine::errors::GameError;
use holdem_engine::game::{GameState, Street};
use holdem_engine::player::{positions_for_player_count, Player, PlayerAction, Position};

fn table(n: usize, stack: u32) -> Vec<Player> {
    (0..n).map(|i| Player::new(i, format!("p{i}"), stack)).collect()
}

#[test]
fn commit_clamps_to_stack_and_marks_all_in() {
    let mut p = Player::new(0, "hero", 50);
    assert_eq!(p.commit(20), 20);
    assert_eq!(p.stack(), 30);
    assert!(!p.is_all_in());
    assert_eq!(p.commit(100), 30);
    assert_eq!(p.stack(), 0);
    assert_eq!(p.street_bet(), 50);
    assert_eq!(p.hand_total(), 50);
    assert!(p.is_all_in());
    assert!(p.is_in_hand());
    assert!(!p.can_act());
}

#[test]
fn folded_player_has_no_claim() {
    let mut p = Player::new(0, "hero", 50);
    p.fold();
    assert!(!p.is_in_hand());
    assert!(!p.can_act());
}

#[test]
fn player_receives_two_hole_cards() {
    let mut p = Player::new(0, "hero", 1000);
    let c = parse_cards("Ks As").unwrap();
    p.give_cards(c[0], c[1]);
    let hole = p.hole_cards().unwrap();
    assert_eq!(hole.high(), c[1]);
    assert_eq!(hole.notation(), "AKs");
}

#[test]
fn action_kinds() {
    assert!(PlayerAction::Raise(60).is_aggressive());
    assert!(PlayerAction::AllIn.is_aggressive());
    assert!(PlayerAction::Call.is_passive());
    assert!(!PlayerAction::Fold.is_passive());
    assert!(!PlayerAction::Fold.is_aggressive());
    assert_eq!(PlayerAction::Bet(40).amount(), Some(40));
    assert_eq!(PlayerAction::Check.amount(), None);
}

#[test]
fn position_tables_by_player_count() {
    use Position::*;
    assert_eq!(positions_for_player_count(2).unwrap(), vec![Button, BigBlind]);
    assert_eq!(
        positions_for_player_count(3).unwrap(),
        vec![Button, SmallBlind, BigBlind]
    );
    assert_eq!(
        positions_for_player_count(6).unwrap(),
        vec![SmallBlind, BigBlind, MiddlePosition2, Hijack, Cutoff, Button]
    );
    assert_eq!(
        positions_for_player_count(9).unwrap(),
        vec![
            SmallBlind,
            BigBlind,
            UnderTheGun,
            UtgPlus1,
            MiddlePosition1,
            MiddlePosition2,
            Hijack,
            Cutoff,
            Button
        ]
    );
    assert_eq!(
        positions_for_player_count(1),
        Err(GameError::InvalidPlayerCount { count: 1 })
    );
    assert_eq!(
        positions_for_player_count(10),
        Err(GameError::InvalidPlayerCount { count: 10 })
    );
}

#[test]
fn positions_follow_the_button() {
    let state = GameState::new(table(6, 100), 2, 5, 10).unwrap();
    let pos: Vec<Position> = state
        .players()
        .iter()
        .map(|p| p.position().unwrap())
        .collect();
    use Position::*;
    assert_eq!(
        pos,
        vec![Hijack, Cutoff, Button, SmallBlind, BigBlind, MiddlePosition2]
    );
    assert!(Hijack.is_late() && MiddlePosition2.is_middle() && SmallBlind.is_blind());
    assert_eq!(Cutoff.to_string(), "CO");
}

#[test]
fn heads_up_button_is_small_blind_and_acts_first() {
    let state = GameState::new(table(2, 100), 1, 5, 10).unwrap();
    assert_eq!(state.small_blind_index(), 1);
    assert_eq!(state.big_blind_index(), 0);
    assert_eq!(state.to_act(), 1);
    assert_eq!(state.player(1).position(), Some(Position::Button));
    assert_eq!(state.player(0).position(), Some(Position::BigBlind));
}

#[test]
fn preflop_starts_three_seats_after_button() {
    let state = GameState::new(table(5, 100), 1, 5, 10).unwrap();
    assert_eq!(state.small_blind_index(), 2);
    assert_eq!(state.big_blind_index(), 3);
    assert_eq!(state.to_act(), 4);
    let three = GameState::new(table(3, 100), 0, 5, 10).unwrap();
    assert_eq!(three.to_act(), 0);
}

#[test]
fn state_needs_two_to_nine_players() {
    assert_eq!(
        GameState::new(table(1, 100), 0, 5, 10).err(),
        Some(GameError::NotEnoughPlayers { count: 1 })
    );
    assert_eq!(
        GameState::new(table(10, 100), 0, 5, 10).err(),
        Some(GameError::InvalidPlayerCount { count: 10 })
    );
}

#[test]
fn advance_walks_streets_and_resets_round() {
    let mut state = GameState::new(table(3, 100), 0, 5, 10).unwrap();
    holdem_engine::betting::post_blinds(&mut state);
    holdem_engine::betting::apply_action(&mut state, 0, PlayerAction::Raise(30));
    state.next_player();
    assert_eq!(state.current_bet(), 30);
    assert_eq!(state.last_aggressor(), Some(0));
    assert_eq!(state.actions_this_round(), 1);

    state.advance();
    assert_eq!(state.street(), Street::Flop);
    assert_eq!(state.current_bet(), 0);
    assert_eq!(state.actions_this_round(), 0);
    assert_eq!(state.last_aggressor(), None);
    assert!(state.players().iter().all(|p| p.street_bet() == 0));
    // postflop starts left of the button
    assert_eq!(state.to_act(), 1);
    // chips already committed stay in the pot
    assert_eq!(state.pot(), 45);

    state.advance();
    state.advance();
    assert_eq!(state.street(), Street::River);
    state.advance();
    assert_eq!(state.street(), Street::Showdown);
    state.advance();
    assert_eq!(state.street(), Street::Showdown);
}

#[test]
fn next_player_skips_folded_and_all_in_seats() {
    let mut players = table(4, 100);
    players[2] = Player::new(2, "short", 5);
    let mut state = GameState::new(players, 0, 5, 10).unwrap();
    holdem_engine::betting::post_blinds(&mut state);
    // seat 2 posted the big blind all-in; seat 3 is first
    assert_eq!(state.to_act(), 3);
    holdem_engine::betting::apply_action(&mut state, 3, PlayerAction::Fold);
    assert_eq!(state.next_player(), Some(0));
    assert_eq!(state.next_player(), Some(1));
    assert_eq!(state.next_player(), Some(0));
    assert_eq!(state.actions_this_round(), 3);
}

#[test]
fn next_player_counts_even_when_nobody_can_act() {
    let mut state = GameState::new(table(2, 10), 0, 5, 10).unwrap();
    holdem_engine::betting::post_blinds(&mut state);
    holdem_engine::betting::apply_action(&mut state, 0, PlayerAction::AllIn);
    assert_eq!(state.players_can_act(), 0);
    let before = state.actions_this_round();
    assert_eq!(state.next_player(), None);
    assert_eq!(state.actions_this_round(), before + 1);
}

#[test]
fn betting_helpers_report_table_shape() {
    let mut state = GameState::new(table(4, 1000), 0, 5, 10).unwrap();
    holdem_engine::betting::post_blinds(&mut state);
    // UTG is seat 3
    assert_eq!(state.to_act(), 3);
    assert_eq!(state.amount_to_call(3), 10);
    assert!(!state.can_check(3));
    assert_eq!(state.min_raise(), 20);
    assert!(!state.has_limpers());
    holdem_engine::betting::apply_action(&mut state, 3, PlayerAction::Call);
    assert!(state.has_limpers());
    assert_eq!(state.raiser_count(), 0);
    holdem_engine::betting::apply_action(&mut state, 0, PlayerAction::Raise(40));
    assert_eq!(state.raiser_count(), 1);
    assert_eq!(state.in_hand_indices(), vec![0, 1, 2, 3]);
}
