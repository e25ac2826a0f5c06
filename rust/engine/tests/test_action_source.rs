use std::sync::mpsc;
use std::time::Duration;

use holdem_engine::betting::post_blinds;
use holdem_engine::game::GameState;
use holdem_engine::player::{Player, PlayerAction};
use holdem_engine::source::{ActionSource, ChannelActionSource, SeatReply};

fn heads_up() -> GameState {
    let players = vec![Player::new(0, "hero", 1000), Player::new(1, "villain", 1000)];
    GameState::new(players, 0, 5, 10).unwrap()
}

fn reply(request: u64, action: PlayerAction) -> SeatReply {
    SeatReply { request, action }
}

#[test]
fn answer_for_the_current_prompt_is_used() {
    let (tx, rx) = mpsc::channel();
    let mut source = ChannelActionSource::new(rx, Duration::from_secs(5));
    tx.send(reply(1, PlayerAction::Bet(40))).unwrap();
    assert_eq!(source.decide(&heads_up(), 0), PlayerAction::Bet(40));
    tx.send(reply(2, PlayerAction::Check)).unwrap();
    assert_eq!(source.decide(&heads_up(), 0), PlayerAction::Check);
}

#[test]
fn timeout_checks_when_free_and_folds_facing_a_bet() {
    let (_tx, rx) = mpsc::channel();
    let mut source = ChannelActionSource::new(rx, Duration::from_millis(20));
    assert_eq!(source.decide(&heads_up(), 0), PlayerAction::Check);

    let mut state = heads_up();
    post_blinds(&mut state);
    assert_eq!(source.decide(&state, 0), PlayerAction::Fold);
}

#[test]
fn late_answer_does_not_carry_over_to_the_next_prompt() {
    let (tx, rx) = mpsc::channel();
    let mut source = ChannelActionSource::new(rx, Duration::from_millis(20));
    let mut state = heads_up();
    assert_eq!(source.decide(&state, 0), PlayerAction::Check);

    // the human answers prompt 1 after it already timed out
    tx.send(reply(1, PlayerAction::Raise(900))).unwrap();
    state.advance();
    assert_eq!(source.decide(&state, 0), PlayerAction::Check);

    // a late answer queued ahead of the real one is skipped
    tx.send(reply(2, PlayerAction::Raise(900))).unwrap();
    tx.send(reply(3, PlayerAction::Bet(20))).unwrap();
    assert_eq!(source.decide(&state, 0), PlayerAction::Bet(20));
}

#[test]
fn closed_channel_falls_back_at_once() {
    let (tx, rx) = mpsc::channel::<SeatReply>();
    drop(tx);
    let mut source = ChannelActionSource::new(rx, Duration::from_secs(60));
    assert_eq!(source.decide(&heads_up(), 1), PlayerAction::Check);
}
