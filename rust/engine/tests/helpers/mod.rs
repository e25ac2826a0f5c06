//! Shared fixtures for engine integration tests.
//!
//! - `StackedDealer` deals a fixed card order so a hand's outcome is known.
//! - `stacked_hand` lays hole cards and board out in the order the engine
//!   deals them (two passes starting left of the button, a burn before each
//!   street).
//! - `scripted` turns a list of actions into an `ActionSource`.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use holdem_engine::cards::{full_deck, parse_cards, Card};
use holdem_engine::deck::Dealer;
use holdem_engine::errors::GameError;
use holdem_engine::events::GameEvent;
use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction;
use holdem_engine::source::ActionSource;

pub struct StackedDealer {
    cards: VecDeque<Card>,
}

impl StackedDealer {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl Dealer for StackedDealer {
    fn shuffle(&mut self) {}

    fn deal_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::DeckExhausted)
    }
}

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card notation")
}

/// `holes[i]` are the two cards for hand index `i`.
pub fn stacked_hand(holes: &[&str], board: &str, button: usize) -> StackedDealer {
    let holes: Vec<Vec<Card>> = holes.iter().map(|h| cards(h)).collect();
    let board = cards(board);
    let used: HashSet<Card> = holes.iter().flatten().chain(board.iter()).copied().collect();
    let mut burns = full_deck().into_iter().filter(|c| !used.contains(c));

    let n = holes.len();
    let mut order = Vec::new();
    for round in 0..2 {
        for k in 1..=n {
            order.push(holes[(button + k) % n][round]);
        }
    }
    let mut next_burn = || burns.next().expect("spare card for burn");
    order.push(next_burn());
    order.extend_from_slice(&board[..3]);
    order.push(next_burn());
    order.push(board[3]);
    order.push(next_burn());
    order.push(board[4]);
    StackedDealer::new(order)
}

/// Plays `actions` in order, then calls (which is a check when free).
pub fn scripted(actions: Vec<PlayerAction>) -> impl ActionSource + 'static {
    let mut queue: VecDeque<PlayerAction> = actions.into();
    move |_: &GameState, _: usize| queue.pop_front().unwrap_or(PlayerAction::Call)
}

pub fn always(action: PlayerAction) -> impl ActionSource + 'static {
    move |_: &GameState, _: usize| action
}

/// Collects every emitted event.
pub fn recorder() -> (Arc<Mutex<Vec<GameEvent>>>, impl FnMut(&GameEvent) + Send + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink_log = Arc::clone(&log);
    (log, move |e: &GameEvent| {
        sink_log.lock().expect("event log").push(e.clone())
    })
}
