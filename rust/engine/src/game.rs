use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{positions_for_player_count, Player};
use crate::pot::Pot;

/// Betting street of a hand. `Showdown` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    Showdown,
}

impl Street {
    /// The following street. `Showdown` stays where it is.
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards dealt when this street opens.
    pub fn board_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable state of a single hand.
///
/// Players are indexed by their place in this hand's seat list (only seats
/// that started the hand with chips). `Player::id` keeps the table seat.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    board: Vec<Card>,
    street: Street,
    pot: Pot,
    current_bet: u32,
    button: usize,
    to_act: usize,
    small_blind: u32,
    big_blind: u32,
    last_aggressor: Option<usize>,
    actions_this_round: usize,
}

impl GameState {
    /// Builds a fresh preflop state. Players are reset for the new hand and
    /// get positions relative to `button`. Blinds are not posted here.
    ///
    /// # Errors
    ///
    /// [`GameError::NotEnoughPlayers`] below two players,
    /// [`GameError::InvalidPlayerCount`] above nine.
    pub fn new(
        mut players: Vec<Player>,
        button: usize,
        small_blind: u32,
        big_blind: u32,
    ) -> Result<Self, GameError> {
        let n = players.len();
        if n < 2 {
            return Err(GameError::NotEnoughPlayers { count: n });
        }
        let positions = positions_for_player_count(n)?;
        let button = button % n;
        for (i, p) in players.iter_mut().enumerate() {
            p.reset_for_new_hand();
            let offset = (i + n - button) % n;
            // two and three handed lists already start at the button
            let slot = if n <= 3 { offset } else { (offset + n - 1) % n };
            p.set_position(positions[slot]);
        }
        let mut state = Self {
            players,
            board: Vec::with_capacity(5),
            street: Street::Preflop,
            pot: Pot::new(),
            current_bet: 0,
            button,
            to_act: 0,
            small_blind,
            big_blind,
            last_aggressor: None,
            actions_this_round: 0,
        };
        state.reset_round();
        Ok(state)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, idx: usize) -> &Player {
        &self.players[idx]
    }

    pub(crate) fn player_mut(&mut self, idx: usize) -> &mut Player {
        &mut self.players[idx]
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn pot(&self) -> u32 {
        self.pot.total()
    }

    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }

    pub fn button(&self) -> usize {
        self.button
    }

    pub fn to_act(&self) -> usize {
        self.to_act
    }

    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    pub fn actions_this_round(&self) -> usize {
        self.actions_this_round
    }

    /// Heads-up the button posts the small blind.
    pub fn small_blind_index(&self) -> usize {
        if self.players.len() == 2 {
            self.button
        } else {
            (self.button + 1) % self.players.len()
        }
    }

    pub fn big_blind_index(&self) -> usize {
        (self.small_blind_index() + 1) % self.players.len()
    }

    pub fn amount_to_call(&self, idx: usize) -> u32 {
        self.current_bet
            .saturating_sub(self.players[idx].street_bet())
    }

    pub fn can_check(&self, idx: usize) -> bool {
        self.amount_to_call(idx) == 0
    }

    /// Smallest legal raise target.
    pub fn min_raise(&self) -> u32 {
        self.current_bet + self.big_blind
    }

    /// Players whose street commitment is above the big blind.
    pub fn raiser_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.street_bet() > self.big_blind)
            .count()
    }

    /// Someone other than the big blind has just called the big blind.
    pub fn has_limpers(&self) -> bool {
        let bb = self.big_blind_index();
        self.players
            .iter()
            .enumerate()
            .any(|(i, p)| i != bb && p.is_in_hand() && p.street_bet() == self.big_blind)
    }

    pub fn players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    pub fn players_can_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Indices of players that have not folded, in seat order.
    pub fn in_hand_indices(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&i| self.players[i].is_in_hand())
            .collect()
    }

    /// Moves `amount` (clamped to the stack) from player `idx` into the pot.
    pub(crate) fn commit(&mut self, idx: usize, amount: u32) -> u32 {
        let actual = self.players[idx].commit(amount);
        self.pot.add(actual);
        actual
    }

    pub(crate) fn raise_current_bet_to(&mut self, idx: usize) {
        self.current_bet = self.players[idx].street_bet();
        self.last_aggressor = Some(idx);
    }

    pub(crate) fn set_current_bet(&mut self, amount: u32) {
        self.current_bet = amount;
    }

    pub(crate) fn take_pot(&mut self) -> u32 {
        self.pot.take_all()
    }

    pub fn deal_hole_cards(&mut self, idx: usize, a: Card, b: Card) {
        self.players[idx].give_cards(a, b);
    }

    /// Appends community cards. The board never shrinks within a hand.
    pub fn deal_board(&mut self, cards: &[Card]) {
        self.board.extend_from_slice(cards);
    }

    /// Moves exactly one street forward and opens a new betting round.
    pub fn advance(&mut self) {
        self.street = self.street.next();
        self.reset_round();
        debug!(street = %self.street, to_act = self.to_act, "street advanced");
    }

    /// Passes the turn to the next seat that can act, looking at most once
    /// around the table. The round's action counter always moves, even when
    /// nobody is left to act.
    pub fn next_player(&mut self) -> Option<usize> {
        self.actions_this_round += 1;
        let n = self.players.len();
        for step in 1..=n {
            let idx = (self.to_act + step) % n;
            if self.players[idx].can_act() {
                self.to_act = idx;
                return Some(idx);
            }
        }
        debug!(actions = self.actions_this_round, "no player left to act");
        None
    }

    fn reset_round(&mut self) {
        self.current_bet = 0;
        self.actions_this_round = 0;
        self.last_aggressor = None;
        for p in &mut self.players {
            p.reset_street_bet();
        }
        let n = self.players.len();
        self.to_act = match self.street {
            Street::Preflop => (self.big_blind_index() + 1) % n,
            _ => (self.button + 1) % n,
        };
        self.skip_to_actor();
    }

    /// Moves the turn pointer forward to the first seat that can act,
    /// without counting an action. Stays put if nobody can.
    pub(crate) fn skip_to_actor(&mut self) {
        let n = self.players.len();
        let start = self.to_act;
        self.to_act = (0..n)
            .map(|step| (start + step) % n)
            .find(|&i| self.players[i].can_act())
            .unwrap_or(start);
    }
}
