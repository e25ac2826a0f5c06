use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::analysis::DecisionAnalyzer;
use crate::betting::{apply_action, is_round_complete, post_blinds};
use crate::cards::Card;
use crate::deck::{Dealer, Deck};
use crate::errors::GameError;
use crate::events::{EventSink, GameEvent};
use crate::game::{GameState, Street};
use crate::hand::HandStrength;
use crate::logger::ActionRecord;
use crate::player::Player;
use crate::rules::normalize_action;
use crate::showdown::settle;
use crate::source::ActionSource;

/// Stakes and timing for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// How long the human seat may think before it is checked or folded
    pub human_timeout: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 5,
            big_blind: 10,
            human_timeout: Duration::from_secs(300),
        }
    }
}

/// Summary of a finished hand. Seats are table seats, not hand indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u64,
    pub button: usize,
    pub board: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub winners: Vec<usize>,
    pub payouts: Vec<(usize, u32)>,
    /// `None` when everyone else folded
    pub winning_hand: Option<HandStrength>,
    pub split: bool,
    pub pot: u32,
    /// Street the hand ended on
    pub street: Street,
}

/// Core game engine: runs hands for a fixed table of seats.
///
/// Each seat keeps its chips between hands and has its own
/// [`ActionSource`]. At most one seat is the human seat; only its decisions
/// are passed to the [`DecisionAnalyzer`].
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
/// use holdem_engine::engine::{Engine, TableConfig};
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::PlayerAction;
///
/// let mut engine = Engine::new(Deck::new_with_seed(7), TableConfig::default());
/// for name in ["a", "b", "c"] {
///     engine.add_seat(name, 1000, |_: &GameState, _: usize| PlayerAction::Call);
/// }
///
/// let result = engine.play_hand().unwrap();
/// let total: u32 = engine.players().iter().map(|p| p.stack()).sum();
/// assert_eq!(total, 3000);
/// assert_eq!(result.board.len(), 5);
/// assert_eq!(engine.button(), 1);
/// ```
pub struct Engine<D: Dealer = Deck> {
    dealer: D,
    config: TableConfig,
    players: Vec<Player>,
    sources: Vec<Box<dyn ActionSource>>,
    button: usize,
    human: Option<usize>,
    analyzer: Option<Box<dyn DecisionAnalyzer>>,
    sinks: Vec<Box<dyn EventSink>>,
    hands_played: u64,
}

impl<D: Dealer> Engine<D> {
    pub fn new(dealer: D, config: TableConfig) -> Self {
        Self {
            dealer,
            config,
            players: Vec::new(),
            sources: Vec::new(),
            button: 0,
            human: None,
            analyzer: None,
            sinks: Vec::new(),
            hands_played: 0,
        }
    }

    /// Seats an autonomous player and returns the seat number.
    pub fn add_seat(
        &mut self,
        name: impl Into<String>,
        stack: u32,
        source: impl ActionSource + 'static,
    ) -> usize {
        let seat = self.players.len();
        self.players.push(Player::new(seat, name, stack));
        self.sources.push(Box::new(source));
        seat
    }

    /// Seats the human player. A later call moves the human role to the new
    /// seat.
    pub fn add_human_seat(
        &mut self,
        name: impl Into<String>,
        stack: u32,
        source: impl ActionSource + 'static,
    ) -> usize {
        let seat = self.add_seat(name, stack, source);
        self.human = Some(seat);
        seat
    }

    pub fn set_analyzer(&mut self, analyzer: impl DecisionAnalyzer + 'static) {
        self.analyzer = Some(Box::new(analyzer));
    }

    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn button(&self) -> usize {
        self.button
    }

    pub fn human_seat(&self) -> Option<usize> {
        self.human
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Seats that still have chips.
    pub fn funded_seats(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    /// Plays one complete hand and rotates the button.
    ///
    /// # Errors
    ///
    /// Any [`GameError`] aborts the hand. Seat stacks are left exactly as they
    /// were before the hand started and the button does not move.
    pub fn play_hand(&mut self) -> Result<HandResult, GameError> {
        self.hands_played += 1;
        let hand_number = self.hands_played;
        match self.run_hand(hand_number) {
            Ok(result) => {
                // rotate from the seat that dealt, which skips busted seats
                self.button = (result.button + 1) % self.players.len();
                Ok(result)
            }
            Err(e) => {
                error!(hand = hand_number, error = %e, "hand aborted");
                self.emit(GameEvent::Message(format!(
                    "Hand #{hand_number} aborted due to an internal error"
                )));
                Err(e)
            }
        }
    }

    fn run_hand(&mut self, hand_number: u64) -> Result<HandResult, GameError> {
        let active: Vec<Player> = self
            .players
            .iter()
            .filter(|p| p.stack() > 0)
            .cloned()
            .collect();
        if active.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: active.len(),
            });
        }
        let chips: u64 = active.iter().map(|p| u64::from(p.stack())).sum();
        if chips > u64::from(u32::MAX) {
            return Err(GameError::ChipOverflow { total: chips });
        }
        // first funded seat at or after the table button
        let button = active
            .iter()
            .position(|p| p.id() >= self.button)
            .unwrap_or(0);
        let mut state = GameState::new(active, button, self.config.small_blind, self.config.big_blind)?;
        let button_seat = state.player(button).id();

        self.dealer.shuffle();
        post_blinds(&mut state);
        self.emit(GameEvent::Message(format!(
            "Hand #{hand_number}: {} has the button, blinds {}/{}",
            state.player(button).name(),
            state.small_blind(),
            state.big_blind()
        )));

        let n = state.players().len();
        let mut hole: Vec<Vec<Card>> = vec![Vec::with_capacity(2); n];
        for _ in 0..2 {
            for k in 1..=n {
                hole[(button + k) % n].push(self.dealer.deal_one()?);
            }
        }
        for (i, cards) in hole.iter().enumerate() {
            state.deal_hole_cards(i, cards[0], cards[1]);
        }
        self.emit_state(&state);

        let mut actions = Vec::new();
        loop {
            self.run_betting_round(&mut state, &mut actions);
            if state.players_in_hand() <= 1 || state.street() == Street::River {
                break;
            }
            state.advance();
            self.dealer.burn()?;
            let cards = self.dealer.deal_n(state.street().board_cards())?;
            state.deal_board(&cards);
            self.emit(GameEvent::Message(format!(
                "*** {} *** {}",
                state.street().name().to_uppercase(),
                format_cards(state.board())
            )));
            self.emit_state(&state);
        }
        if state.players_in_hand() > 1 {
            state.advance();
            for i in state.in_hand_indices() {
                let p = state.player(i);
                if let Some(h) = p.hole_cards() {
                    self.emit(GameEvent::Message(format!("{} shows {}", p.name(), h)));
                }
            }
        }

        let outcome = settle(&mut state)?;
        let seat_of = |i: usize| state.player(i).id();
        let result = HandResult {
            hand_number,
            button: button_seat,
            board: state.board().to_vec(),
            actions,
            winners: outcome.winners.iter().map(|&i| seat_of(i)).collect(),
            payouts: outcome
                .payouts
                .iter()
                .map(|&(i, amount)| (seat_of(i), amount))
                .collect(),
            winning_hand: outcome.winning_hand.clone(),
            split: outcome.split,
            pot: outcome.pot,
            street: state.street(),
        };

        for p in state.players() {
            self.players[p.id()] = Player::new(p.id(), p.name(), p.stack());
        }

        for &(i, amount) in &outcome.payouts {
            let line = match &outcome.winning_hand {
                Some(h) => format!("{} wins {} with {}", state.player(i).name(), amount, h.describe()),
                None => format!("{} wins {} uncontested", state.player(i).name(), amount),
            };
            self.emit(GameEvent::Message(line));
        }
        self.emit_state(&state);
        info!(
            hand = hand_number,
            pot = result.pot,
            winners = ?result.winners,
            street = %result.street,
            "hand complete"
        );
        Ok(result)
    }

    /// Runs one street of betting. Besides the completion check, a lone actor
    /// who already matches the bet ends the round without waiting on the
    /// action count.
    fn run_betting_round(&mut self, state: &mut GameState, actions: &mut Vec<ActionRecord>) {
        let cap = state.players().len() * 10;
        let mut iterations = 0;
        while !is_round_complete(state) && state.players_in_hand() > 1 {
            if state.players_can_act() == 0 || lone_actor_settled(state) {
                break;
            }
            iterations += 1;
            if iterations > cap {
                error!(
                    street = %state.street(),
                    iterations,
                    "betting round did not close, forcing it closed"
                );
                break;
            }
            let idx = state.to_act();
            if !state.player(idx).can_act() {
                error!(idx, "turn pointer is on a player who cannot act");
                break;
            }
            let seat = state.player(idx).id();
            self.emit(GameEvent::AwaitingAction { seat });

            let requested = self.sources[seat].decide(state, idx);
            let report = match (&mut self.analyzer, self.human) {
                (Some(analyzer), Some(human)) if human == seat => {
                    let normalized = normalize_action(state, idx, requested);
                    Some(analyzer.analyze(state, idx, normalized))
                }
                _ => None,
            };
            let applied = apply_action(state, idx, requested);
            actions.push(ActionRecord {
                player_id: seat,
                street: state.street(),
                action: applied,
            });
            if let Some(report) = report {
                self.emit(GameEvent::Analysis(Box::new(report)));
            }
            self.emit(GameEvent::Message(format!(
                "{} {}",
                state.player(idx).name(),
                applied
            )));
            state.next_player();
            self.emit_state(state);
        }
        debug!(
            street = %state.street(),
            actions = state.actions_this_round(),
            pot = state.pot(),
            "betting round closed"
        );
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.emit(&event);
        }
    }

    fn emit_state(&mut self, state: &GameState) {
        if self.sinks.is_empty() {
            return;
        }
        self.emit(GameEvent::StateChanged(Box::new(state.clone())));
    }
}

// A single player able to act who already matches the bet has nobody left
// to bet against.
fn lone_actor_settled(state: &GameState) -> bool {
    let mut actors = state.players().iter().filter(|p| p.can_act());
    match (actors.next(), actors.next()) {
        (Some(p), None) => p.street_bet() >= state.current_bet(),
        _ => false,
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("[{}]", c))
        .collect::<Vec<_>>()
        .join("")
}
