use std::fmt;

use crate::cards::{Card, HoleCards};
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// A table-seat role derived from the seat's offset from the button.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    SmallBlind,
    BigBlind,
    UnderTheGun,
    UtgPlus1,
    MiddlePosition1,
    MiddlePosition2,
    Hijack,
    Cutoff,
    Button,
}

impl Position {
    fn order(self) -> u8 {
        match self {
            Position::SmallBlind => 0,
            Position::BigBlind => 1,
            Position::UnderTheGun => 2,
            Position::UtgPlus1 => 3,
            Position::MiddlePosition1 => 4,
            Position::MiddlePosition2 => 5,
            Position::Hijack => 6,
            Position::Cutoff => 7,
            Position::Button => 8,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
            Position::UnderTheGun => "UTG",
            Position::UtgPlus1 => "UTG+1",
            Position::MiddlePosition1 => "MP1",
            Position::MiddlePosition2 => "MP2",
            Position::Hijack => "HJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
        }
    }

    pub fn is_blind(self) -> bool {
        self.order() <= 1
    }

    pub fn is_early(self) -> bool {
        (2..=3).contains(&self.order())
    }

    pub fn is_middle(self) -> bool {
        (4..=5).contains(&self.order())
    }

    pub fn is_late(self) -> bool {
        self.order() >= 6
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Canonical position list for a table of `count` players.
///
/// Heads-up is `[BTN, BB]`, three-handed `[BTN, SB, BB]`; larger tables start
/// at the small blind and fill from the latest seats backwards so the button
/// is always last.
///
/// # Errors
///
/// [`GameError::InvalidPlayerCount`] outside 2..=9 players.
pub fn positions_for_player_count(count: usize) -> Result<Vec<Position>, GameError> {
    use Position::*;
    match count {
        2 => Ok(vec![Button, BigBlind]),
        3 => Ok(vec![Button, SmallBlind, BigBlind]),
        4..=9 => {
            const REST: [Position; 7] = [
                UnderTheGun,
                UtgPlus1,
                MiddlePosition1,
                MiddlePosition2,
                Hijack,
                Cutoff,
                Button,
            ];
            let mut v = vec![SmallBlind, BigBlind];
            v.extend_from_slice(&REST[REST.len() - (count - 2)..]);
            Ok(v)
        }
        _ => Err(GameError::InvalidPlayerCount { count }),
    }
}

/// Represents a player action during a betting round.
/// Actions can involve betting amounts or no-cost moves like check/fold.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Put this many chips in when nobody has bet yet
    Bet(u32),
    /// Raise so this street's total commitment reaches the given amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

impl PlayerAction {
    pub fn is_aggressive(&self) -> bool {
        matches!(
            self,
            PlayerAction::Bet(_) | PlayerAction::Raise(_) | PlayerAction::AllIn
        )
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, PlayerAction::Check | PlayerAction::Call)
    }

    pub fn amount(&self) -> Option<u32> {
        match self {
            PlayerAction::Bet(a) | PlayerAction::Raise(a) => Some(*a),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => write!(f, "folds"),
            PlayerAction::Check => write!(f, "checks"),
            PlayerAction::Call => write!(f, "calls"),
            PlayerAction::Bet(a) => write!(f, "bets {}", a),
            PlayerAction::Raise(a) => write!(f, "raises to {}", a),
            PlayerAction::AllIn => write!(f, "goes all-in"),
        }
    }
}

/// Represents a poker player with their chip stack, position, and hole cards.
/// Manages chip operations (betting, adding chips) and card management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat index at the table, stable across hands
    id: usize,
    name: String,
    /// Current chip stack
    stack: u32,
    /// Chips committed on the current street
    street_bet: u32,
    /// Chips committed over the whole hand
    hand_total: u32,
    folded: bool,
    all_in: bool,
    position: Option<Position>,
    hole: Option<HoleCards>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            street_bet: 0,
            hand_total: 0,
            folded: false,
            all_in: false,
            position: None,
            hole: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn hand_total(&self) -> u32 {
        self.hand_total
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn position(&self) -> Option<Position> {
        self.position
    }
    pub fn set_position(&mut self, pos: Position) {
        self.position = Some(pos);
    }

    pub fn hole_cards(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn give_cards(&mut self, a: Card, b: Card) {
        self.hole = Some(HoleCards::new(a, b));
    }

    /// Still holds a claim on the pot.
    pub fn is_in_hand(&self) -> bool {
        !self.folded
    }

    /// Able to take another action this hand.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.stack > 0
    }

    /// Moves up to `amount` chips from the stack into this street's bet and
    /// returns what was actually committed. Emptying the stack marks the
    /// player all-in.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.stack);
        self.stack -= actual;
        self.street_bet += actual;
        self.hand_total += actual;
        if self.stack == 0 {
            self.all_in = true;
        }
        actual
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub fn reset_street_bet(&mut self) {
        self.street_bet = 0;
    }

    pub fn reset_for_new_hand(&mut self) {
        self.street_bet = 0;
        self.hand_total = 0;
        self.folded = false;
        self.all_in = false;
        self.position = None;
        self.hole = None;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.name, self.stack)
    }
}
