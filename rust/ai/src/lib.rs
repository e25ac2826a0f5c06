//! # holdem-ai: opponents and coaching for Texas Hold'em
//!
//! Opponent policies plug into the engine as [`ActionSource`]s, and the
//! [`coach::Coach`] plugs in as its [`DecisionAnalyzer`](holdem_engine::analysis::DecisionAnalyzer).
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every opponent policy implements
//! - [`chart`] - Starting-hand tiers and preflop advice
//! - [`coach`] - Recommendations, decision analysis and feedback
//! - [`stats`] - Per-session statistics for the human seat
//! - [`create_ai`] - Factory building an opponent by kind name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, into_source};
//! use holdem_engine::deck::Deck;
//! use holdem_engine::engine::{Engine, TableConfig};
//!
//! let mut engine = Engine::new(Deck::new_with_seed(7), TableConfig::default());
//! for seat in 0..3 {
//!     let ai = create_ai("mixed", seat, 7).expect("known kind");
//!     engine.add_seat(ai.name().to_string(), 1000, into_source(ai));
//! }
//! let result = engine.play_hand().expect("hand completes");
//! assert_eq!(result.payouts.iter().map(|(_, a)| a).sum::<u32>(), result.pot);
//! ```

use std::fmt;
use std::str::FromStr;

use holdem_engine::game::GameState;
use holdem_engine::player::PlayerAction;
use holdem_engine::source::ActionSource;
use thiserror::Error;

pub mod calling_station;
pub mod chart;
pub mod coach;
pub mod loose_aggressive;
pub mod stats;
pub mod tight_passive;

/// Trait defining the interface for AI opponents.
///
/// # Required Methods
///
/// - [`get_action`](AIOpponent::get_action) - Pick an action for a seat
/// - [`name`](AIOpponent::name) - Short display name of the style
/// - [`description`](AIOpponent::description) - One-line summary of how it plays
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::PlayerAction;
///
/// struct Limper;
///
/// impl AIOpponent for Limper {
///     fn get_action(&mut self, _state: &GameState, _idx: usize) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "Limper"
///     }
///
///     fn description(&self) -> &str {
///         "Calls everything"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Decide for the player at `idx`. Policies may draw from their own RNG,
    /// so this takes `&mut self`.
    fn get_action(&mut self, state: &GameState, idx: usize) -> PlayerAction;

    fn name(&self) -> &str;

    fn description(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    #[error("Unknown opponent kind: {0} (expected calling_station, tight_passive, loose_aggressive or mixed)")]
    UnknownKind(String),
}

/// Opponent style selected at table setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpponentKind {
    CallingStation,
    TightPassive,
    LooseAggressive,
    /// Cycles through the three styles by seat index
    Mixed,
}

impl OpponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OpponentKind::CallingStation => "calling_station",
            OpponentKind::TightPassive => "tight_passive",
            OpponentKind::LooseAggressive => "loose_aggressive",
            OpponentKind::Mixed => "mixed",
        }
    }

    /// The concrete style for a seat; only `Mixed` depends on the index.
    pub fn for_seat(self, seat: usize) -> OpponentKind {
        match self {
            OpponentKind::Mixed => match seat % 3 {
                0 => OpponentKind::CallingStation,
                1 => OpponentKind::TightPassive,
                _ => OpponentKind::LooseAggressive,
            },
            other => other,
        }
    }
}

impl FromStr for OpponentKind {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "calling_station" => Ok(OpponentKind::CallingStation),
            "tight_passive" => Ok(OpponentKind::TightPassive),
            "loose_aggressive" => Ok(OpponentKind::LooseAggressive),
            "mixed" => Ok(OpponentKind::Mixed),
            _ => Err(AiError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Factory function to create AI opponents by kind name.
///
/// # Arguments
///
/// * `kind` - `calling_station`, `tight_passive`, `loose_aggressive` or `mixed`
/// * `seat` - Seat index, used by `mixed` to pick a style
/// * `seed` - Seed for the policy's own RNG, mixed with the seat index
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("tight_passive", 1, 42).unwrap();
/// assert_eq!(ai.name(), "Tight-Passive");
/// assert!(create_ai("shark", 1, 42).is_err());
/// ```
pub fn create_ai(kind: &str, seat: usize, seed: u64) -> Result<Box<dyn AIOpponent>, AiError> {
    let kind: OpponentKind = kind.parse()?;
    Ok(build(kind, seat, seed))
}

/// Same as [`create_ai`] for an already parsed kind.
pub fn build(kind: OpponentKind, seat: usize, seed: u64) -> Box<dyn AIOpponent> {
    let seed = seed.wrapping_add(seat as u64);
    match kind.for_seat(seat) {
        OpponentKind::CallingStation => Box::new(calling_station::CallingStation::new(seed)),
        OpponentKind::TightPassive => Box::new(tight_passive::TightPassive::new()),
        // for_seat has already resolved Mixed
        OpponentKind::LooseAggressive | OpponentKind::Mixed => {
            Box::new(loose_aggressive::LooseAggressive::new(seed))
        }
    }
}

/// Adapts an opponent to the engine's seat interface.
pub fn into_source(mut ai: Box<dyn AIOpponent>) -> impl ActionSource {
    move |state: &GameState, idx: usize| ai.get_action(state, idx)
}

/// Largest street total the player can reach by shoving.
pub(crate) fn all_in_total(state: &GameState, idx: usize) -> u32 {
    let p = state.player(idx);
    p.stack() + p.street_bet()
}
