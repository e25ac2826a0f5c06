//! Closed-form outs, equity and pot-odds estimates.
//!
//! Equity uses the 4-2 rule over a heuristic outs count. It is a coaching
//! aid, not a simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, HoleCards};
use crate::game::{GameState, Street};
use crate::hand::{has_flush_draw, rank_presence};

const FLUSH_OUTS: u8 = 9;
const OPEN_ENDED_OUTS: u8 = 8;
const GUTSHOT_OUTS: u8 = 4;
const OVERCARD_OUTS: u8 = 3;
const MAX_OVERCARD_OUTS: u8 = 6;

/// Draws found in a hand, with the outs each one contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawInfo {
    pub flush_draw: bool,
    pub open_ended: bool,
    pub gutshot: bool,
    pub overcards: bool,
    pub flush_outs: u8,
    pub straight_outs: u8,
    pub overcard_outs: u8,
}

impl DrawInfo {
    pub fn has_any_draw(&self) -> bool {
        self.flush_draw || self.open_ended || self.gutshot
    }

    pub fn raw_outs(&self) -> u8 {
        self.flush_outs + self.straight_outs + self.overcard_outs
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.flush_draw {
            parts.push("flush draw (9 outs)");
        }
        if self.open_ended {
            parts.push("open-ended straight draw (8 outs)");
        }
        if self.gutshot {
            parts.push("gutshot (4 outs)");
        }
        if self.overcards {
            parts.push("overcards");
        }
        if parts.is_empty() {
            "no draw".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Inspects hole cards plus board for draws.
pub fn analyze_draws(hole: &HoleCards, board: &[Card]) -> DrawInfo {
    let mut known = hole.cards().to_vec();
    known.extend_from_slice(board);

    let flush_draw = has_flush_draw(&known);
    let straight_outs = straight_outs(&known);
    let overcard_count = overcard_count(hole, board);

    DrawInfo {
        flush_draw,
        open_ended: has_open_ended(&known),
        gutshot: has_gutshot(&known),
        overcards: overcard_count > 0,
        flush_outs: if flush_draw { FLUSH_OUTS } else { 0 },
        straight_outs,
        overcard_outs: (overcard_count * OVERCARD_OUTS).min(MAX_OVERCARD_OUTS),
    }
}

/// Heuristic outs, never more than the number of unseen cards.
pub fn count_outs(hole: &HoleCards, board: &[Card]) -> u8 {
    let unseen = 52 - (2 + board.len()).min(52);
    analyze_draws(hole, board).raw_outs().min(unseen as u8)
}

/// Community cards still to come after `street`.
pub fn cards_to_come(street: Street) -> u8 {
    match street {
        Street::Preflop => 5,
        Street::Flop => 2,
        Street::Turn => 1,
        Street::River | Street::Showdown => 0,
    }
}

/// 4-2 rule: outs x4 with two or more cards to come, x2 with one.
pub fn estimate_equity(outs: u8, cards_to_come: u8) -> f64 {
    let multiplier = match cards_to_come {
        0 => return 0.0,
        1 => 2.0,
        _ => 4.0,
    };
    (f64::from(outs) * multiplier / 100.0).min(1.0)
}

/// Share of the final pot a call would pay for; 0 when there is nothing to
/// call. This is also the equity a call needs to break even.
pub fn pot_odds(to_call: u32, pot: u32) -> f64 {
    if to_call == 0 {
        return 0.0;
    }
    f64::from(to_call) / (f64::from(pot) + f64::from(to_call))
}

/// Full odds picture for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsSummary {
    pub draws: DrawInfo,
    pub outs: u8,
    pub equity: f64,
    pub pot_odds: f64,
    pub required_equity: f64,
    pub to_call: u32,
}

impl OddsSummary {
    pub fn should_call(&self) -> bool {
        self.equity > self.required_equity
    }

    /// Odds for player `idx`, or `None` if they hold no cards.
    pub fn for_player(state: &GameState, idx: usize) -> Option<Self> {
        let hole = state.player(idx).hole_cards()?;
        let board = state.board();
        let draws = analyze_draws(&hole, board);
        let outs = count_outs(&hole, board);
        let to_call = state.amount_to_call(idx);
        let odds = pot_odds(to_call, state.pot());
        Some(Self {
            draws,
            outs,
            equity: estimate_equity(outs, cards_to_come(state.street())),
            pot_odds: odds,
            required_equity: odds,
            to_call,
        })
    }
}

impl fmt::Display for OddsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Draws: {}", self.draws.describe())?;
        if self.outs > 0 {
            writeln!(f, "Outs: {}", self.outs)?;
        }
        write!(f, "Equity: {:.1}%", self.equity * 100.0)?;
        if self.to_call == 0 {
            write!(f, "\nNothing to call, checking is free")
        } else {
            writeln!(f, "\nPot odds: {:.1}%", self.pot_odds * 100.0)?;
            write!(
                f,
                "{} (need {:.1}%)",
                if self.should_call() {
                    "Calling is profitable"
                } else {
                    "Folding is better"
                },
                self.required_equity * 100.0
            )
        }
    }
}

// First 5-rank window holding exactly four ranks decides: a missing end card
// is open-ended, a missing inside card a gutshot.
fn straight_outs(cards: &[Card]) -> u8 {
    let present = rank_presence(cards);
    for start in 1..=10u8 {
        let missing: Vec<u8> = (start..start + 5)
            .filter(|&v| !present[v as usize])
            .collect();
        if let [gap] = missing.as_slice() {
            return if *gap == start || *gap == start + 4 {
                OPEN_ENDED_OUTS
            } else {
                GUTSHOT_OUTS
            };
        }
    }
    0
}

fn has_open_ended(cards: &[Card]) -> bool {
    let present = rank_presence(cards);
    (2..=10u8).any(|start| {
        (start..start + 4).all(|v| present[v as usize])
            && !present[(start - 1) as usize]
            && !present[(start + 4) as usize]
    })
}

fn has_gutshot(cards: &[Card]) -> bool {
    let present = rank_presence(cards);
    (1..=10u8).any(|start| {
        let held = (start..start + 5).filter(|&v| present[v as usize]).count();
        let inner_gaps = (start + 1..start + 4)
            .filter(|&v| !present[v as usize])
            .count();
        held == 4 && inner_gaps == 1
    })
}

fn overcard_count(hole: &HoleCards, board: &[Card]) -> u8 {
    let Some(top) = board.iter().map(|c| c.rank).max() else {
        return 0;
    };
    hole.cards().iter().filter(|c| c.rank > top).count() as u8
}
