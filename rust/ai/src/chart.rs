//! Starting-hand chart: tiers and preflop advice.

use std::fmt;

use holdem_engine::analysis::Advice;
use holdem_engine::cards::HoleCards;
use holdem_engine::player::Position;

/// Strength tier of a two-card starting hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Tier {
    Trash = 1,
    Playable = 2,
    Strong = 3,
    Premium = 4,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::Premium => "Premium",
            Tier::Strong => "Strong",
            Tier::Playable => "Playable",
            Tier::Trash => "Trash",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const PREMIUM: &[&str] = &["AA", "KK", "QQ", "AKs", "AKo"];

const STRONG: &[&str] = &["JJ", "TT", "AQs", "AQo", "AJs", "KQs"];

const PLAYABLE: &[&str] = &[
    "99", "88", "77", "66", "55", "44", "33", "22", "ATs", "A9s", "A8s", "A7s", "A6s", "A5s",
    "A4s", "A3s", "A2s", "KJs", "KTs", "QJs", "QTs", "JTs", "T9s", "98s", "87s", "76s", "65s",
];

/// Looks the hand up by its canonical notation (`AKs`, `T9o`, `QQ`).
pub fn tier_of(hole: &HoleCards) -> Tier {
    let notation = hole.notation();
    let n = notation.as_str();
    if PREMIUM.contains(&n) {
        Tier::Premium
    } else if STRONG.contains(&n) {
        Tier::Strong
    } else if PLAYABLE.contains(&n) {
        Tier::Playable
    } else {
        Tier::Trash
    }
}

/// Preflop advice from tier, seat and how many players have raised.
///
/// Premium hands always raise (re-raise when facing one). Strong hands give
/// up against two or more raisers. Playable hands only continue from late
/// position when raised, and open from middle or late position.
pub fn preflop_advice(
    hole: &HoleCards,
    position: Position,
    facing_raise: bool,
    raisers: usize,
) -> Advice {
    match tier_of(hole) {
        Tier::Premium if facing_raise => Advice::Reraise,
        Tier::Premium => Advice::Raise,
        Tier::Strong if facing_raise && raisers > 1 => Advice::Fold,
        Tier::Strong if facing_raise => Advice::Call,
        Tier::Strong => Advice::Raise,
        Tier::Playable if facing_raise && raisers > 1 => Advice::Fold,
        Tier::Playable if facing_raise => {
            if position.is_late() {
                Advice::Call
            } else {
                Advice::Fold
            }
        }
        Tier::Playable if position.is_late() => Advice::Raise,
        Tier::Playable if position.is_middle() => Advice::Call,
        Tier::Playable | Tier::Trash => Advice::Fold,
    }
}

/// Whether the hand is worth opening with a raise from `position`.
pub fn should_open_raise(hole: &HoleCards, position: Position) -> bool {
    match tier_of(hole) {
        Tier::Premium | Tier::Strong => true,
        Tier::Playable => position.is_middle() || position.is_late(),
        Tier::Trash => false,
    }
}

/// Whether a raise of `raise_size` chips is worth calling.
pub fn should_call_raise(hole: &HoleCards, position: Position, raise_size: u32, big_blind: u32) -> bool {
    let in_bbs = f64::from(raise_size) / f64::from(big_blind.max(1));
    match tier_of(hole) {
        Tier::Premium => true,
        Tier::Strong => in_bbs <= 5.0,
        Tier::Playable => position.is_late() && in_bbs <= 3.0,
        Tier::Trash => false,
    }
}

/// Three big blinds, four with limpers in the pot.
pub fn suggested_raise_size(big_blind: u32, has_limpers: bool) -> u32 {
    if has_limpers {
        big_blind * 4
    } else {
        big_blind * 3
    }
}

pub fn hand_description(hole: &HoleCards) -> String {
    let notation = hole.notation();
    match tier_of(hole) {
        Tier::Premium => format!("{notation} - PREMIUM! Always raise."),
        Tier::Strong => format!("{notation} - Strong hand. Raise from position."),
        Tier::Playable => format!("{notation} - Playable. Call or raise from late position."),
        Tier::Trash => format!("{notation} - Trash. Fold!"),
    }
}

pub fn position_advice(position: Position) -> &'static str {
    if position.is_early() {
        "Early position (UTG/UTG+1): play only premium hands (AA, KK, QQ, AK)"
    } else if position.is_middle() {
        "Middle position: you can add JJ, TT, AQ"
    } else if position.is_late() {
        "Late position: play wider, you act with more information"
    } else if position.is_blind() {
        "Blind: chips are already in, defend a little wider"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;

    fn hole(s: &str) -> HoleCards {
        let c = parse_cards(s).unwrap();
        HoleCards::new(c[0], c[1])
    }

    #[test]
    fn tiers_follow_the_chart() {
        assert_eq!(tier_of(&hole("Ah Kd")), Tier::Premium);
        assert_eq!(tier_of(&hole("Kd Ah")), Tier::Premium);
        assert_eq!(tier_of(&hole("Js Jd")), Tier::Strong);
        assert_eq!(tier_of(&hole("5c 6c")), Tier::Playable);
        assert_eq!(tier_of(&hole("5c 6d")), Tier::Trash);
        assert_eq!(tier_of(&hole("7c 2d")), Tier::Trash);
        assert!(Tier::Premium > Tier::Strong && Tier::Playable > Tier::Trash);
    }

    #[test]
    fn playable_hands_depend_on_position() {
        let h = hole("9s 9d");
        assert_eq!(preflop_advice(&h, Position::Button, false, 0), Advice::Raise);
        assert_eq!(preflop_advice(&h, Position::Hijack, false, 0), Advice::Raise);
        assert_eq!(preflop_advice(&h, Position::MiddlePosition1, false, 0), Advice::Call);
        assert_eq!(preflop_advice(&h, Position::UnderTheGun, false, 0), Advice::Fold);
        assert_eq!(preflop_advice(&h, Position::Cutoff, true, 1), Advice::Call);
        assert_eq!(preflop_advice(&h, Position::Cutoff, true, 2), Advice::Fold);
    }

    #[test]
    fn premium_reraises_and_strong_respects_two_raisers() {
        assert_eq!(preflop_advice(&hole("As Ad"), Position::UnderTheGun, true, 3), Advice::Reraise);
        assert_eq!(preflop_advice(&hole("Ts Td"), Position::BigBlind, true, 1), Advice::Call);
        assert_eq!(preflop_advice(&hole("Ts Td"), Position::BigBlind, true, 2), Advice::Fold);
        assert_eq!(preflop_advice(&hole("Ts Td"), Position::UnderTheGun, false, 0), Advice::Raise);
    }

    #[test]
    fn sizing_and_calling_thresholds() {
        assert_eq!(suggested_raise_size(10, false), 30);
        assert_eq!(suggested_raise_size(10, true), 40);
        assert!(should_call_raise(&hole("Ts Td"), Position::UnderTheGun, 50, 10));
        assert!(!should_call_raise(&hole("Ts Td"), Position::UnderTheGun, 60, 10));
        assert!(should_call_raise(&hole("2s 2d"), Position::Button, 30, 10));
        assert!(!should_call_raise(&hole("2s 2d"), Position::SmallBlind, 30, 10));
        assert!(should_open_raise(&hole("2s 2d"), Position::Cutoff));
        assert!(!should_open_raise(&hole("2s 2d"), Position::UnderTheGun));
    }
}
