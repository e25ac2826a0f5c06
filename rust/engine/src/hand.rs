//! Five-card hand classification and best-of-seven selection.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaluated five-card hand.
///
/// Equality and ordering only look at `category` and `kickers`; two hands
/// that compare equal split the pot even if their suits differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero padded
    pub kickers: [u8; 5],
    /// The five cards that make the hand, most significant first.
    pub cards: [Card; 5],
}

impl HandStrength {
    /// Category name followed by the five cards, e.g. `Flush: Ah Jh 9h 7h 2h`.
    pub fn describe(&self) -> String {
        let cards: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        format!("{}: {}", self.category.name(), cards.join(" "))
    }

    pub fn beats(&self, other: &HandStrength) -> bool {
        self > other
    }
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.kickers == other.kickers
    }
}

impl Eq for HandStrength {}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Returns the best five-card hand that can be made from `cards`.
///
/// Five cards are classified directly; larger inputs try every five-card
/// subset and keep the maximum.
///
/// # Errors
///
/// [`GameError::InvalidCardCount`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(best.category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandStrength, GameError> {
    if cards.len() < 5 {
        return Err(GameError::InvalidCardCount { count: cards.len() });
    }
    let mut best: Option<HandStrength> = None;
    for combo in FiveCardCombos::new(cards.len()) {
        let five = combo.map(|i| cards[i]);
        let hand = classify_five(five);
        if best.as_ref().map_or(true, |b| hand > *b) {
            best = Some(hand);
        }
    }
    best.ok_or(GameError::InvalidCardCount { count: cards.len() })
}

/// Classifies exactly five cards.
pub fn classify_five(cards: [Card; 5]) -> HandStrength {
    let mut counts = [0u8; 15];
    for c in &cards {
        counts[c.rank.value() as usize] += 1;
    }

    // (count, rank) groups, biggest group first, then higher rank
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let mut ordered = cards;
    ordered.sort_by(|a, b| {
        let ka = (counts[a.rank.value() as usize], a.rank);
        let kb = (counts[b.rank.value() as usize], b.rank);
        kb.cmp(&ka).then_with(|| b.suit.cmp(&a.suit))
    });

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&groups);

    let ranks_desc: Vec<u8> = ordered.iter().map(|c| c.rank.value()).collect();

    let (category, kickers): (Category, Vec<u8>) = match (is_flush, straight_high) {
        (true, Some(14)) => (Category::RoyalFlush, vec![14]),
        (true, Some(high)) => (Category::StraightFlush, vec![high]),
        _ if groups[0].0 == 4 => (Category::FourOfAKind, vec![groups[0].1, groups[1].1]),
        _ if groups[0].0 == 3 && groups[1].0 == 2 => {
            (Category::FullHouse, vec![groups[0].1, groups[1].1])
        }
        (true, None) => (Category::Flush, ranks_desc),
        (false, Some(high)) => (Category::Straight, vec![high]),
        _ if groups[0].0 == 3 => (
            Category::ThreeOfAKind,
            groups.iter().map(|g| g.1).collect(),
        ),
        _ if groups[0].0 == 2 && groups[1].0 == 2 => {
            (Category::TwoPair, groups.iter().map(|g| g.1).collect())
        }
        _ if groups[0].0 == 2 => (Category::OnePair, groups.iter().map(|g| g.1).collect()),
        _ => (Category::HighCard, ranks_desc),
    };

    if straight_high == Some(5) {
        // wheel: the ace plays low, show it last
        ordered.rotate_left(1);
    }

    let mut k = [0u8; 5];
    for (slot, v) in k.iter_mut().zip(kickers) {
        *slot = v;
    }
    HandStrength {
        category,
        kickers: k,
        cards: ordered,
    }
}

// Five distinct ranks in a run, or the wheel. Returns the top rank (5 for the wheel).
fn straight_high(groups: &[(u8, u8)]) -> Option<u8> {
    if groups.len() != 5 {
        return None;
    }
    let mut ranks: Vec<u8> = groups.iter().map(|g| g.1).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(ranks[0]);
    }
    if ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// Index-based generator over all 5-element subsets of `0..n`, in
/// lexicographic order.
struct FiveCardCombos {
    n: usize,
    idx: [usize; 5],
    done: bool,
}

impl FiveCardCombos {
    fn new(n: usize) -> Self {
        Self {
            n,
            idx: [0, 1, 2, 3, 4],
            done: n < 5,
        }
    }
}

impl Iterator for FiveCardCombos {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.idx;
        // advance the rightmost index that still has room
        let mut i = 5;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.idx[i] < self.n - 5 + i {
                self.idx[i] += 1;
                for j in i + 1..5 {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

/// True when the cards already make a pair or better.
pub fn has_made_hand(cards: &[Card]) -> bool {
    match evaluate(cards) {
        Ok(h) => h.category >= Category::OnePair,
        Err(_) => false,
    }
}

/// Exactly four cards of one suit among at least four known cards.
pub fn has_flush_draw(cards: &[Card]) -> bool {
    if cards.len() < 4 {
        return false;
    }
    let mut suits = [0u8; 4];
    for c in cards {
        suits[c.suit.index()] += 1;
    }
    suits.iter().any(|&n| n == 4)
}

/// Four of the five ranks of some straight window (ace also counts low).
pub fn has_straight_draw(cards: &[Card]) -> bool {
    if cards.len() < 4 {
        return false;
    }
    let present = rank_presence(cards);
    (1..=10u8).any(|start| (start..start + 5).filter(|&v| present[v as usize]).count() >= 4)
}

/// Rank presence table indexed 1..=14, where index 1 mirrors the ace.
pub(crate) fn rank_presence(cards: &[Card]) -> [bool; 15] {
    let mut present = [false; 15];
    for c in cards {
        present[c.rank.value() as usize] = true;
    }
    present[1] = present[Rank::Ace.value() as usize];
    present
}
