use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of cards for a hand.
///
/// Implementations must never hand out the same card twice between two
/// shuffles, and must fail with [`GameError::DeckExhausted`] instead of
/// inventing cards once all 52 are gone.
pub trait Dealer: Send {
    fn shuffle(&mut self);

    fn deal_one(&mut self) -> Result<Card, GameError>;

    fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.deal_one()).collect()
    }

    /// Discards the top card.
    fn burn(&mut self) -> Result<(), GameError> {
        self.deal_one().map(|_| ())
    }
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Dealer for Deck {
    fn shuffle(&mut self) {
        Deck::shuffle(self);
    }

    fn deal_one(&mut self) -> Result<Card, GameError> {
        self.deal_card()
    }
}
