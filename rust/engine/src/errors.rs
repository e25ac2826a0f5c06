use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Need at least 5 cards to evaluate, got {count}")]
    InvalidCardCount { count: usize },
    #[error("Unknown card notation: {0}")]
    UnknownCard(String),
    #[error("Player count must be 2-9, got {count}")]
    InvalidPlayerCount { count: usize },
    #[error("No cards left in deck")]
    DeckExhausted,
    #[error("At least two players with chips are required, got {count}")]
    NotEnoughPlayers { count: usize },
    #[error("No players left in the hand")]
    NoPlayersInHand,
    #[error("Seat {seat} has no hole cards")]
    MissingHoleCards { seat: usize },
    #[error("Cannot check facing a bet of {to_call}")]
    IllegalCheck { to_call: u32 },
    #[error("Chips at the table ({total}) exceed the supported maximum")]
    ChipOverflow { total: u64 },
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
}
