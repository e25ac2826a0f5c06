//! # holdem-engine: Texas Hold'em Engine Core
//!
//! A multi-player (2-9 seats) Texas Hold'em engine: dealing, a betting
//! state machine per street, best-of-seven hand evaluation and pot
//! settlement, plus a heuristic outs/equity estimator.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), notation parsing, hole cards
//! - [`deck`] - Seeded ChaCha20 deck behind the [`deck::Dealer`] trait
//! - [`hand`] - Hand evaluation and strength comparison
//! - [`player`] - Player state, actions and table positions
//! - [`pot`] - Single running pot
//! - [`game`] - Per-hand state, streets and turn order
//! - [`betting`] - Blinds, action application and round closure
//! - [`rules`] - Action normalization and strict validation
//! - [`showdown`] - Winner selection and pot splitting
//! - [`engine`] - Hand orchestration over persistent seats
//! - [`source`] - Per-seat action providers
//! - [`events`] - Ordered engine notifications
//! - [`analysis`] - Decision analyzer interface
//! - [`odds`] - Outs, equity and pot odds
//! - [`logger`] - JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::{Dealer, Deck};
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal_n(5).unwrap(), b.deal_n(5).unwrap());
//! ```

pub mod analysis;
pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod odds;
pub mod player;
pub mod pot;
pub mod rules;
pub mod showdown;
pub mod source;
