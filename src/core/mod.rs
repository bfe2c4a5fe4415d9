//! Core types: cards, moves, errors, RNG, configuration and game state.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Move, MoveCards, PileKind, PileRef, Play, StockAction, FOUNDATIONS, TABLEAUS};
pub use card::{standard_deck, Card, CardColor, CardId, Rank, Suit};
pub use config::EngineConfig;
pub use error::{HistoryError, InvariantViolation, MoveError};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
