//! # klondike-engine
//!
//! Rules, undo history and move search for single-player Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a [`Klondike`] owns its game state. There is no
//!    global state and no internal threading; every command runs to
//!    completion when called.
//!
//! 2. **Deterministic**: deals come from a seeded ChaCha stream and every
//!    search policy breaks ties by lowest pile index, so a seed plus a
//!    command sequence always reproduces the same game.
//!
//! 3. **Presentation-agnostic**: the host renders, handles input and runs
//!    a clock. It talks to the engine through commands and typed events.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: piles are `im` vectors, so an undo
//!   snapshot is an O(1) clone of the layout.
//!
//! - **Logical time**: autoplay ticks, hint expiry and the win celebration
//!   are timers advanced explicitly by the host (or by a test).
//!
//! ## Modules
//!
//! - `core`: cards, moves, errors, RNG, configuration, game state
//! - `zones`: piles and the table layout
//! - `rules`: placement predicates and move execution
//! - `history`: snapshot-based undo
//! - `search`: hint, auto-complete and autoplay policies
//! - `events`: signals to the presentation layer
//! - `engine`: the [`Klondike`] façade and its scheduler

pub mod core;
pub mod engine;
pub mod events;
pub mod history;
pub mod rules;
pub mod search;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, CardColor, EngineConfig, GameRng, GameState, HistoryError,
    InvariantViolation, Move, MoveError, Phase, PileKind, PileRef, Play, Rank, StockAction, Suit,
    FOUNDATIONS, TABLEAUS,
};

pub use crate::zones::{Layout, Pile};

pub use crate::rules::{can_place_on_foundation, can_place_on_tableau};

pub use crate::history::{History, Snapshot};

pub use crate::search::{
    AutoplayStats, FoundationSweep, Hint, HintPolicy, Policy, RobotPolicy,
};

pub use crate::events::{EventBus, EventKind, GameEvent, HaltReason};

pub use crate::engine::{Klondike, KlondikeBuilder};
