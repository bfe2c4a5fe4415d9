//! Piles and the table layout.
//!
//! ## Key Types
//!
//! - [`Pile`]: an ordered stack of cards, bottom first
//! - [`Layout`]: the thirteen piles of a Klondike table and their invariants

pub mod layout;
pub mod pile;

pub use layout::{Layout, DECK_SIZE};
pub use pile::Pile;
