//! Typed signals from the engine to its host.
//!
//! ## Key Types
//!
//! - [`GameEvent`]: what happened (piles changed, won, hint, autoplay halted)
//! - [`EventKind`]: the payload-free discriminant used to subscribe
//! - [`EventBus`]: listener registration and synchronous dispatch

pub mod bus;
pub mod event;

pub use bus::{EventBus, Listener, SubscriptionId};
pub use event::{EventKind, GameEvent, HaltReason};
