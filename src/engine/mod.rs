//! The engine façade and its clock.
//!
//! - [`Klondike`]: owns a game and exposes the query and command surface
//! - [`Scheduler`]: logical-clock timers behind autoplay, hint expiry and
//!   the win celebration

pub mod game;
pub mod scheduler;

pub use game::{Klondike, KlondikeBuilder};
pub use scheduler::{Scheduler, TimerId, TimerKind};
