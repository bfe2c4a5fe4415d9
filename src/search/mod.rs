//! Deterministic move search.
//!
//! Three strategies built from the same candidate generators:
//!
//! - [`HintPolicy`]: read-only suggestion for the player
//! - [`FoundationSweep`]: auto-complete onto the foundations
//! - [`RobotPolicy`]: one step of autoplay per tick
//!
//! All of them prefer foundation moves over tableau moves, uncovering moves
//! over other tableau moves, and lower pile indices over higher ones.

pub mod hint;
pub mod policy;
pub mod robot;
pub mod sweep;

pub use hint::{Hint, HintPolicy};
pub use policy::Policy;
pub use robot::{AutoplayStats, RobotPolicy, StallGuard};
pub use sweep::FoundationSweep;
