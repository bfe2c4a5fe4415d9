//! Klondike rules.
//!
//! - [`validator`]: pure placement predicates
//! - [`executor`]: applying validated moves and stock draws to a layout

pub mod executor;
pub mod validator;

pub use executor::{apply_move, check_move, check_win, draw_from_stock, move_to_foundation, move_to_tableau};
pub use validator::{can_place_on_foundation, can_place_on_tableau, is_valid_run};
