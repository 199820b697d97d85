//! Fixed game constants.

pub use crate::board::BOARD_SIZE;

/// Number of applied actions after which the game is a tie.
pub const MOVE_LIMIT: u32 = 200;

pub const ILLEGAL_MOVE_SUFFIX: &str = "  Illegal move.";
pub const CHECKMATE_SUFFIX: &str = "  Checkmate.";
pub const TIE_MESSAGE: &str = "Tie game. Too many moves.";
