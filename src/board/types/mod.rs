//! Core board types.
//!
//! - `Location` - validated (x, y) square
//! - `Piece`, `PieceKind` and `Owner` - piece values

mod location;
mod piece;

pub use location::{Location, BOARD_SIZE};
pub use piece::{Owner, Piece, PieceKind};
