//! Board representation and piece movement.
//!
//! The board is a plain 5x5 grid of `Option<Piece>`. Pieces know their own
//! geometry; the board answers occupancy, Drive-location and check queries.
//! Hypothetical positions are examined with [`Board::trial`], which always
//! puts the board back the way it was.
//!
//! # Example
//! ```
//! use box_shogi::board::{Board, Owner};
//!
//! let board = Board::new();
//! let moves = board.pseudo_legal_moves(Owner::Lower);
//! println!("lower has {} pseudo-legal moves", moves.len());
//! assert!(!board.is_in_check(Owner::Lower));
//! ```

mod attack_tables;
mod builder;
mod error;
mod layout;
mod movegen;
mod state;
mod trial;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, LocationError};
pub use state::Board;
pub use trial::SquareEdit;
pub use types::{Location, Owner, Piece, PieceKind, BOARD_SIZE};
