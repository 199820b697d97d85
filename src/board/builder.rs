//! Fluent builder for constructing board positions.
//!
//! Allows setting up test positions piece by piece.
//!
//! # Example
//! ```
//! use box_shogi::board::{BoardBuilder, Owner, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("a1", Owner::Lower, PieceKind::Drive)
//!     .piece("e5", Owner::Upper, PieceKind::Drive)
//!     .promoted("c3", Owner::Lower, PieceKind::Relay)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::error::LocationError;
use super::{Board, Location, Owner, Piece, PieceKind};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(String, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard layout.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new()
                .pieces()
                .map(|(loc, piece)| (loc.to_string(), piece))
                .collect(),
        }
    }

    /// Place an unpromoted piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(self, square: &str, owner: Owner, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, owner))
    }

    /// Place a promoted piece. Kinds that cannot promote are placed unpromoted.
    #[must_use]
    pub fn promoted(self, square: &str, owner: Owner, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, owner);
        piece.promote();
        self.place(square, piece)
    }

    /// Place an already-built piece value.
    #[must_use]
    pub fn place(mut self, square: &str, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| sq != square);
        self.pieces.push((square.to_string(), piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: &str) -> Self {
        self.pieces.retain(|(sq, _)| sq != square);
        self
    }

    /// Build the board, failing on the first square name that does not parse.
    pub fn build(self) -> Result<Board, LocationError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            let loc: Location = square.parse()?;
            board.set_piece(loc, piece);
        }
        Ok(board)
    }
}
