//! Fluent builder for games that start from a set-up position.
//!
//! # Example
//! ```
//! use box_shogi::board::{BoardBuilder, Owner, PieceKind};
//! use box_shogi::game::GameBuilder;
//!
//! let board = BoardBuilder::new()
//!     .piece("a1", Owner::Lower, PieceKind::Drive)
//!     .piece("e5", Owner::Upper, PieceKind::Drive)
//!     .build()
//!     .unwrap();
//! let game = GameBuilder::new()
//!     .board(board)
//!     .captured(Owner::Lower, PieceKind::Preview)
//!     .to_move(Owner::Lower)
//!     .build();
//! assert_eq!(game.player(Owner::Lower).captures_line(), "Captures lower: p");
//! ```

use crate::board::{Board, Owner, Piece, PieceKind};

use super::config::GameConfig;
use super::engine::GameEngine;
use super::player::Player;

#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    captured: Vec<(Owner, PieceKind)>,
    to_move: Owner,
    config: GameConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Starting layout, nothing in hand, lower to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::new(),
            captured: Vec::new(),
            to_move: Owner::Lower,
            config: GameConfig::default(),
        }
    }

    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Put a piece of `kind` into `owner`'s hand.
    #[must_use]
    pub fn captured(mut self, owner: Owner, kind: PieceKind) -> Self {
        self.captured.push((owner, kind));
        self
    }

    #[must_use]
    pub const fn to_move(mut self, owner: Owner) -> Self {
        self.to_move = owner;
        self
    }

    #[must_use]
    pub const fn move_limit(mut self, limit: u32) -> Self {
        self.config.move_limit = limit;
        self
    }

    #[must_use]
    pub fn build(self) -> GameEngine {
        let mut players = [Player::new(Owner::Lower), Player::new(Owner::Upper)];
        for (owner, kind) in self.captured {
            players[owner.index()].capture_piece(Piece::new(kind, owner));
        }
        GameEngine::from_position(self.board, players, self.to_move, self.config)
    }
}
