pub mod board;
pub mod game;

pub use board::{Board, Location, Owner, Piece, PieceKind};
pub use game::{GameEngine, GameStatus, Outcome};
