use std::fmt;

use super::error::BoardError;
use super::layout::STARTING_LAYOUT;
use super::{Location, Owner, Piece, PieceKind, BOARD_SIZE};

/// The 5x5 grid. Squares are stored column-major as `squares[x][y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for &(loc, piece) in STARTING_LAYOUT.iter() {
            board.put(loc, Some(piece));
        }
        board
    }

    /// Board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, loc: Location) -> Option<Piece> {
        self.squares[loc.x()][loc.y()]
    }

    /// Piece at raw coordinates, rejecting anything off the board.
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<Piece>, BoardError> {
        let loc = Location::new(x, y).map_err(|_| BoardError::OutOfBounds { x, y })?;
        Ok(self.piece(loc))
    }

    /// Place `piece` on `loc`, returning whatever was there.
    pub fn set_piece(&mut self, loc: Location, piece: Piece) -> Option<Piece> {
        self.put(loc, Some(piece))
    }

    /// Empty `loc`, returning whatever was there.
    pub fn remove_piece(&mut self, loc: Location) -> Option<Piece> {
        self.put(loc, None)
    }

    #[inline]
    pub(crate) fn put(&mut self, loc: Location, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[loc.x()][loc.y()], piece)
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.piece(loc).is_some()
    }

    /// Whether raw coordinates name a square.
    #[inline]
    #[must_use]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        Location::in_bounds(x, y)
    }

    /// Whether `loc` holds a piece owned by the other side from `piece`.
    #[must_use]
    pub fn is_capturable(&self, loc: Location, piece: Piece) -> bool {
        self.piece(loc)
            .is_some_and(|occupant| occupant.owner() != piece.owner())
    }

    /// Location of `owner`'s Drive, if it is on the board.
    #[must_use]
    pub fn find_drive(&self, owner: Owner) -> Option<Location> {
        self.pieces_of(owner)
            .find(|(_, piece)| piece.kind() == PieceKind::Drive)
            .map(|(loc, _)| loc)
    }

    /// Every occupied square, file-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all().filter_map(move |loc| self.piece(loc).map(|piece| (loc, piece)))
    }

    pub fn pieces_of(&self, owner: Owner) -> impl Iterator<Item = (Location, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.belongs_to(owner))
    }

    /// Every square `owner` attacks or could move to.
    #[must_use]
    pub fn targets_of(&self, owner: Owner) -> Vec<Location> {
        let mut targets: Vec<Location> = self
            .pseudo_legal_moves(owner)
            .into_iter()
            .map(|(_, to)| to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", y + 1)?;
            for x in 0..BOARD_SIZE {
                match self.squares[x][y] {
                    None => f.write_str("__|")?,
                    Some(piece) if piece.is_promoted() => write!(f, "{piece}|")?,
                    Some(piece) => write!(f, " {piece}|")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a  b  c  d  e")
    }
}
