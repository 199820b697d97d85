//! Pseudo-legal move generation.
//!
//! Every piece is described by a [`Movement`]: a set of single-step offsets
//! and a set of ray directions. Offsets are `(dx, dy)` with lower advancing
//! toward increasing `y`; UPPER's tables are the mirror image.

mod sliders;
mod steps;

use super::{Board, Location, Owner, Piece, PieceKind};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub(crate) const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

// Gold-general pattern: everything except the two rear diagonals.
const GOLD_LOWER: [(i8, i8); 6] = [(0, 1), (1, 1), (-1, 1), (1, 0), (-1, 0), (0, -1)];
const GOLD_UPPER: [(i8, i8); 6] = [(0, -1), (1, -1), (-1, -1), (1, 0), (-1, 0), (0, 1)];

// Silver-general pattern: three forward squares and the two rear diagonals.
const SILVER_LOWER: [(i8, i8); 5] = [(0, 1), (1, 1), (-1, 1), (1, -1), (-1, -1)];
const SILVER_UPPER: [(i8, i8); 5] = [(0, -1), (1, -1), (-1, -1), (1, 1), (-1, 1)];

const FORWARD_LOWER: [(i8, i8); 1] = [(0, 1)];
const FORWARD_UPPER: [(i8, i8); 1] = [(0, -1)];

/// Movement pattern of a piece in its current promotion state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Movement {
    /// Offsets reached in exactly one step
    pub(crate) steps: &'static [(i8, i8)],
    /// Directions walked until blocked or off the board
    pub(crate) rays: &'static [(i8, i8)],
}

impl Movement {
    const fn steps(steps: &'static [(i8, i8)]) -> Self {
        Movement { steps, rays: &[] }
    }
}

fn gold(owner: Owner) -> &'static [(i8, i8)] {
    match owner {
        Owner::Lower => &GOLD_LOWER,
        Owner::Upper => &GOLD_UPPER,
    }
}

fn silver(owner: Owner) -> &'static [(i8, i8)] {
    match owner {
        Owner::Lower => &SILVER_LOWER,
        Owner::Upper => &SILVER_UPPER,
    }
}

fn forward(owner: Owner) -> &'static [(i8, i8)] {
    match owner {
        Owner::Lower => &FORWARD_LOWER,
        Owner::Upper => &FORWARD_UPPER,
    }
}

impl Piece {
    pub(crate) fn movement(self) -> Movement {
        let owner = self.owner();
        match (self.kind(), self.is_promoted()) {
            (PieceKind::Drive, _) => Movement::steps(&ALL_DIRECTIONS),
            (PieceKind::Notes, false) => Movement {
                steps: &[],
                rays: &ORTHOGONAL,
            },
            (PieceKind::Notes, true) => Movement {
                steps: &DIAGONAL,
                rays: &ORTHOGONAL,
            },
            (PieceKind::Governance, false) => Movement {
                steps: &[],
                rays: &DIAGONAL,
            },
            (PieceKind::Governance, true) => Movement {
                steps: &ORTHOGONAL,
                rays: &DIAGONAL,
            },
            (PieceKind::Shield, _) => Movement::steps(gold(owner)),
            (PieceKind::Relay, false) => Movement::steps(silver(owner)),
            (PieceKind::Relay, true) => Movement::steps(gold(owner)),
            (PieceKind::Preview, false) => Movement::steps(forward(owner)),
            (PieceKind::Preview, true) => Movement::steps(gold(owner)),
        }
    }

    /// Whether this piece, standing on `from`, can reach `to` in one move.
    ///
    /// Checks geometry, blocking along rays and that `to` is empty or holds
    /// an opposing piece. Says nothing about the mover's own Drive.
    #[must_use]
    pub fn can_move(self, board: &Board, from: Location, to: Location) -> bool {
        if from == to {
            return false;
        }
        let movement = self.movement();
        board.step_reaches(self, from, to, movement.steps)
            || board.ray_reaches(self, from, to, movement.rays)
    }

    /// Every pseudo-legal destination of this piece from `from`.
    #[must_use]
    pub fn generate_moves(self, board: &Board, from: Location) -> Vec<Location> {
        let movement = self.movement();
        let mut moves = Vec::with_capacity(16);
        if self.kind() == PieceKind::Drive {
            board.push_drive_targets(self, from, &mut moves);
        } else {
            board.push_step_targets(self, from, movement.steps, &mut moves);
        }
        board.push_ray_targets(self, from, movement.rays, &mut moves);
        moves
    }
}

impl Board {
    /// True if `piece` may finish its move on `to`: empty, or an opposing piece.
    #[inline]
    pub(crate) fn is_open_for(&self, to: Location, piece: Piece) -> bool {
        !self.is_occupied(to) || self.is_capturable(to, piece)
    }

    /// Every pseudo-legal `(from, to)` pair for `owner`'s pieces on the board.
    #[must_use]
    pub fn pseudo_legal_moves(&self, owner: Owner) -> Vec<(Location, Location)> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces_of(owner) {
            moves.extend(piece.generate_moves(self, from).into_iter().map(|to| (from, to)));
        }
        moves
    }

    /// Whether `owner`'s Drive sits on a square the opponent can reach.
    ///
    /// A side with no Drive on the board is never in check.
    #[must_use]
    pub fn is_in_check(&self, owner: Owner) -> bool {
        let Some(drive) = self.find_drive(owner) else {
            return false;
        };
        self.pieces_of(owner.opponent())
            .any(|(from, piece)| piece.can_move(self, from, drive))
    }
}
