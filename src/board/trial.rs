//! Apply-probe-restore simulation.
//!
//! Legality checks need to ask "would this side be in check afterwards?"
//! without committing the change. [`Board::trial`] applies a list of square
//! edits, runs a probe against the edited board and then puts every touched
//! square back, in reverse order, before returning the probe's result.

use super::{Board, Location, Owner, Piece};

/// One square edit: the square and its new contents.
pub type SquareEdit = (Location, Option<Piece>);

/// Contents of the touched squares before a trial, in application order.
#[derive(Clone, Debug, Default)]
pub(crate) struct UndoLog {
    saved: Vec<SquareEdit>,
}

impl Board {
    /// Apply `edits`, returning what each touched square held before.
    pub(crate) fn apply_edits(&mut self, edits: &[SquareEdit]) -> UndoLog {
        let saved = edits
            .iter()
            .map(|&(loc, piece)| (loc, self.put(loc, piece)))
            .collect();
        UndoLog { saved }
    }

    /// Undo edits recorded by [`Board::apply_edits`].
    pub(crate) fn restore(&mut self, undo: UndoLog) {
        for (loc, piece) in undo.saved.into_iter().rev() {
            self.put(loc, piece);
        }
    }

    /// Run `probe` on the board with `edits` applied, then restore it.
    ///
    /// The board is identical before and after the call whatever the probe
    /// returns. Probes may run nested trials of their own.
    pub fn trial<R>(&mut self, edits: &[SquareEdit], probe: impl FnOnce(&mut Board) -> R) -> R {
        let undo = self.apply_edits(edits);
        let result = probe(self);
        self.restore(undo);
        result
    }

    /// Would `owner` be in check after moving the piece on `from` to `to`?
    #[must_use]
    pub fn move_leaves_in_check(&mut self, owner: Owner, from: Location, to: Location) -> bool {
        let moving = self.piece(from);
        self.trial(&[(from, None), (to, moving)], |board| board.is_in_check(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_trial_restores_board() {
        let mut board = Board::new();
        let before = board;
        let a2: Location = "a2".parse().unwrap();
        let a3: Location = "a3".parse().unwrap();
        let preview = board.piece(a2);
        let seen = board.trial(&[(a2, None), (a3, preview)], |b| b.piece(a3));
        assert_eq!(seen.map(|p| p.kind()), Some(PieceKind::Preview));
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_same_square_twice_restores_original() {
        let mut board = Board::new();
        let before = board;
        let c3: Location = "c3".parse().unwrap();
        let notes = Piece::new(PieceKind::Notes, Owner::Upper);
        let shield = Piece::new(PieceKind::Shield, Owner::Lower);
        board.trial(&[(c3, Some(notes)), (c3, Some(shield))], |b| {
            assert_eq!(b.piece(c3), Some(shield));
        });
        assert_eq!(board, before);
    }
}
