use super::super::attack_tables::DRIVE_NEIGHBOURS;
use super::super::{Board, Location, Piece};

impl Board {
    pub(crate) fn push_step_targets(
        &self,
        piece: Piece,
        from: Location,
        steps: &[(i8, i8)],
        moves: &mut Vec<Location>,
    ) {
        for &(dx, dy) in steps {
            if let Some(to) = from.offset(dx, dy) {
                if self.is_open_for(to, piece) {
                    moves.push(to);
                }
            }
        }
    }

    pub(crate) fn push_drive_targets(&self, piece: Piece, from: Location, moves: &mut Vec<Location>) {
        moves.extend(
            DRIVE_NEIGHBOURS[from.index()]
                .iter()
                .copied()
                .filter(|&to| self.is_open_for(to, piece)),
        );
    }

    pub(crate) fn step_reaches(
        &self,
        piece: Piece,
        from: Location,
        to: Location,
        steps: &[(i8, i8)],
    ) -> bool {
        self.is_open_for(to, piece)
            && steps
                .iter()
                .any(|&(dx, dy)| from.offset(dx, dy) == Some(to))
    }
}
