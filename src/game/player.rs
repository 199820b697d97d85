use crate::board::{Board, Location, Owner, Piece, PieceKind};

/// One side of the game and the pieces it holds in hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    owner: Owner,
    captured: Vec<Piece>,
}

impl Player {
    #[must_use]
    pub fn new(owner: Owner) -> Self {
        Player {
            owner,
            captured: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.owner.name()
    }

    /// Captured pieces in capture order.
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Take a piece into hand. It is stored unpromoted and owned by this player.
    pub fn capture_piece(&mut self, piece: Piece) {
        self.captured.push(piece.captured_by(self.owner));
    }

    /// Remove the first captured piece equal to `piece`. Returns whether one was found.
    pub fn remove_captured(&mut self, piece: Piece) -> bool {
        match self.captured.iter().position(|&p| p == piece) {
            Some(idx) => {
                self.captured.remove(idx);
                true
            }
            None => false,
        }
    }

    /// First captured piece whose letter matches, ignoring case.
    #[must_use]
    pub fn captured_of(&self, letter: char) -> Option<Piece> {
        let kind = PieceKind::from_char(letter)?;
        self.captured_kind(kind)
    }

    #[must_use]
    pub fn captured_kind(&self, kind: PieceKind) -> Option<Piece> {
        self.captured.iter().copied().find(|p| p.kind() == kind)
    }

    /// Distinct captured kinds, in first-capture order.
    pub(crate) fn captured_kinds(&self) -> Vec<PieceKind> {
        let mut kinds = Vec::new();
        for piece in &self.captured {
            if !kinds.contains(&piece.kind()) {
                kinds.push(piece.kind());
            }
        }
        kinds
    }

    #[inline]
    #[must_use]
    pub fn in_promotion_row(&self, loc: Location) -> bool {
        loc.y() == self.owner.promotion_rank()
    }

    /// Pseudo-legal moves of every piece this player has on the board.
    ///
    /// Not filtered for leaving the own Drive in check.
    #[must_use]
    pub fn all_possible_moves(&self, board: &Board) -> Vec<(Location, Location)> {
        board.pseudo_legal_moves(self.owner)
    }

    /// `Captures <name>: <letters>`; the label is printed even with nothing in hand.
    #[must_use]
    pub fn captures_line(&self) -> String {
        let letters: Vec<String> = self.captured.iter().map(ToString::to_string).collect();
        format!("Captures {}: {}", self.name(), letters.join(" "))
    }
}
