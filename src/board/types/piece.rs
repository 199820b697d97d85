//! Piece, kind and owner types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. `Lower` moves first and starts on rank 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Owner {
    Upper,
    Lower,
}

impl Owner {
    /// Both owners in turn order (lower first)
    pub const BOTH: [Owner; 2] = [Owner::Lower, Owner::Upper];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Owner::Lower => 0,
            Owner::Upper => 1,
        }
    }

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Owner {
        match self {
            Owner::Upper => Owner::Lower,
            Owner::Lower => Owner::Upper,
        }
    }

    /// Rank direction this side advances in (+1 for lower, -1 for UPPER)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Owner::Lower => 1,
            Owner::Upper => -1,
        }
    }

    /// Rank index on which this side's pieces promote (4 for lower, 0 for UPPER)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        match self {
            Owner::Lower => 4,
            Owner::Upper => 0,
        }
    }

    /// Player name as shown in every message
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Owner::Upper => "UPPER",
            Owner::Lower => "lower",
        }
    }

    /// Owner implied by the case of a piece letter
    #[must_use]
    pub fn from_letter_case(c: char) -> Owner {
        if c.is_ascii_uppercase() {
            Owner::Upper
        } else {
            Owner::Lower
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Drive,
    Notes,
    Governance,
    Shield,
    Relay,
    Preview,
}

impl PieceKind {
    /// All kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Drive,
        PieceKind::Notes,
        PieceKind::Governance,
        PieceKind::Shield,
        PieceKind::Relay,
        PieceKind::Preview,
    ];

    /// Parse a kind from its letter, in either case (d, n, g, s, r, p)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'd' => Some(PieceKind::Drive),
            'n' => Some(PieceKind::Notes),
            'g' => Some(PieceKind::Governance),
            's' => Some(PieceKind::Shield),
            'r' => Some(PieceKind::Relay),
            'p' => Some(PieceKind::Preview),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Drive => 'd',
            PieceKind::Notes => 'n',
            PieceKind::Governance => 'g',
            PieceKind::Shield => 's',
            PieceKind::Relay => 'r',
            PieceKind::Preview => 'p',
        }
    }

    /// Whether pieces of this kind may ever promote
    #[inline]
    #[must_use]
    pub const fn can_be_promoted(self) -> bool {
        matches!(
            self,
            PieceKind::Notes | PieceKind::Governance | PieceKind::Relay | PieceKind::Preview
        )
    }
}

/// A piece: kind, owner and promotion flag.
///
/// Pieces are plain values. Capturing one produces a new value through
/// [`Piece::captured_by`] rather than mutating a shared object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    owner: Owner,
    promoted: bool,
}

impl Piece {
    /// An unpromoted piece
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Owner) -> Self {
        Piece {
            kind,
            owner,
            promoted: false,
        }
    }

    /// Parse the board notation of a piece: `p`, `P`, `+p`, `+P`.
    ///
    /// Returns `None` for unknown letters and for a `+` on a kind that cannot promote.
    #[must_use]
    pub fn from_notation(s: &str) -> Option<Self> {
        let (promoted, letter) = match s.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut chars = letter.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let kind = PieceKind::from_char(c)?;
        if promoted && !kind.can_be_promoted() {
            return None;
        }
        let mut piece = Piece::new(kind, Owner::from_letter_case(c));
        piece.promoted = promoted;
        Some(piece)
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn owner(self) -> Owner {
        self.owner
    }

    #[inline]
    #[must_use]
    pub const fn is_promoted(self) -> bool {
        self.promoted
    }

    #[inline]
    #[must_use]
    pub const fn is_upper(self) -> bool {
        matches!(self.owner, Owner::Upper)
    }

    #[inline]
    #[must_use]
    pub const fn is_lower(self) -> bool {
        matches!(self.owner, Owner::Lower)
    }

    #[inline]
    #[must_use]
    pub fn belongs_to(self, owner: Owner) -> bool {
        self.owner == owner
    }

    #[inline]
    #[must_use]
    pub const fn can_be_promoted(self) -> bool {
        self.kind.can_be_promoted()
    }

    /// Set the promotion flag. No-op for kinds that cannot promote or
    /// pieces already promoted.
    pub fn promote(&mut self) {
        if self.kind.can_be_promoted() {
            self.promoted = true;
        }
    }

    /// Clear the promotion flag. No-op if not promoted.
    pub fn depromote(&mut self) {
        self.promoted = false;
    }

    /// Same piece, other side.
    #[inline]
    #[must_use]
    pub const fn change_owner(self) -> Self {
        Piece {
            owner: self.owner.opponent(),
            ..self
        }
    }

    /// The value a capturer stores: unpromoted and owned by `owner`.
    #[inline]
    #[must_use]
    pub const fn captured_by(self, owner: Owner) -> Self {
        Piece::new(self.kind, owner)
    }

    /// Letter cased by owner (uppercase for UPPER), without the promotion marker
    #[inline]
    #[must_use]
    pub fn letter(self) -> char {
        let c = self.kind.to_char();
        if self.is_upper() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.promoted {
            write!(f, "+{}", self.letter())
        } else {
            write!(f, "{}", self.letter())
        }
    }
}
