use std::fmt;

use crate::board::{Location, PieceKind};

use super::command::CommandError;

/// Why a submitted action was rejected.
///
/// Every variant ends the game in the opponent's favour; the variant is kept
/// for logging and inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// The line did not parse as a command
    Command(CommandError),
    /// Origin and destination are the same square
    SameSquare { square: Location },
    /// Nothing stands on the origin square
    NoPieceAt { square: Location },
    /// The origin holds an opponent's piece
    NotYourPiece { square: Location },
    /// `promote` on a piece that cannot or has already promoted
    CannotPromote { square: Location },
    /// The destination holds one of the mover's own pieces
    OwnPieceAtDestination { square: Location },
    /// The piece's movement cannot reach the destination
    UnreachableSquare { from: Location, to: Location },
    /// The mover's Drive would be in check afterwards
    LeavesDriveInCheck,
    /// No captured piece of this kind to drop
    NotInHand { kind: PieceKind },
    /// Drop onto an occupied square
    SquareOccupied { square: Location },
    /// Preview dropped into the mover's promotion row
    PreviewInPromotionRow { square: Location },
    /// Preview dropped onto a file already holding the mover's unpromoted Preview
    DoublePreview { square: Location },
    /// The drop would checkmate the opponent immediately
    DropMate { square: Location },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::Command(e) => write!(f, "Malformed command: {e}"),
            IllegalMove::SameSquare { square } => write!(f, "Piece on {square} must move"),
            IllegalMove::NoPieceAt { square } => write!(f, "No piece on {square}"),
            IllegalMove::NotYourPiece { square } => {
                write!(f, "Piece on {square} belongs to the opponent")
            }
            IllegalMove::CannotPromote { square } => {
                write!(f, "Piece on {square} cannot be promoted")
            }
            IllegalMove::OwnPieceAtDestination { square } => {
                write!(f, "Own piece already on {square}")
            }
            IllegalMove::UnreachableSquare { from, to } => {
                write!(f, "Piece on {from} cannot reach {to}")
            }
            IllegalMove::LeavesDriveInCheck => write!(f, "Move leaves the drive in check"),
            IllegalMove::NotInHand { kind } => {
                write!(f, "No captured '{}' to drop", kind.to_char())
            }
            IllegalMove::SquareOccupied { square } => write!(f, "Square {square} is occupied"),
            IllegalMove::PreviewInPromotionRow { square } => {
                write!(f, "Preview cannot be dropped into the promotion row at {square}")
            }
            IllegalMove::DoublePreview { square } => {
                write!(f, "File of {square} already holds an unpromoted preview")
            }
            IllegalMove::DropMate { square } => {
                write!(f, "Drop on {square} would be an immediate checkmate")
            }
            IllegalMove::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Command(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CommandError> for IllegalMove {
    fn from(e: CommandError) -> Self {
        IllegalMove::Command(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_error() {
        let err: IllegalMove = CommandError::Empty.into();
        assert_eq!(err, IllegalMove::Command(CommandError::Empty));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_names_squares() {
        let err = IllegalMove::UnreachableSquare {
            from: "a1".parse().unwrap(),
            to: "c3".parse().unwrap(),
        };
        let text = err.to_string();
        assert!(text.contains("a1") && text.contains("c3"));
    }
}
