//! Error types for board coordinates and board access.

use std::fmt;

/// Error type for location construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Coordinate pair outside the 5x5 grid
    InvalidLocation { x: i32, y: i32 },
    /// Text that is not `<a-e><1-5>`
    InvalidNotation { notation: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::InvalidLocation { x, y } => {
                write!(f, "Location ({x}, {y}) is out of bounds (must be 0-4)")
            }
            LocationError::InvalidNotation { notation } => {
                write!(f, "Invalid location notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Error type for raw-coordinate board access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates do not name a square on the board
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinates ({x}, {y}) are off the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}
