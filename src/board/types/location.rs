//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::LocationError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 5;

/// A validated square on the 5x5 board, stored as (x, y).
///
/// `x` is the file (0 = `a`), `y` the rank (0 = `1`). Rank 1 is lower's
/// home rank and rank 5 is UPPER's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    x: u8,
    y: u8,
}

impl Location {
    /// Create a location with bounds checking
    pub fn new(x: i32, y: i32) -> Result<Self, LocationError> {
        if Self::in_bounds(x, y) {
            Ok(Location {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(LocationError::InvalidLocation { x, y })
        }
    }

    /// Create a location from a file letter and a rank digit, e.g. `('c', 3)`.
    ///
    /// The letter is case-insensitive; the digit is 1-based as printed on the board.
    pub fn from_notation(letter: char, digit: u32) -> Result<Self, LocationError> {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(LocationError::InvalidNotation {
                notation: format!("{letter}{digit}"),
            });
        }
        let x = i32::from(letter as u8 - b'a');
        let y = i32::try_from(digit).unwrap_or(i32::MAX).saturating_sub(1);
        Self::new(x, y)
    }

    /// Create a location without bounds checking; callers guarantee `x, y < 5`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(x: u8, y: u8) -> Self {
        Location { x, y }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// File index (0-4, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.x as usize
    }

    /// Rank index (0-4, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.y as usize
    }

    /// Flat index (0-24), file-major
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    /// The square `(dx, dy)` away, if it is still on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = i32::from(self.x) + i32::from(dx);
        let y = i32::from(self.y) + i32::from(dy);
        Self::new(x, y).ok()
    }

    /// Square rotated 180 degrees about the centre (a1 <-> e5).
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Location {
            x: (BOARD_SIZE as u8 - 1) - self.x,
            y: (BOARD_SIZE as u8 - 1) - self.y,
        }
    }

    /// All 25 squares, file-major (a1, a2, ..., e5).
    pub fn all() -> impl Iterator<Item = Location> {
        (0..BOARD_SIZE as u8)
            .flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Location { x, y }))
    }

    /// The squares of file `x`, rank 1 first.
    pub(crate) fn file(x: usize) -> impl Iterator<Item = Location> {
        let x = x as u8;
        (0..BOARD_SIZE as u8).map(move |y| Location { x, y })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.x + b'a') as char, self.y + 1)
    }
}

impl TryFrom<(i32, i32)> for Location {
    type Error = LocationError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Location::new(x, y)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LocationError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file {
            'a'..='e' => i32::from(file as u8 - b'a'),
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='5' => i32::from(rank as u8 - b'1'),
            _ => return Err(invalid()),
        };

        Location::new(x, y)
    }
}
