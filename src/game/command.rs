//! Parsing of player command lines.
//!
//! Two forms are accepted, whitespace separated:
//! `move <from> <to> [promote]` and `drop <kind> <to>`.

use std::fmt;

use crate::board::{Location, LocationError, PieceKind};

/// A parsed player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move {
        from: Location,
        to: Location,
        promote: bool,
    },
    Drop {
        kind: PieceKind,
        to: Location,
    },
}

/// Why a command line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input
    Empty,
    /// Fewer than the three tokens every command needs
    TooFewTokens { found: usize },
    /// First token is neither `move` nor `drop`
    UnknownAction { action: String },
    /// A square token that is not `<a-e><1-5>`
    InvalidLocation(LocationError),
    /// Drop token whose first letter names no piece kind
    UnknownPiece { token: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command"),
            CommandError::TooFewTokens { found } => {
                write!(f, "Expected at least 3 tokens, found {found}")
            }
            CommandError::UnknownAction { action } => write!(f, "Unknown action '{action}'"),
            CommandError::InvalidLocation(e) => write!(f, "{e}"),
            CommandError::UnknownPiece { token } => write!(f, "Unknown piece '{token}'"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidLocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LocationError> for CommandError {
    fn from(e: LocationError) -> Self {
        CommandError::InvalidLocation(e)
    }
}

/// Parse one command line.
///
/// Tokens after a complete command are ignored, and a fourth `move` token
/// only counts when it is exactly `promote`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Err(CommandError::Empty);
    }
    if parts.len() < 3 {
        return Err(CommandError::TooFewTokens { found: parts.len() });
    }

    match parts[0] {
        "move" => Ok(Command::Move {
            from: parts[1].parse()?,
            to: parts[2].parse()?,
            promote: parts.get(3) == Some(&"promote"),
        }),
        "drop" => {
            let kind = parts[1]
                .chars()
                .next()
                .and_then(PieceKind::from_char)
                .ok_or_else(|| CommandError::UnknownPiece {
                    token: parts[1].to_string(),
                })?;
            Ok(Command::Drop {
                kind,
                to: parts[2].parse()?,
            })
        }
        other => Err(CommandError::UnknownAction {
            action: other.to_string(),
        }),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { from, to, promote } => {
                write!(f, "move {from} {to}")?;
                if *promote {
                    write!(f, " promote")?;
                }
                Ok(())
            }
            Command::Drop { kind, to } => write!(f, "drop {} {to}", kind.to_char()),
        }
    }
}
