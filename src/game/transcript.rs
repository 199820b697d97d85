//! Text shown around each turn.
//!
//! Terminal messages come from [`Outcome`](super::Outcome)'s `Display`; the
//! board and capture lines from [`GameEngine::render_position`](super::GameEngine::render_position).

use crate::board::Owner;

/// `"<player>> "`, printed without a newline before reading a command.
#[must_use]
pub fn prompt(owner: Owner) -> String {
    format!("{owner}> ")
}

#[must_use]
pub fn action_echo(owner: Owner, command: &str) -> String {
    format!("{owner} player action: {command}")
}

#[must_use]
pub fn check_notice(owner: Owner) -> String {
    format!("{owner} player is in check!")
}
