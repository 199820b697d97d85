use super::constants::MOVE_LIMIT;

/// Tunables for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Applied actions before the game is declared a tie
    pub move_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            move_limit: MOVE_LIMIT,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_move_limit(mut self, move_limit: u32) -> Self {
        self.move_limit = move_limit;
        self
    }
}
