use std::fmt;

use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Location, Owner, PieceKind};

use super::command::{parse_command, Command};
use super::config::GameConfig;
use super::constants::{CHECKMATE_SUFFIX, ILLEGAL_MOVE_SUFFIX, TIE_MESSAGE};
use super::error::IllegalMove;
use super::legal::{check_preview_drop, legal_moves};
use super::player::Player;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    IllegalMove,
    Checkmate,
    Tie,
}

/// Final result. `winner` is `None` only for a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    pub winner: Option<Owner>,
    pub reason: EndReason,
}

impl Outcome {
    #[must_use]
    pub const fn win(winner: Owner, reason: EndReason) -> Self {
        Outcome {
            winner: Some(winner),
            reason,
        }
    }

    #[must_use]
    pub const fn tie() -> Self {
        Outcome {
            winner: None,
            reason: EndReason::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.winner, self.reason) {
            (Some(winner), EndReason::IllegalMove) => {
                write!(f, "{winner} player wins.{ILLEGAL_MOVE_SUFFIX}")
            }
            (Some(winner), EndReason::Checkmate) => {
                write!(f, "{winner} player wins.{CHECKMATE_SUFFIX}")
            }
            _ => f.write_str(TIE_MESSAGE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    AwaitingMove(Owner),
    Over(Outcome),
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// What the side to move needs to know before acting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnInfo {
    pub player: Owner,
    pub in_check: bool,
    /// Legal moves, listed only while in check
    pub available_moves: Vec<String>,
}

/// Turn controller for one game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: Owner,
    move_count: u32,
    status: GameStatus,
    config: GameConfig,
    turn_started: bool,
    last_illegal: Option<IllegalMove>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// A new game from the starting layout, lower to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_position(
            Board::new(),
            [Player::new(Owner::Lower), Player::new(Owner::Upper)],
            Owner::Lower,
            config,
        )
    }

    /// Start from an arbitrary position. `players` is indexed lower, UPPER.
    #[must_use]
    pub fn from_position(
        board: Board,
        players: [Player; 2],
        to_move: Owner,
        config: GameConfig,
    ) -> Self {
        GameEngine {
            board,
            players,
            current: to_move,
            move_count: 0,
            status: GameStatus::AwaitingMove(to_move),
            config,
            turn_started: false,
            last_illegal: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn player(&self, owner: Owner) -> &Player {
        &self.players[owner.index()]
    }

    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Owner {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The rule the losing action broke, if the game ended on an illegal move.
    #[must_use]
    pub fn last_illegal_reason(&self) -> Option<&IllegalMove> {
        self.last_illegal.as_ref()
    }

    #[must_use]
    pub fn is_in_check(&self, owner: Owner) -> bool {
        self.board.is_in_check(owner)
    }

    /// Legal moves for `owner` in the current position.
    pub fn available_moves(&mut self, owner: Owner) -> Vec<String> {
        legal_moves(&mut self.board, &self.players[owner.index()])
    }

    /// Board, both capture lines and a blank line, as printed before each turn.
    #[must_use]
    pub fn render_position(&self) -> String {
        format!(
            "{}\n{}\n{}\n\n",
            self.board,
            self.player(Owner::Upper).captures_line(),
            self.player(Owner::Lower).captures_line()
        )
    }

    /// Open the current turn: detect check and, when in check, list the legal
    /// moves. An empty list ends the game by checkmate.
    pub fn begin_turn(&mut self) -> TurnInfo {
        let player = self.current;
        let mut info = TurnInfo {
            player,
            in_check: false,
            available_moves: Vec::new(),
        };
        if self.status.is_over() {
            return info;
        }

        self.turn_started = true;
        if self.move_count >= self.config.move_limit {
            self.finish(Outcome::tie());
            return info;
        }
        info.in_check = self.board.is_in_check(player);
        if info.in_check {
            info.available_moves = self.available_moves(player);
            if info.available_moves.is_empty() {
                self.finish(Outcome::win(player.opponent(), EndReason::Checkmate));
            }
        }
        info
    }

    /// Submit one raw command line for the side to move.
    ///
    /// Any rejected action ends the game in the opponent's favour.
    pub fn submit(&mut self, line: &str) -> GameStatus {
        if self.status.is_over() {
            debug!("ignoring '{line}': game is over");
            return self.status;
        }
        if !self.turn_started {
            self.begin_turn();
            if self.status.is_over() {
                return self.status;
            }
        }

        let result = parse_command(line)
            .map_err(IllegalMove::from)
            .and_then(|command| self.execute(command));

        match result {
            Ok(()) => {
                self.move_count += 1;
                self.current = self.current.opponent();
                self.turn_started = false;
                if self.move_count >= self.config.move_limit {
                    self.finish(Outcome::tie());
                } else {
                    self.status = GameStatus::AwaitingMove(self.current);
                }
            }
            Err(reason) => {
                info!("{} played an illegal action '{}': {reason}", self.current, line.trim());
                self.last_illegal = Some(reason);
                self.finish(Outcome::win(self.current.opponent(), EndReason::IllegalMove));
            }
        }
        self.status
    }

    /// Validate and apply a parsed command for the side to move.
    ///
    /// On error the position is unchanged.
    pub fn execute(&mut self, command: Command) -> Result<(), IllegalMove> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver);
        }
        match command {
            Command::Move { from, to, promote } => self.make_move(from, to, promote),
            Command::Drop { kind, to } => self.drop_piece(kind, to),
        }
    }

    fn make_move(&mut self, from: Location, to: Location, promote: bool) -> Result<(), IllegalMove> {
        let owner = self.current;
        if from == to {
            return Err(IllegalMove::SameSquare { square: from });
        }
        let piece = self
            .board
            .piece(from)
            .ok_or(IllegalMove::NoPieceAt { square: from })?;
        if !piece.belongs_to(owner) {
            return Err(IllegalMove::NotYourPiece { square: from });
        }
        if promote && (!piece.can_be_promoted() || piece.is_promoted()) {
            return Err(IllegalMove::CannotPromote { square: from });
        }
        if self.board.piece(to).is_some_and(|p| p.belongs_to(owner)) {
            return Err(IllegalMove::OwnPieceAtDestination { square: to });
        }
        if !piece.can_move(&self.board, from, to) {
            return Err(IllegalMove::UnreachableSquare { from, to });
        }

        let player = &self.players[owner.index()];
        let mut moved = piece;
        if promote && (player.in_promotion_row(from) || player.in_promotion_row(to)) {
            moved.promote();
        } else if piece.kind() == PieceKind::Preview && player.in_promotion_row(to) {
            moved.promote();
        }

        let edits = [(from, None), (to, Some(moved))];
        if self.board.trial(&edits, |b| b.is_in_check(owner)) {
            return Err(IllegalMove::LeavesDriveInCheck);
        }

        self.board.remove_piece(from);
        let captured = self.board.set_piece(to, moved);
        if let Some(taken) = captured {
            self.players[owner.index()].capture_piece(taken);
        }
        debug!(
            "{owner}: {piece} {from} -> {to}{}{}",
            if moved.is_promoted() && !piece.is_promoted() { " (promoted)" } else { "" },
            captured.map(|p| format!(" x {p}")).unwrap_or_default()
        );
        Ok(())
    }

    fn drop_piece(&mut self, kind: PieceKind, to: Location) -> Result<(), IllegalMove> {
        let owner = self.current;
        let [lower, upper] = &self.players;
        let (player, opponent) = match owner {
            Owner::Lower => (lower, upper),
            Owner::Upper => (upper, lower),
        };

        let piece = player
            .captured_kind(kind)
            .ok_or(IllegalMove::NotInHand { kind })?;
        if self.board.is_occupied(to) {
            return Err(IllegalMove::SquareOccupied { square: to });
        }
        if kind == PieceKind::Preview {
            check_preview_drop(&self.board, player, to)?;
        }

        let (exposes_self, mates) = self.board.trial(&[(to, Some(piece))], |b| {
            let exposes_self = b.is_in_check(owner);
            let mates = b.is_in_check(owner.opponent()) && legal_moves(b, opponent).is_empty();
            (exposes_self, mates)
        });
        if exposes_self {
            return Err(IllegalMove::LeavesDriveInCheck);
        }
        if mates {
            return Err(IllegalMove::DropMate { square: to });
        }

        self.board.set_piece(to, piece);
        self.players[owner.index()].remove_captured(piece);
        debug!("{owner}: drop {piece} on {to}");
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("game over after {} moves: {outcome}", self.move_count);
        self.status = GameStatus::Over(outcome);
    }
}
