//! Turn-by-turn game control.
//!
//! [`GameEngine`] owns the board and both players. Each turn the caller
//! opens the turn with [`GameEngine::begin_turn`] (which reports check and
//! the available moves) and then hands in one raw command line with
//! [`GameEngine::submit`]. Any rejected line ends the game.
//!
//! # Example
//! ```
//! use box_shogi::board::Owner;
//! use box_shogi::game::{EndReason, GameEngine, GameStatus};
//!
//! let mut game = GameEngine::new();
//! game.begin_turn();
//! let status = game.submit("move a1 a2");
//! match status {
//!     GameStatus::Over(outcome) => {
//!         assert_eq!(outcome.winner, Some(Owner::Upper));
//!         assert_eq!(outcome.reason, EndReason::IllegalMove);
//!         assert_eq!(outcome.to_string(), "UPPER player wins.  Illegal move.");
//!     }
//!     GameStatus::AwaitingMove(_) => unreachable!(),
//! }
//! ```

mod builder;
pub mod command;
mod config;
pub mod constants;
mod engine;
mod error;
mod legal;
mod player;
pub mod transcript;

pub use builder::GameBuilder;
pub use command::{parse_command, Command, CommandError};
pub use config::GameConfig;
pub use engine::{EndReason, GameEngine, GameStatus, Outcome, TurnInfo};
pub use error::IllegalMove;
pub use legal::legal_moves;
pub use player::Player;
