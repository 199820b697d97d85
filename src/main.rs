use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::{LevelFilter, Log, Metadata, Record};

use box_shogi::game::transcript::{action_echo, check_notice, prompt};
use box_shogi::game::{GameEngine, GameStatus, Outcome};

/// Writes log records to stderr so stdout carries only the game transcript.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var("BOX_SHOGI_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn run_interactive() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    let mut game = GameEngine::new();

    loop {
        if let Some(outcome) = over(&game) {
            println!("{outcome}");
            return Ok(());
        }

        print!("{}", game.render_position());
        let turn = game.begin_turn();
        if turn.in_check {
            println!("{}", check_notice(turn.player));
            for mv in &turn.available_moves {
                println!("{mv}");
            }
        }
        if let Some(outcome) = over(&game) {
            println!("{outcome}");
            return Ok(());
        }

        print!("{}", prompt(turn.player));
        stdout.flush()?;
        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let command = line.trim();
        if !command.is_empty() {
            println!("{}", action_echo(turn.player, command));
        }

        game.submit(command);
        if game.last_illegal_reason().is_some() {
            print!("{}", game.render_position());
        }
    }
}

fn over(game: &GameEngine) -> Option<Outcome> {
    match game.status() {
        GameStatus::Over(outcome) => Some(outcome),
        GameStatus::AwaitingMove(_) => None,
    }
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("-i") => match run_interactive() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        _ => {
            eprintln!("usage: box_shogi -i");
            ExitCode::from(2)
        }
    }
}
