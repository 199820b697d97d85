use std::collections::BTreeMap;

use serde::Deserialize;

use box_shogi::board::{BoardBuilder, Location, Owner, Piece};
use box_shogi::game::{EndReason, GameBuilder, GameStatus};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    /// Square -> piece notation; absent means the starting layout
    #[serde(default)]
    pieces: Option<BTreeMap<String, String>>,
    #[serde(default)]
    captures: Captures,
    #[serde(default)]
    move_limit: Option<u32>,
    commands: Vec<String>,
    expect: Expect,
}

#[derive(Deserialize, Default)]
struct Captures {
    #[serde(default)]
    lower: Vec<String>,
    #[serde(default)]
    upper: Vec<String>,
}

#[derive(Deserialize)]
struct Expect {
    over: bool,
    #[serde(default)]
    winner: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    move_count: Option<u32>,
    #[serde(default)]
    in_check: Option<bool>,
    #[serde(default)]
    available_moves: Option<Vec<String>>,
    /// Square -> rendered piece, "" for empty
    #[serde(default)]
    board: BTreeMap<String, String>,
    #[serde(default)]
    captures_lower: Option<String>,
    #[serde(default)]
    captures_upper: Option<String>,
}

fn owner_name(owner: Option<Owner>) -> Option<String> {
    owner.map(|o| o.name().to_string())
}

fn reason_name(reason: EndReason) -> &'static str {
    match reason {
        EndReason::IllegalMove => "IllegalMove",
        EndReason::Checkmate => "Checkmate",
        EndReason::Tie => "Tie",
    }
}

fn run(scenario: &Scenario) {
    let name = &scenario.name;
    let mut builder = GameBuilder::new();

    if let Some(pieces) = &scenario.pieces {
        let mut board = BoardBuilder::new();
        for (square, notation) in pieces {
            let piece = Piece::from_notation(notation)
                .unwrap_or_else(|| panic!("{name}: bad piece '{notation}'"));
            board = board.place(square, piece);
        }
        builder = builder.board(board.build().expect("valid squares"));
    }
    for (owner, letters) in [
        (Owner::Lower, &scenario.captures.lower),
        (Owner::Upper, &scenario.captures.upper),
    ] {
        for letter in letters {
            let kind = Piece::from_notation(letter)
                .unwrap_or_else(|| panic!("{name}: bad capture '{letter}'"))
                .kind();
            builder = builder.captured(owner, kind);
        }
    }
    if let Some(limit) = scenario.move_limit {
        builder = builder.move_limit(limit);
    }

    let mut game = builder.build();
    for command in &scenario.commands {
        game.begin_turn();
        assert!(
            !game.status().is_over(),
            "{name}: game ended before '{command}'"
        );
        game.submit(command);
    }

    let turn = if game.status().is_over() {
        None
    } else {
        Some(game.begin_turn())
    };

    let expect = &scenario.expect;
    match game.status() {
        GameStatus::Over(outcome) => {
            assert!(expect.over, "{name}: unexpectedly over: {outcome}");
            assert_eq!(owner_name(outcome.winner), expect.winner, "{name}: winner");
            assert_eq!(
                Some(reason_name(outcome.reason).to_string()),
                expect.reason,
                "{name}: reason"
            );
            if let Some(message) = &expect.message {
                assert_eq!(&outcome.to_string(), message, "{name}: message");
            }
        }
        GameStatus::AwaitingMove(player) => {
            assert!(!expect.over, "{name}: still awaiting {player}");
        }
    }

    if let Some(count) = expect.move_count {
        assert_eq!(game.move_count(), count, "{name}: move count");
    }
    if let Some(in_check) = expect.in_check {
        let current = game.current_player();
        assert_eq!(game.is_in_check(current), in_check, "{name}: check");
    }
    if let Some(moves) = &expect.available_moves {
        let current = game.current_player();
        let listed = match turn {
            Some(info) => info.available_moves,
            None => game.available_moves(current),
        };
        assert_eq!(&listed, moves, "{name}: available moves");
    }
    for (square, rendered) in &expect.board {
        let loc: Location = square.parse().expect("valid square");
        let actual = game
            .board()
            .piece(loc)
            .map(|p| p.to_string())
            .unwrap_or_default();
        assert_eq!(&actual, rendered, "{name}: square {square}");
    }
    if let Some(line) = &expect.captures_lower {
        assert_eq!(&game.player(Owner::Lower).captures_line(), line, "{name}");
    }
    if let Some(line) = &expect.captures_upper {
        assert_eq!(&game.player(Owner::Upper).captures_line(), line, "{name}");
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());
    for scenario in &set.scenarios {
        run(scenario);
    }
}

#[test]
fn illegal_move_keeps_board_and_records_reason() {
    let mut game = GameBuilder::new().build();
    let before = *game.board();
    game.begin_turn();
    game.submit("move a1 a2");
    assert_eq!(*game.board(), before);
    assert!(game.last_illegal_reason().is_some());

    // Nothing is accepted once the game is over
    let status = game.submit("move a2 a3");
    assert!(status.is_over());
    assert_eq!(*game.board(), before);
}

#[test]
fn submit_without_begin_turn_detects_checkmate() {
    let board = BoardBuilder::new()
        .piece("a1", Owner::Lower, box_shogi::PieceKind::Drive)
        .piece("e5", Owner::Upper, box_shogi::PieceKind::Drive)
        .piece("a5", Owner::Upper, box_shogi::PieceKind::Notes)
        .piece("b5", Owner::Upper, box_shogi::PieceKind::Notes)
        .build()
        .unwrap();
    let mut game = GameBuilder::new().board(board).build();
    match game.submit("move a1 b1") {
        GameStatus::Over(outcome) => assert_eq!(outcome.reason, EndReason::Checkmate),
        GameStatus::AwaitingMove(_) => panic!("checkmated side was allowed to move"),
    }
}
