use crate::board::{Board, BoardBuilder, BoardError, Location, Owner, Piece, PieceKind};

fn sq(s: &str) -> Location {
    s.parse().unwrap()
}

#[test]
fn test_starting_layout() {
    let board = Board::new();
    let expected = [
        ("a1", "d"),
        ("b1", "s"),
        ("c1", "r"),
        ("d1", "g"),
        ("e1", "n"),
        ("a2", "p"),
        ("e5", "D"),
        ("d5", "S"),
        ("c5", "R"),
        ("b5", "G"),
        ("a5", "N"),
        ("e4", "P"),
    ];
    for (square, letter) in expected {
        assert_eq!(board.piece(sq(square)).unwrap().to_string(), letter, "{square}");
    }
    assert_eq!(board.pieces().count(), 12);
}

#[test]
fn test_render_starting_position() {
    let expected = "\
5 | N| G| R| S| D|
4 |__|__|__|__| P|
3 |__|__|__|__|__|
2 | p|__|__|__|__|
1 | d| s| r| g| n|
    a  b  c  d  e
";
    assert_eq!(Board::new().to_string(), expected);
}

#[test]
fn test_render_promoted_piece() {
    let board = BoardBuilder::new()
        .promoted("c3", Owner::Upper, PieceKind::Relay)
        .build()
        .unwrap();
    let text = board.to_string();
    assert!(text.contains("3 |__|__|+R|__|__|"));
}

#[test]
fn test_piece_at_bounds() {
    let board = Board::new();
    assert_eq!(
        board.piece_at(0, 0),
        Ok(Some(Piece::new(PieceKind::Drive, Owner::Lower)))
    );
    assert_eq!(board.piece_at(2, 2), Ok(None));
    assert_eq!(board.piece_at(5, 0), Err(BoardError::OutOfBounds { x: 5, y: 0 }));
    assert!(board.piece_at(-1, 3).is_err());
    assert!(board.is_valid(4, 4));
    assert!(!board.is_valid(4, 5));
}

#[test]
fn test_set_and_remove_return_previous() {
    let mut board = Board::empty();
    let shield = Piece::new(PieceKind::Shield, Owner::Lower);
    let notes = Piece::new(PieceKind::Notes, Owner::Upper);
    assert_eq!(board.set_piece(sq("b2"), shield), None);
    assert_eq!(board.set_piece(sq("b2"), notes), Some(shield));
    assert!(board.is_occupied(sq("b2")));
    assert_eq!(board.remove_piece(sq("b2")), Some(notes));
    assert!(!board.is_occupied(sq("b2")));
}

#[test]
fn test_is_capturable() {
    let board = Board::new();
    let lower_relay = Piece::new(PieceKind::Relay, Owner::Lower);
    assert!(board.is_capturable(sq("e5"), lower_relay));
    assert!(!board.is_capturable(sq("a1"), lower_relay));
    assert!(!board.is_capturable(sq("c3"), lower_relay));
}

#[test]
fn test_find_drive() {
    let board = Board::new();
    assert_eq!(board.find_drive(Owner::Lower), Some(sq("a1")));
    assert_eq!(board.find_drive(Owner::Upper), Some(sq("e5")));
    assert_eq!(Board::empty().find_drive(Owner::Lower), None);
}

#[test]
fn test_no_check_at_start() {
    let board = Board::new();
    assert!(!board.is_in_check(Owner::Lower));
    assert!(!board.is_in_check(Owner::Upper));
}

#[test]
fn test_missing_drive_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece("a1", Owner::Upper, PieceKind::Notes)
        .build()
        .unwrap();
    assert!(!board.is_in_check(Owner::Lower));
}

#[test]
fn test_check_along_ray_and_blocked() {
    let board = BoardBuilder::new()
        .piece("a1", Owner::Lower, PieceKind::Drive)
        .piece("a5", Owner::Upper, PieceKind::Notes)
        .build()
        .unwrap();
    assert!(board.is_in_check(Owner::Lower));

    let blocked = BoardBuilder::new()
        .piece("a1", Owner::Lower, PieceKind::Drive)
        .piece("a3", Owner::Lower, PieceKind::Shield)
        .piece("a5", Owner::Upper, PieceKind::Notes)
        .build()
        .unwrap();
    assert!(!blocked.is_in_check(Owner::Lower));
}

#[test]
fn test_check_by_preview_respects_direction() {
    // UPPER preview attacks downward only
    let board = BoardBuilder::new()
        .piece("c2", Owner::Lower, PieceKind::Drive)
        .piece("c3", Owner::Upper, PieceKind::Preview)
        .build()
        .unwrap();
    assert!(board.is_in_check(Owner::Lower));

    let board = BoardBuilder::new()
        .piece("c4", Owner::Lower, PieceKind::Drive)
        .piece("c3", Owner::Upper, PieceKind::Preview)
        .build()
        .unwrap();
    assert!(!board.is_in_check(Owner::Lower));
}

#[test]
fn test_targets_of_sorted_and_unique() {
    let board = Board::new();
    let targets = board.targets_of(Owner::Lower);
    let mut sorted = targets.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(targets, sorted);
    assert!(targets.contains(&sq("a3")));
}

#[test]
fn test_move_leaves_in_check_restores() {
    let mut board = BoardBuilder::new()
        .piece("a1", Owner::Lower, PieceKind::Drive)
        .piece("a3", Owner::Lower, PieceKind::Shield)
        .piece("a5", Owner::Upper, PieceKind::Notes)
        .build()
        .unwrap();
    let before = board;
    assert!(board.move_leaves_in_check(Owner::Lower, sq("a3"), sq("b3")));
    assert!(!board.move_leaves_in_check(Owner::Lower, sq("a3"), sq("a4")));
    assert_eq!(board, before);
}
