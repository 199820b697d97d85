//! Legal-move enumeration for a side in check.
//!
//! Candidates come from three sources: every Drive step, non-Drive moves that
//! capture or land on a square the opponent covers, and drops of each kind in
//! hand onto every empty square. Each candidate is tried on the board and
//! kept only if the mover's Drive is safe afterwards.

use std::collections::BTreeSet;

use crate::board::{Board, Location, PieceKind};

use super::error::IllegalMove;
use super::player::Player;

/// Sorted, de-duplicated `move <from> <to>` / `drop <k> <to>` strings.
pub fn legal_moves(board: &mut Board, player: &Player) -> Vec<String> {
    let owner = player.owner();
    let mut moves = BTreeSet::new();
    let covered = board.targets_of(owner.opponent());

    if let Some(drive_loc) = board.find_drive(owner) {
        if let Some(drive) = board.piece(drive_loc) {
            for to in drive.generate_moves(board, drive_loc) {
                if !board.move_leaves_in_check(owner, drive_loc, to) {
                    moves.insert(format!("move {drive_loc} {to}"));
                }
            }
        }
    }

    let own_pieces: Vec<_> = board
        .pieces_of(owner)
        .filter(|(_, piece)| piece.kind() != PieceKind::Drive)
        .collect();
    for (from, piece) in own_pieces {
        for to in piece.generate_moves(board, from) {
            let captures = board.is_capturable(to, piece);
            if !captures && covered.binary_search(&to).is_err() {
                continue;
            }
            if !board.move_leaves_in_check(owner, from, to) {
                moves.insert(format!("move {from} {to}"));
            }
        }
    }

    for kind in player.captured_kinds() {
        let Some(piece) = player.captured_kind(kind) else {
            continue;
        };
        for to in Location::all() {
            if board.is_occupied(to) {
                continue;
            }
            if kind == PieceKind::Preview && check_preview_drop(board, player, to).is_err() {
                continue;
            }
            let exposed = board.trial(&[(to, Some(piece))], |b| b.is_in_check(owner));
            if !exposed {
                moves.insert(format!("drop {} {to}", kind.to_char()));
            }
        }
    }

    moves.into_iter().collect()
}

/// Preview-specific drop restrictions: not into the promotion row, and not
/// onto a file already holding one of the player's unpromoted Previews.
pub(crate) fn check_preview_drop(
    board: &Board,
    player: &Player,
    to: Location,
) -> Result<(), IllegalMove> {
    if player.in_promotion_row(to) {
        return Err(IllegalMove::PreviewInPromotionRow { square: to });
    }
    let doubled = Location::file(to.x()).filter(|&loc| loc != to).any(|loc| {
        board.piece(loc).is_some_and(|p| {
            p.kind() == PieceKind::Preview && p.belongs_to(player.owner()) && !p.is_promoted()
        })
    });
    if doubled {
        return Err(IllegalMove::DoublePreview { square: to });
    }
    Ok(())
}
