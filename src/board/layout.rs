//! Starting position.
//!
//! lower's pieces are listed explicitly; UPPER's are the same pieces rotated
//! 180 degrees about the centre square.

use once_cell::sync::Lazy;

use super::{Location, Owner, Piece, PieceKind};

const LOWER_LAYOUT: [(Location, PieceKind); 6] = [
    (Location::new_unchecked(0, 0), PieceKind::Drive),
    (Location::new_unchecked(1, 0), PieceKind::Shield),
    (Location::new_unchecked(2, 0), PieceKind::Relay),
    (Location::new_unchecked(3, 0), PieceKind::Governance),
    (Location::new_unchecked(4, 0), PieceKind::Notes),
    (Location::new_unchecked(0, 1), PieceKind::Preview),
];

/// All twelve starting pieces, lower's first.
pub(crate) static STARTING_LAYOUT: Lazy<Vec<(Location, Piece)>> = Lazy::new(|| {
    let lower = LOWER_LAYOUT
        .iter()
        .map(|&(loc, kind)| (loc, Piece::new(kind, Owner::Lower)));
    let upper = LOWER_LAYOUT
        .iter()
        .map(|&(loc, kind)| (loc.rotate(), Piece::new(kind, Owner::Upper)));
    lower.chain(upper).collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_point_symmetric() {
        assert_eq!(STARTING_LAYOUT.len(), 12);
        for &(loc, piece) in STARTING_LAYOUT.iter() {
            let mirror = STARTING_LAYOUT
                .iter()
                .find(|(other, _)| *other == loc.rotate())
                .map(|&(_, p)| p);
            assert_eq!(mirror, Some(piece.change_owner()));
        }
    }

    #[test]
    fn test_upper_drive_on_e5() {
        let e5: Location = "e5".parse().unwrap();
        assert!(STARTING_LAYOUT
            .iter()
            .any(|&(loc, p)| loc == e5 && p == Piece::new(PieceKind::Drive, Owner::Upper)));
    }
}
