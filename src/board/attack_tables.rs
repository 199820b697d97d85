use once_cell::sync::Lazy;

use super::movegen::ALL_DIRECTIONS;
use super::{Location, BOARD_SIZE};

/// On-board neighbours of every square, indexed by `Location::index`.
pub(crate) static DRIVE_NEIGHBOURS: Lazy<Vec<Vec<Location>>> = Lazy::new(|| {
    let mut table = vec![Vec::new(); BOARD_SIZE * BOARD_SIZE];
    for from in Location::all() {
        table[from.index()] = ALL_DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| from.offset(dx, dy))
            .collect();
    }
    table
});
