use super::super::{Board, Location, Piece};

impl Board {
    /// Walk each ray from `from`, stopping at the edge or the first occupied
    /// square. An opposing piece on that square is included.
    pub(crate) fn push_ray_targets(
        &self,
        piece: Piece,
        from: Location,
        rays: &[(i8, i8)],
        moves: &mut Vec<Location>,
    ) {
        for &(dx, dy) in rays {
            let mut current = from;
            while let Some(next) = current.offset(dx, dy) {
                match self.piece(next) {
                    None => moves.push(next),
                    Some(blocker) => {
                        if blocker.owner() != piece.owner() {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// Whether `to` lies on one of the rays from `from` with nothing in between.
    pub(crate) fn ray_reaches(
        &self,
        piece: Piece,
        from: Location,
        to: Location,
        rays: &[(i8, i8)],
    ) -> bool {
        if !self.is_open_for(to, piece) {
            return false;
        }
        let dx = to.x() as i32 - from.x() as i32;
        let dy = to.y() as i32 - from.y() as i32;
        let Some(&(step_x, step_y)) = rays
            .iter()
            .find(|&&(rx, ry)| on_ray(dx, dy, i32::from(rx), i32::from(ry)))
        else {
            return false;
        };

        let mut current = from;
        while let Some(next) = current.offset(step_x, step_y) {
            if next == to {
                return true;
            }
            if self.is_occupied(next) {
                return false;
            }
            current = next;
        }
        false
    }
}

/// True if `(dx, dy)` is a positive multiple of the unit direction `(rx, ry)`.
fn on_ray(dx: i32, dy: i32, rx: i32, ry: i32) -> bool {
    let n = if rx != 0 { dx / rx } else { dy / ry };
    n > 0 && dx == rx * n && dy == ry * n
}

#[cfg(test)]
mod tests {
    use super::on_ray;

    #[test]
    fn test_on_ray() {
        assert!(on_ray(3, 0, 1, 0));
        assert!(on_ray(-2, -2, -1, -1));
        assert!(!on_ray(2, 1, 1, 1));
        assert!(!on_ray(-2, 0, 1, 0));
        assert!(!on_ray(0, 3, 1, 0));
    }
}
