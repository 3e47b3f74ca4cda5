//! Product Owner movement: one step in any of the eight directions.

use crate::types::Position;

/// Legal iff the Chebyshev distance is exactly 1.
pub fn is_legal(from: Position, to: Position) -> bool {
    from.chebyshev_distance(to) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_neighbours() {
        let from = Position::new(4, 4);
        for dr in -1..=1 {
            for dc in -1..=1 {
                let to = Position::new(4 + dr, 4 + dc);
                assert_eq!(is_legal(from, to), (dr, dc) != (0, 0), "delta ({dr}, {dc})");
            }
        }
    }

    #[test]
    fn test_two_steps_is_illegal() {
        let from = Position::new(4, 4);
        assert!(!is_legal(from, Position::new(2, 4)));
        assert!(!is_legal(from, Position::new(5, 6)));
        assert!(!is_legal(from, Position::new(6, 6)));
    }
}
