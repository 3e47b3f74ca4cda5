//! Designer movement: an L-shaped jump that ignores whatever lies between.

use crate::types::Position;

/// Legal iff the absolute deltas are (2, 1) or (1, 2).
pub fn is_legal(from: Position, to: Position) -> bool {
    matches!(from.abs_delta(to), (2, 1) | (1, 2))
}
