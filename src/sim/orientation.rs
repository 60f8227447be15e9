//! Facing angles for segment sprites
//!
//! A fixed lookup from (direction, previous direction) to a rotation in
//! degrees. The previous direction is `None` for straight pieces and only
//! set for corners, where the rotation depends on both the incoming and
//! outgoing direction.
//!
//! ```text
//!              prev: none  right   up   left  down
//! dir none            0      0     90   180   270
//! dir right           0      0    -90     0     0
//! dir up             90     90     90     0    90
//! dir left          180    180    180   180    90
//! dir down          270    180    270   270   270
//! ```

use super::types::Direction;

/// Number of keys per axis of the table (four directions plus none)
pub const ORIENTATION_KEYS: usize = 5;

/// Rows are indexed by direction, columns by previous direction.
/// Built at compile time and never written.
static ORIENTATIONS: [[f32; ORIENTATION_KEYS]; ORIENTATION_KEYS] = [
    [0.0, 0.0, 90.0, 180.0, 270.0],
    [0.0, 0.0, -90.0, 0.0, 0.0],
    [90.0, 90.0, 90.0, 0.0, 90.0],
    [180.0, 180.0, 180.0, 180.0, 90.0],
    [270.0, 180.0, 270.0, 270.0, 270.0],
];

fn slot(direction: Option<Direction>) -> usize {
    match direction {
        None => 0,
        Some(Direction::Right) => 1,
        Some(Direction::Up) => 2,
        Some(Direction::Left) => 3,
        Some(Direction::Down) => 4,
    }
}

/// Rotation in degrees for a segment facing `direction` that previously
/// faced `previous`
pub fn facing_angle(direction: Option<Direction>, previous: Option<Direction>) -> f32 {
    ORIENTATIONS[slot(direction)][slot(previous)]
}
