//! Play-field bounds and what happens when the head reaches a wall
//!
//! Walls sit on the lines `x = ±half_width` and `y = ±half_height`; every
//! cell strictly inside them is playable. With wrap-through enabled the head
//! is teleported to the opposite side, otherwise the round resets.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Direction, GridVector};
use crate::error::{SimError, SimResult};

/// Largest accepted half extent on either axis
pub const MAX_HALF_EXTENT: i32 = 1024;

/// Rectangular play field centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    half_width: i32,
    half_height: i32,
}

impl Bounds {
    /// Walls at `x = ±half_width` and `y = ±half_height`
    ///
    /// Each half extent must lie in `2..=MAX_HALF_EXTENT`.
    pub fn new(half_width: i32, half_height: i32) -> SimResult<Self> {
        let valid = 2..=MAX_HALF_EXTENT;
        if !valid.contains(&half_width) || !valid.contains(&half_height) {
            return Err(SimError::InvalidBounds { half_width, half_height });
        }
        Ok(Self { half_width, half_height })
    }

    /// Horizontal distance from the origin to the walls
    pub fn half_width(&self) -> i32 {
        self.half_width
    }

    /// Vertical distance from the origin to the walls
    pub fn half_height(&self) -> i32 {
        self.half_height
    }

    /// Whether `cell` is strictly inside the walls
    pub fn contains(&self, cell: GridVector) -> bool {
        cell.x.abs() < self.half_width && cell.y.abs() < self.half_height
    }

    /// The wall cell touched by a head standing on `cell`, if any
    pub fn wall_at(&self, cell: GridVector) -> Option<GridVector> {
        if self.contains(cell) {
            return None;
        }
        Some(GridVector::new(
            cell.x.clamp(-self.half_width, self.half_width),
            cell.y.clamp(-self.half_height, self.half_height),
        ))
    }

    /// Every playable cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = GridVector> + '_ {
        let (w, h) = (self.half_width, self.half_height);
        (1 - h..h).flat_map(move |y| (1 - w..w).map(move |x| GridVector::new(x, y)))
    }

    /// Number of playable cells
    pub fn area(&self) -> usize {
        let columns = (2 * self.half_width - 1) as usize;
        let rows = (2 * self.half_height - 1) as usize;
        columns * rows
    }
}

/// Outcome of a wall contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryAction {
    /// Move the head to this cell
    Traverse(GridVector),
    /// End the round
    Reset,
}

/// Decides between wrap-through and reset on wall contact
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryPolicy {
    move_through_walls: bool,
}

impl BoundaryPolicy {
    /// Policy that wraps when `move_through_walls` is set
    pub fn new(move_through_walls: bool) -> Self {
        Self { move_through_walls }
    }

    /// Whether wall contacts teleport the head
    pub fn moves_through_walls(&self) -> bool {
        self.move_through_walls
    }

    /// Decide what a contact with `wall` while travelling along `travel`
    /// does to a head at `head`
    pub fn decide(&self, head: GridVector, wall: GridVector, travel: Direction) -> BoundaryAction {
        if !self.move_through_walls {
            return BoundaryAction::Reset;
        }
        let target = traverse_target(head, wall, travel);
        debug!(?wall, ?travel, ?target, "head traverses wall");
        BoundaryAction::Traverse(target)
    }
}

/// Cell on the opposite side of the grid along the axis of travel
///
/// The travel-axis coordinate becomes the negated wall coordinate plus one
/// step of travel; the cross-axis coordinate is kept from the head.
pub fn traverse_target(head: GridVector, wall: GridVector, travel: Direction) -> GridVector {
    let step = travel.to_vector();
    if travel.is_horizontal() {
        GridVector::new(-wall.x + step.x, head.y)
    } else {
        GridVector::new(head.x, -wall.y + step.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(10, 10).is_ok());
        assert_eq!(
            Bounds::new(1, 10).unwrap_err(),
            SimError::InvalidBounds { half_width: 1, half_height: 10 }
        );
        assert!(Bounds::new(10, -3).is_err());
    }

    #[test]
    fn test_oversized_bounds_rejected() {
        assert!(Bounds::new(MAX_HALF_EXTENT, MAX_HALF_EXTENT).is_ok());
        assert_eq!(
            Bounds::new(MAX_HALF_EXTENT + 1, 10).unwrap_err(),
            SimError::InvalidBounds { half_width: MAX_HALF_EXTENT + 1, half_height: 10 }
        );
        assert!(Bounds::new(10, 100_000).is_err());
        assert!(Bounds::new(i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn test_area_at_largest_bounds() {
        let bounds = Bounds::new(MAX_HALF_EXTENT, MAX_HALF_EXTENT).unwrap();
        let side = (2 * MAX_HALF_EXTENT - 1) as usize;
        assert_eq!(bounds.area(), side * side);
    }

    #[test]
    fn test_contains_and_wall_at() {
        let bounds = Bounds::new(10, 5).unwrap();
        assert!(bounds.contains(GridVector::new(9, 4)));
        assert!(!bounds.contains(GridVector::new(10, 0)));
        assert_eq!(bounds.wall_at(GridVector::new(3, 3)), None);
        assert_eq!(bounds.wall_at(GridVector::new(10, 2)), Some(GridVector::new(10, 2)));
        assert_eq!(bounds.wall_at(GridVector::new(1, -6)), Some(GridVector::new(1, -5)));
    }

    #[test]
    fn test_cells_match_area() {
        let bounds = Bounds::new(3, 2).unwrap();
        let cells: Vec<_> = bounds.cells().collect();
        assert_eq!(cells.len(), bounds.area());
        assert_eq!(cells.len(), 5 * 3);
        assert!(cells.iter().all(|&c| bounds.contains(c)));
    }

    #[test]
    fn test_traverse_horizontal() {
        let head = GridVector::new(10, 4);
        let target = traverse_target(head, GridVector::new(10, 4), Direction::Right);
        assert_eq!(target, GridVector::new(-9, 4));

        let target = traverse_target(GridVector::new(-10, -2), GridVector::new(-10, -2), Direction::Left);
        assert_eq!(target, GridVector::new(9, -2));
    }

    #[test]
    fn test_traverse_vertical() {
        let target = traverse_target(GridVector::new(3, 10), GridVector::new(3, 10), Direction::Up);
        assert_eq!(target, GridVector::new(3, -9));
    }

    #[test]
    fn test_policy_decision() {
        let head = GridVector::new(10, 0);
        let wall = GridVector::new(10, 0);

        let wrap = BoundaryPolicy::new(true);
        assert_eq!(wrap.decide(head, wall, Direction::Right), BoundaryAction::Traverse(GridVector::new(-9, 0)));

        let solid = BoundaryPolicy::new(false);
        assert_eq!(solid.decide(head, wall, Direction::Right), BoundaryAction::Reset);
    }
}
