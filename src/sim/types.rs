//! Basic types for the snake simulation
//!
//! This module defines the grid primitives shared by every other part of
//! the simulation: integer grid vectors, the four canonical directions and
//! the visual role each segment plays.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Integer 2D vector on the grid
///
/// Used both for cell positions and for unit steps. The zero vector means
/// "no direction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridVector {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing upwards
    pub y: i32,
}

impl GridVector {
    /// The zero vector
    pub const ZERO: GridVector = GridVector { x: 0, y: 0 };

    /// Create new vector
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one cell along a direction
    pub fn step(self, direction: Direction) -> Self {
        self + direction.to_vector()
    }
}

impl Add for GridVector {
    type Output = GridVector;

    fn add(self, rhs: GridVector) -> GridVector {
        GridVector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridVector {
    type Output = GridVector;

    fn sub(self, rhs: GridVector) -> GridVector {
        GridVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for GridVector {
    type Output = GridVector;

    fn neg(self) -> GridVector {
        GridVector::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for GridVector {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Direction a segment can face
///
/// `Up` is +y. The absence of a direction is modelled as
/// `Option<Direction>::None` rather than a fifth variant, so a head
/// direction can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards +y
    Up,
    /// Towards -y
    Down,
    /// Towards -x
    Left,
    /// Towards +x
    Right,
}

impl Direction {
    /// All four canonical directions
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Up, Direction::Left, Direction::Down];

    /// Unit step for this direction
    pub const fn to_vector(self) -> GridVector {
        match self {
            Direction::Up => GridVector::new(0, 1),
            Direction::Down => GridVector::new(0, -1),
            Direction::Left => GridVector::new(-1, 0),
            Direction::Right => GridVector::new(1, 0),
        }
    }

    /// Get opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether this direction moves along the x axis
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Perpendicular directions are the only legal turns
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}

/// What a segment looks like to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualRole {
    /// Index 0
    Head,
    /// Last segment of a chain longer than one
    Tail,
    /// Straight interior piece
    Body,
    /// Interior piece about to turn onto its leader's new direction
    Corner,
}
