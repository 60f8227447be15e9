//! Individual snake segments and the follow protocol
//!
//! Every non-head segment moves by following the segment in front of it.
//! Following is a single operation: it classifies the segment's visual
//! role, re-orients it and copies the leader's position, in that order.

use serde::{Deserialize, Serialize};

use super::{
    orientation::facing_angle,
    types::{Direction, GridVector, VisualRole},
};

/// Opaque segment identity, stable for the lifetime of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentId(pub(crate) u64);

/// One unit of the snake's body, head included
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    position: GridVector,
    direction: Direction,
    facing: f32,
    role: VisualRole,
}

/// What the renderer reads for a segment once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentView {
    /// Cell the segment occupies
    pub position: GridVector,
    /// Sprite to draw
    pub role: VisualRole,
    /// Rotation in degrees
    pub facing: f32,
}

impl Segment {
    pub(crate) fn new(id: SegmentId, position: GridVector, direction: Direction, role: VisualRole) -> Self {
        Self { id, position, direction, facing: facing_angle(Some(direction), None), role }
    }

    /// Identity, unchanged by moves and resets
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Cell the segment occupies
    pub fn position(&self) -> GridVector {
        self.position
    }

    /// Direction of travel
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Rotation in degrees as selected by the orientation table
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Visual role assigned on the last move
    pub fn role(&self) -> VisualRole {
        self.role
    }

    /// Renderer read model for this segment
    pub fn view(&self) -> SegmentView {
        SegmentView { position: self.position, role: self.role, facing: self.facing }
    }

    /// Role for the segment at `index` in a chain of `length`
    ///
    /// Head and tail are never corners: their sprites do not line up with
    /// corner pieces even when their direction differs from the neighbour's.
    pub fn classify(index: usize, length: usize, turning: bool) -> VisualRole {
        if index == 0 {
            VisualRole::Head
        } else if index + 1 == length {
            VisualRole::Tail
        } else if turning {
            VisualRole::Corner
        } else {
            VisualRole::Body
        }
    }

    /// Point the segment along `direction`; `previous` is only given for corners
    pub(crate) fn set_direction(&mut self, direction: Direction, previous: Option<Direction>) {
        self.facing = facing_angle(Some(direction), previous);
        self.direction = direction;
    }

    pub(crate) fn set_position(&mut self, position: GridVector) {
        self.position = position;
    }

    pub(crate) fn set_role(&mut self, role: VisualRole) {
        self.role = role;
    }

    /// Follow `leader`, which sits at `index - 1` in a chain of `length`
    ///
    /// `leader` must not have been updated yet this tick: both its direction
    /// and its position are read as they were before the tick.
    pub(crate) fn follow(&mut self, leader: &Segment, index: usize, length: usize) {
        let turning = self.direction != leader.direction;
        self.role = Self::classify(index, length, turning);

        if self.role == VisualRole::Corner {
            let previous = self.direction;
            self.set_direction(leader.direction, Some(previous));
        } else {
            self.set_direction(leader.direction, None);
        }

        self.position = leader.position;
    }
}
