//! Snake movement and growth simulation
//!
//! This module defines the seams to the collaborators the simulation does
//! not own (intent source, score keeping, collision detection) and the
//! components that drive a round:
//! - [`SegmentChain`]: ordered segments with follow propagation and growth
//! - [`TurnController`]: latches perpendicular turns until the next tick
//! - [`Pacer`]: fixed-rate gate for ticks, independent of frame rate
//! - [`BoundaryPolicy`]: wrap-through or reset on wall contact
//! - [`SimulationController`]: runs the above once per admitted tick

use serde::{Deserialize, Serialize};

pub use arena::Arena;
pub use boundary::{BoundaryAction, BoundaryPolicy, Bounds, MAX_HALF_EXTENT};
pub use chain::{START_DIRECTION, START_POSITION, SegmentChain};
pub use collaborators::{ScoreBoard, ScriptedIntents};
pub use controller::SimulationController;
pub use orientation::facing_angle;
pub use pacer::Pacer;
pub use segment::{Segment, SegmentId, SegmentView};
pub use turn::TurnController;
pub use types::{Direction, GridVector, VisualRole};

pub mod arena;
pub mod boundary;
pub mod chain;
mod collaborators;
pub mod controller;
pub mod orientation;
pub mod pacer;
pub mod segment;
pub mod turn;
pub mod types;

/// Source of directional intent, polled once per frame
pub trait IntentSource {
    /// The direction requested this frame, if any
    fn poll_intent(&mut self) -> Option<Direction>;
}

impl<F> IntentSource for F
where
    F: FnMut() -> Option<Direction>,
{
    fn poll_intent(&mut self) -> Option<Direction> {
        self()
    }
}

/// Score keeper notified of gameplay outcomes
///
/// The simulation holds no score itself.
pub trait ScoreListener {
    /// Food was eaten and the chain grew to `length`
    fn on_food_eaten(&mut self, length: usize);

    /// A new round started
    fn on_round_reset(&mut self) {}
}

/// Ignores every notification
impl ScoreListener for () {
    fn on_food_eaten(&mut self, _length: usize) {}
}

/// Something the head ran into, as reported by the collision layer
///
/// Only the head raises contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contact {
    /// The head reached the food pellet
    Food,
    /// The head ran into an obstacle
    Obstacle,
    /// The head ran into another segment of the chain
    Body,
    /// The head reached a wall
    Wall {
        /// Wall cell under the head
        wall: GridVector,
        /// Direction the head was travelling
        travel: Direction,
    },
}

/// What handling a contact did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ContactOutcome {
    /// The chain grew by one segment
    Grew {
        /// Chain length after growing
        length: usize,
    },
    /// The round ended and a new one started
    Reset,
    /// The head wrapped to the opposite side
    Traversed {
        /// Cell the head was moved to
        to: GridVector,
    },
}

/// Result of one admitted tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Sequence number of the tick, starting at 1
    pub tick: u64,

    /// Turn applied to the head before advancing
    pub turned: Option<Direction>,

    /// Head cell after advancing
    pub head: GridVector,

    /// Chain length
    pub length: usize,
}
