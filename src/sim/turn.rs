//! Turn handling
//!
//! Directional intent is latched between ticks and only applied to the head
//! on the next admitted tick. Only perpendicular turns are legal, which
//! keeps the snake from reversing into itself.

use tracing::trace;

use super::{chain::SegmentChain, types::Direction};

/// Latches the most recent legal intent until the next tick consumes it
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    pending: Option<Direction>,
}

impl TurnController {
    /// Controller with nothing latched
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer an intent against the head's current direction
    ///
    /// Returns whether it was latched. Parallel and reversing intents are
    /// ignored and leave any earlier latched turn in place.
    pub fn latch(&mut self, intent: Option<Direction>, current: Direction) -> bool {
        match intent {
            Some(direction) if direction.is_perpendicular(current) => {
                self.pending = Some(direction);
                true
            }
            Some(direction) => {
                trace!(?direction, ?current, "ignored non-perpendicular turn");
                false
            }
            None => false,
        }
    }

    /// The turn that the next tick will apply, if any
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Apply the latched turn to the chain's head and clear the latch
    ///
    /// The turn is re-checked against the head, since the head may have
    /// been redirected (e.g. by a reset) after the intent was latched.
    pub fn apply(&mut self, chain: &mut SegmentChain) -> Option<Direction> {
        let direction = self.pending.take()?;
        if !direction.is_perpendicular(chain.head_direction()) {
            return None;
        }
        chain.set_head_direction(direction);
        Some(direction)
    }

    /// Drop any latched turn
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
