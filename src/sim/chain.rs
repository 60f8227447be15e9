//! The segment chain and its movement rules
//!
//! This module handles the ordered list of segments (head first), position
//! propagation on each tick, growth and full reset.

use tracing::debug;

use super::{
    segment::{Segment, SegmentId, SegmentView},
    types::{Direction, GridVector, VisualRole},
};
use crate::error::{SimError, SimResult};

/// Where the head starts every round
pub const START_POSITION: GridVector = GridVector::ZERO;

/// Direction the head faces at the start of every round
pub const START_DIRECTION: Direction = Direction::Right;

/// Ordered sequence of segments, index 0 is the head
///
/// A chain always contains at least its head: the only constructor runs a
/// full reset.
#[derive(Debug, Clone)]
pub struct SegmentChain {
    segments: Vec<Segment>,
    next_id: u64,
}

impl SegmentChain {
    /// Create a chain of `initial_size` segments collapsed on the start cell
    pub fn new(initial_size: usize) -> SimResult<Self> {
        let head = Segment::new(SegmentId(0), START_POSITION, START_DIRECTION, VisualRole::Head);
        let mut chain = Self { segments: vec![head], next_id: 1 };
        chain.reset_state(initial_size)?;
        Ok(chain)
    }

    /// Move every segment one step
    ///
    /// Segments are walked from tail to head so each one copies its
    /// leader's position before the leader itself moves. The head then
    /// steps one cell along its direction.
    pub fn advance(&mut self) -> GridVector {
        let length = self.segments.len();
        for i in (1..length).rev() {
            let (front, back) = self.segments.split_at_mut(i);
            back[0].follow(&front[i - 1], i, length);
        }

        let head = &mut self.segments[0];
        let next = head.position().step(head.direction());
        head.set_position(next);
        head.set_role(VisualRole::Head);
        next
    }

    /// Append one segment on top of the current tail
    pub fn grow(&mut self) {
        let length = self.segments.len();
        let id = SegmentId(self.next_id);
        self.next_id += 1;

        let tail = &self.segments[length - 1];
        let mut segment = Segment::new(id, tail.position(), tail.direction(), VisualRole::Tail);
        segment.follow(tail, length, length + 1);

        // The old tail is interior now; it only becomes a corner once it
        // follows its leader into a turn cell on the next advance
        if length > 1 {
            self.segments[length - 1].set_role(VisualRole::Body);
        }

        self.segments.push(segment);
        debug!(length = self.segments.len(), "chain grew");
    }

    /// Discard every segment but the head, put the head back on the start
    /// cell facing right and regrow to `initial_size`
    ///
    /// Rejects `initial_size == 0` without touching the chain.
    pub fn reset_state(&mut self, initial_size: usize) -> SimResult<()> {
        if initial_size < 1 {
            return Err(SimError::InitialSizeTooSmall(initial_size));
        }

        self.segments.truncate(1);
        let head = &mut self.segments[0];
        head.set_position(START_POSITION);
        head.set_direction(START_DIRECTION, None);
        head.set_role(VisualRole::Head);

        for _ in 1..initial_size {
            self.grow();
        }

        debug!(initial_size, "chain reset");
        Ok(())
    }

    /// Whether any segment sits on `cell`
    pub fn occupies(&self, cell: GridVector) -> bool {
        self.segments.iter().any(|segment| segment.position() == cell)
    }

    /// Whether any segment other than the head sits on `cell`
    pub fn body_occupies(&self, cell: GridVector) -> bool {
        self.segments.iter().skip(1).any(|segment| segment.position() == cell)
    }

    /// Point the head along `direction` without any legality check
    pub(crate) fn set_head_direction(&mut self, direction: Direction) {
        self.segments[0].set_direction(direction, None);
    }

    /// Teleport the head; the body catches up through normal advances
    pub(crate) fn relocate_head(&mut self, position: GridVector) {
        self.segments[0].set_position(position);
    }

    /// Segment at index 0
    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    /// Last segment; the head itself for a chain of one
    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    /// Cell under the head
    pub fn head_position(&self) -> GridVector {
        self.head().position()
    }

    /// Direction the head travels
    pub fn head_direction(&self) -> Direction {
        self.head().direction()
    }

    /// Number of segments, head included
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Get all positions occupied by the chain, head first
    pub fn positions(&self) -> Vec<GridVector> {
        self.segments.iter().map(Segment::position).collect()
    }

    /// Renderer read model, head first
    pub fn views(&self) -> impl Iterator<Item = SegmentView> + '_ {
        self.segments.iter().map(Segment::view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chain laid out in a straight line to the left of the head
    fn straight_chain(length: usize) -> SegmentChain {
        let mut chain = SegmentChain::new(length).unwrap();
        for _ in 0..length {
            chain.advance();
        }
        chain
    }

    #[test]
    fn test_chain_creation() {
        let chain = SegmentChain::new(4).unwrap();

        assert_eq!(chain.len(), 4);
        assert_eq!(chain.head_position(), START_POSITION);
        assert_eq!(chain.head_direction(), Direction::Right);
        assert!(chain.positions().iter().all(|&p| p == START_POSITION), "Segments start collapsed");
        assert_eq!(chain.head().role(), VisualRole::Head);
        assert_eq!(chain.tail().role(), VisualRole::Tail);
    }

    #[test]
    fn test_zero_initial_size_rejected() {
        assert_eq!(SegmentChain::new(0).unwrap_err(), SimError::InitialSizeTooSmall(0));

        let mut chain = SegmentChain::new(3).unwrap();
        chain.advance();
        let before = chain.positions();
        assert!(chain.reset_state(0).is_err());
        assert_eq!(chain.positions(), before, "Rejected reset must leave the chain untouched");
    }

    #[test]
    fn test_advance_propagates_stale_positions() {
        let mut chain = straight_chain(5);
        chain.set_head_direction(Direction::Up);
        chain.advance();
        chain.set_head_direction(Direction::Left);

        let before = chain.positions();
        let direction = chain.head_direction();
        chain.advance();
        let after = chain.positions();

        assert_eq!(after[0], before[0] + direction.to_vector());
        for i in 1..after.len() {
            assert_eq!(after[i], before[i - 1], "Segment {} should take its leader's old cell", i);
        }
    }

    #[test]
    fn test_single_segment_chain_moves() {
        let mut chain = SegmentChain::new(1).unwrap();
        chain.advance();
        chain.advance();
        assert_eq!(chain.head_position(), GridVector::new(2, 0));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_collapsed_segments_unstack() {
        let mut chain = SegmentChain::new(4).unwrap();
        chain.advance();
        assert_eq!(
            chain.positions(),
            vec![GridVector::new(1, 0), GridVector::new(0, 0), GridVector::new(0, 0), GridVector::new(0, 0)]
        );

        chain.advance();
        chain.advance();
        assert_eq!(
            chain.positions(),
            vec![GridVector::new(3, 0), GridVector::new(2, 0), GridVector::new(1, 0), GridVector::new(0, 0)]
        );
    }

    #[test]
    fn test_grow() {
        let mut chain = straight_chain(3);
        let tail = chain.tail().position();

        chain.grow();

        assert_eq!(chain.len(), 4);
        assert_eq!(chain.tail().position(), tail, "New segment starts on the old tail");
        assert_eq!(chain.tail().direction(), chain.segments()[2].direction());
        assert_eq!(chain.tail().role(), VisualRole::Tail);
        assert_eq!(chain.segments()[2].role(), VisualRole::Body, "Old tail becomes body");
    }

    #[test]
    fn test_grow_after_turn_keeps_single_corner() {
        let mut chain = straight_chain(4);
        chain.set_head_direction(Direction::Up);
        chain.advance();
        chain.advance();
        // The turn cell (4, 0) is now held by the segment just ahead of the tail
        chain.grow();

        let corners: Vec<_> =
            chain.segments().iter().filter(|s| s.role() == VisualRole::Corner).map(Segment::position).collect();
        assert_eq!(corners, vec![GridVector::new(4, 0)], "Only the turn cell is a corner");

        let roles: Vec<_> = chain.segments().iter().map(Segment::role).collect();
        assert_eq!(
            roles,
            vec![VisualRole::Head, VisualRole::Body, VisualRole::Corner, VisualRole::Body, VisualRole::Tail]
        );
        assert_eq!(chain.segments()[3].facing(), 0.0, "Straight piece keeps a straight angle");

        // The next advance hands the corner to the old tail as it enters the turn cell
        chain.advance();
        let corners: Vec<_> =
            chain.segments().iter().filter(|s| s.role() == VisualRole::Corner).map(Segment::position).collect();
        assert_eq!(corners, vec![GridVector::new(4, 0)]);
        assert_eq!(chain.segments()[3].role(), VisualRole::Corner);
    }

    #[test]
    fn test_grow_from_head_only() {
        let mut chain = SegmentChain::new(1).unwrap();
        chain.grow();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.head().role(), VisualRole::Head);
        assert_eq!(chain.tail().role(), VisualRole::Tail);
    }

    #[test]
    fn test_reset_state_restores_start() {
        let mut chain = straight_chain(3);
        chain.set_head_direction(Direction::Down);
        chain.advance();
        for _ in 0..5 {
            chain.grow();
        }
        let head_id = chain.head().id();

        chain.reset_state(3).unwrap();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.head_position(), START_POSITION);
        assert_eq!(chain.head_direction(), START_DIRECTION);
        assert_eq!(chain.head().id(), head_id, "Head survives a reset");
        assert!(chain.positions().iter().all(|&p| p == START_POSITION));
    }

    #[test]
    fn test_corner_roles() {
        let mut chain = straight_chain(4);
        chain.set_head_direction(Direction::Up);
        chain.advance();

        let roles: Vec<_> = chain.segments().iter().map(Segment::role).collect();
        assert_eq!(roles, vec![VisualRole::Head, VisualRole::Corner, VisualRole::Body, VisualRole::Tail]);
        assert_eq!(chain.segments()[1].position(), GridVector::new(4, 0));

        // The corner stays on its cell and is handed down the chain
        chain.advance();
        let roles: Vec<_> = chain.segments().iter().map(Segment::role).collect();
        assert_eq!(roles, vec![VisualRole::Head, VisualRole::Body, VisualRole::Corner, VisualRole::Tail]);
        assert_eq!(chain.segments()[2].position(), GridVector::new(4, 0));
    }

    #[test]
    fn test_head_and_tail_never_corner() {
        let mut chain = straight_chain(2);
        chain.set_head_direction(Direction::Up);
        chain.advance();
        chain.advance();

        for segment in chain.segments() {
            assert_ne!(segment.role(), VisualRole::Corner);
        }
    }

    #[test]
    fn test_occupies() {
        let chain = straight_chain(3);
        assert!(chain.occupies(GridVector::new(3, 0)));
        assert!(chain.occupies(GridVector::new(1, 0)));
        assert!(!chain.occupies(GridVector::new(0, 0)));
        assert!(!chain.body_occupies(chain.head_position()));
    }

    #[test]
    fn test_relocate_head_only_moves_head() {
        let mut chain = straight_chain(3);
        let body = chain.positions()[1..].to_vec();
        chain.relocate_head(GridVector::new(-9, 0));
        assert_eq!(chain.head_position(), GridVector::new(-9, 0));
        assert_eq!(chain.positions()[1..], body[..]);
    }
}
