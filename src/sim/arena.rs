//! Reference collision layer
//!
//! Tracks what else lives on the grid (walls, obstacles, one food pellet)
//! and reports what the head ran into. Only the head cell is inspected.

use std::collections::HashSet;

use rand::{Rng, seq::IteratorRandom};
use tracing::{debug, warn};

use super::{Contact, boundary::Bounds, chain::SegmentChain, types::GridVector};

/// Random cells tried before scanning the whole board for food
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Walls, obstacles and food around the snake
#[derive(Debug, Clone)]
pub struct Arena {
    bounds: Bounds,
    food: Option<GridVector>,
    obstacles: HashSet<GridVector>,
}

impl Arena {
    /// Empty arena inside `bounds`
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds, food: None, obstacles: HashSet::new() }
    }

    /// Play-field walls
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Cell of the current food pellet, if any
    pub fn food(&self) -> Option<GridVector> {
        self.food
    }

    /// Cells blocked by obstacles
    pub fn obstacles(&self) -> &HashSet<GridVector> {
        &self.obstacles
    }

    /// Place food on a specific cell, e.g. for scripted sessions
    pub fn set_food(&mut self, cell: Option<GridVector>) {
        self.food = cell;
    }

    /// Add an obstacle inside the walls; returns false for cells outside
    /// or already blocked
    pub fn add_obstacle(&mut self, cell: GridVector) -> bool {
        if !self.bounds.contains(cell) {
            return false;
        }
        self.obstacles.insert(cell)
    }

    /// The single contact for the head's current cell, if any
    ///
    /// Priority is wall, obstacle, own body, food.
    pub fn detect(&self, chain: &SegmentChain) -> Option<Contact> {
        let head = chain.head_position();
        if let Some(wall) = self.bounds.wall_at(head) {
            return Some(Contact::Wall { wall, travel: chain.head_direction() });
        }
        if self.obstacles.contains(&head) {
            return Some(Contact::Obstacle);
        }
        if chain.body_occupies(head) {
            return Some(Contact::Body);
        }
        if self.food == Some(head) {
            return Some(Contact::Food);
        }
        None
    }

    /// Move the food to a random free cell
    ///
    /// Free means inside the walls, not under the chain and not an
    /// obstacle. Random cells are tried first; a crowded board falls back to
    /// a scan of every cell. Clears the food when the board is full.
    pub fn respawn_food<R: Rng>(&mut self, chain: &SegmentChain, rng: &mut R) -> Option<GridVector> {
        let blocked = chain.len() + self.obstacles.len();
        let sparse = blocked.saturating_mul(2) < self.bounds.area();

        self.food = if sparse { self.sample_free_cell(chain, rng) } else { None };
        if self.food.is_none() {
            let obstacles = &self.obstacles;
            self.food = self
                .bounds
                .cells()
                .filter(|cell| !chain.occupies(*cell) && !obstacles.contains(cell))
                .choose(rng);
        }

        match self.food {
            Some(cell) => debug!(?cell, "food placed"),
            None => warn!("no free cell left for food"),
        }
        self.food
    }

    fn sample_free_cell<R: Rng>(&self, chain: &SegmentChain, rng: &mut R) -> Option<GridVector> {
        let (w, h) = (self.bounds.half_width(), self.bounds.half_height());
        (0..FOOD_SAMPLE_ATTEMPTS)
            .map(|_| GridVector::new(rng.gen_range(1 - w..w), rng.gen_range(1 - h..h)))
            .find(|cell| !chain.occupies(*cell) && !self.obstacles.contains(cell))
    }
}
