//! Top-level frame loop
//!
//! [`Game`] wires a [`SimulationController`] to the reference [`Arena`]
//! collision layer and a random source for food placement. Each call to
//! [`Game::frame`] is one rendered frame: poll intent, run the fixed tick
//! if the pacer admits it, then resolve the head's contact to completion.

use anyhow::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::SimConfig,
    error::SimResult,
    sim::{
        Arena, Contact, ContactOutcome, GridVector, IntentSource, ScoreListener, SegmentView,
        SimulationController, TickReport,
    },
};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Set when the pacer admitted a tick this frame
    pub tick: Option<TickReport>,

    /// Contacts handled this frame with their outcomes, in order
    pub contacts: Vec<(Contact, ContactOutcome)>,
}

impl FrameReport {
    /// Whether the chain moved this frame
    pub fn advanced(&self) -> bool {
        self.tick.is_some()
    }

    /// Whether a contact ended the round this frame
    pub fn was_reset(&self) -> bool {
        self.contacts.iter().any(|(_, outcome)| *outcome == ContactOutcome::Reset)
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Ticks run so far
    pub tick: u64,
    /// Current round, starting at 1
    pub round: u64,
    /// Chain length
    pub length: usize,
    /// Segments, head first
    pub segments: Vec<SegmentView>,
    /// Food cell, if any is placed
    pub food: Option<GridVector>,
    /// Obstacle cells, row by row
    pub obstacles: Vec<GridVector>,
}

impl Snapshot {
    /// Pretty-printed JSON for the renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A running session: simulation, collision layer and food placement
#[derive(Debug)]
pub struct Game<I, L, R = StdRng> {
    controller: SimulationController<I, L>,
    arena: Arena,
    rng: R,
}

impl<I: IntentSource, L: ScoreListener> Game<I, L, StdRng> {
    /// Create a session with a seeded random source
    pub fn with_seed(config: &SimConfig, intents: I, score: L, seed: u64) -> SimResult<Self> {
        Self::new(config, intents, score, StdRng::seed_from_u64(seed))
    }
}

impl<I: IntentSource, L: ScoreListener, R: Rng> Game<I, L, R> {
    /// Start the first round and place the first food with `rng`
    pub fn new(config: &SimConfig, intents: I, score: L, mut rng: R) -> SimResult<Self> {
        let controller = SimulationController::new(config, intents, score)?;
        let mut arena = Arena::new(config.bounds()?);
        arena.respawn_food(controller.chain(), &mut rng);
        Ok(Self { controller, arena, rng })
    }

    /// Run one frame at time `now` (seconds)
    pub fn frame(&mut self, now: f64) -> SimResult<FrameReport> {
        self.controller.poll_intent();

        let mut report = FrameReport { tick: self.controller.fixed_tick(now), contacts: Vec::new() };
        if report.tick.is_none() {
            return Ok(report);
        }

        // A traversal puts the head on a new cell, which is checked once more
        while let Some(contact) = self.arena.detect(self.controller.chain()) {
            let outcome = self.controller.handle_contact(contact)?;
            report.contacts.push((contact, outcome));

            match outcome {
                ContactOutcome::Grew { .. } | ContactOutcome::Reset => {
                    self.arena.respawn_food(self.controller.chain(), &mut self.rng);
                    break;
                }
                ContactOutcome::Traversed { .. } => {
                    if report.contacts.len() > 1 {
                        break;
                    }
                }
            }
        }

        if !report.contacts.is_empty() {
            debug!(contacts = ?report.contacts, "frame contacts");
        }
        Ok(report)
    }

    /// Read model for rendering the current state
    pub fn snapshot(&self) -> Snapshot {
        let chain = self.controller.chain();
        let mut obstacles: Vec<_> = self.arena.obstacles().iter().copied().collect();
        obstacles.sort_by_key(|cell| (cell.y, cell.x));

        Snapshot {
            tick: self.controller.ticks(),
            round: self.controller.rounds(),
            length: chain.len(),
            segments: chain.views().collect(),
            food: self.arena.food(),
            obstacles,
        }
    }

    /// The simulation
    pub fn controller(&self) -> &SimulationController<I, L> {
        &self.controller
    }

    /// Mutable simulation, e.g. to change speed mid-session
    pub fn controller_mut(&mut self) -> &mut SimulationController<I, L> {
        &mut self.controller
    }

    /// The collision layer
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Mutable collision layer, e.g. to place obstacles
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }
}
