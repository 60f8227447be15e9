//! Per-tick orchestration
//!
//! The controller owns the chain and the components that act on it. A
//! frame is two calls in order: [`SimulationController::poll_intent`],
//! which may run every frame, then [`SimulationController::fixed_tick`],
//! which only does work when the pacer admits it. Contacts reported by the
//! collision layer are handled synchronously through
//! [`SimulationController::handle_contact`].

use tracing::{debug, info, trace};

use super::{
    Contact, ContactOutcome, Direction, IntentSource, ScoreListener, TickReport,
    boundary::{BoundaryAction, BoundaryPolicy},
    chain::SegmentChain,
    pacer::Pacer,
    turn::TurnController,
};
use crate::{config::SimConfig, error::SimResult};

/// Drives one snake through rounds of play
#[derive(Debug)]
pub struct SimulationController<I, L> {
    chain: SegmentChain,
    turns: TurnController,
    pacer: Pacer,
    boundary: BoundaryPolicy,
    initial_size: usize,
    intents: I,
    score: L,
    ticks: u64,
    rounds: u64,
}

impl<I: IntentSource, L: ScoreListener> SimulationController<I, L> {
    /// Validate `config` and start the first round
    pub fn new(config: &SimConfig, intents: I, score: L) -> SimResult<Self> {
        config.validate()?;

        let mut controller = Self {
            chain: SegmentChain::new(config.initial_size)?,
            turns: TurnController::new(),
            pacer: Pacer::new(config.speed, config.speed_multiplier)?,
            boundary: BoundaryPolicy::new(config.move_through_walls),
            initial_size: config.initial_size,
            intents,
            score,
            ticks: 0,
            rounds: 0,
        };
        controller.begin_round();
        Ok(controller)
    }

    /// Read this frame's intent and latch it if it is a legal turn
    pub fn poll_intent(&mut self) -> bool {
        let intent = self.intents.poll_intent();
        self.turns.latch(intent, self.chain.head_direction())
    }

    /// Run one tick if the pacer admits one at `now` (seconds)
    ///
    /// Applies the latched turn, then advances the chain.
    pub fn fixed_tick(&mut self, now: f64) -> Option<TickReport> {
        if !self.pacer.try_admit(now) {
            return None;
        }

        let turned = self.turns.apply(&mut self.chain);
        let head = self.chain.advance();
        self.ticks += 1;

        trace!(tick = self.ticks, ?head, ?turned, "tick");
        Some(TickReport { tick: self.ticks, turned, head, length: self.chain.len() })
    }

    /// React to a contact raised by the collision layer
    pub fn handle_contact(&mut self, contact: Contact) -> SimResult<ContactOutcome> {
        debug!(?contact, "contact");
        match contact {
            Contact::Food => {
                self.chain.grow();
                let length = self.chain.len();
                self.score.on_food_eaten(length);
                Ok(ContactOutcome::Grew { length })
            }
            Contact::Obstacle | Contact::Body => {
                self.reset_round()?;
                Ok(ContactOutcome::Reset)
            }
            Contact::Wall { wall, travel } => {
                match self.boundary.decide(self.chain.head_position(), wall, travel) {
                    BoundaryAction::Traverse(to) => {
                        self.chain.relocate_head(to);
                        Ok(ContactOutcome::Traversed { to })
                    }
                    BoundaryAction::Reset => {
                        self.reset_round()?;
                        Ok(ContactOutcome::Reset)
                    }
                }
            }
        }
    }

    /// Rebuild the chain at its start state and begin a new round
    pub fn reset_round(&mut self) -> SimResult<()> {
        self.chain.reset_state(self.initial_size)?;
        self.begin_round();
        Ok(())
    }

    /// Start a round on a chain already in its start state
    fn begin_round(&mut self) {
        self.turns.clear();
        self.rounds += 1;
        self.score.on_round_reset();
        info!(round = self.rounds, initial_size = self.initial_size, "round started");
    }

    /// Change the tick rate; rejected rates leave the current one in place
    pub fn set_speed(&mut self, speed: f64, multiplier: f64) -> SimResult<()> {
        self.pacer.set_rate(speed, multiplier)
    }

    /// The snake
    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    /// Tick gate
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    /// Wall handling
    pub fn boundary(&self) -> &BoundaryPolicy {
        &self.boundary
    }

    /// Turn latched for the next tick
    pub fn pending_turn(&self) -> Option<Direction> {
        self.turns.pending()
    }

    /// Score collaborator
    pub fn score(&self) -> &L {
        &self.score
    }

    /// Intent collaborator, e.g. to queue scripted input
    pub fn intents_mut(&mut self) -> &mut I {
        &mut self.intents
    }

    /// Ticks run since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rounds started since construction, the first one included
    pub fn rounds(&self) -> u64 {
        self.rounds
    }
}
