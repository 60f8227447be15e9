//! Stock collaborator implementations

use std::collections::VecDeque;

use super::{IntentSource, ScoreListener, types::Direction};

/// Replays a fixed list of per-frame intents, then reports none
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntents {
    frames: VecDeque<Option<Direction>>,
}

impl ScriptedIntents {
    /// Script that replays `frames` in order, one per poll
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Option<Direction>>,
    {
        Self { frames: frames.into_iter().collect() }
    }

    /// Queue an intent for a later frame
    pub fn push(&mut self, intent: Option<Direction>) {
        self.frames.push_back(intent);
    }
}

impl IntentSource for ScriptedIntents {
    fn poll_intent(&mut self) -> Option<Direction> {
        self.frames.pop_front().flatten()
    }
}

/// Current and best score for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    best: u32,
}

impl ScoreBoard {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Food eaten this round
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest round score so far
    pub fn best(&self) -> u32 {
        self.best
    }
}

impl ScoreListener for ScoreBoard {
    fn on_food_eaten(&mut self, _length: usize) {
        self.score += 1;
        self.best = self.best.max(self.score);
    }

    fn on_round_reset(&mut self) {
        self.score = 0;
    }
}
