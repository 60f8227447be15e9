//! Fixed-interval tick gate
//!
//! Decouples simulation rate from frame rate: the caller may ask every
//! frame, but a tick is only admitted once `1 / (speed * multiplier)`
//! seconds have passed since the previous one.

use tracing::info;

use crate::error::{SimError, SimResult};

/// Gate that admits at most one tick per interval
#[derive(Debug, Clone)]
pub struct Pacer {
    speed: f64,
    multiplier: f64,
    next_eligible: f64,
    last_tick: Option<f64>,
}

impl Pacer {
    /// Create a pacer running at `speed * multiplier` steps per second
    ///
    /// The first check at any time admits a tick.
    pub fn new(speed: f64, multiplier: f64) -> SimResult<Self> {
        validate_rate(speed, multiplier)?;
        Ok(Self { speed, multiplier, next_eligible: f64::NEG_INFINITY, last_tick: None })
    }

    /// Seconds between admitted ticks
    pub fn interval(&self) -> f64 {
        1.0 / (self.speed * self.multiplier)
    }

    /// Base rate in steps per second
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Factor applied on top of the base rate
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Earliest time the next tick is admitted
    pub fn next_eligible(&self) -> f64 {
        self.next_eligible
    }

    /// Whether a check at `now` would admit a tick
    pub fn is_eligible(&self, now: f64) -> bool {
        now >= self.next_eligible
    }

    /// Admit a tick at `now` if eligible
    ///
    /// An admitted tick schedules the next one a full interval after `now`.
    pub fn try_admit(&mut self, now: f64) -> bool {
        if !self.is_eligible(now) {
            return false;
        }
        self.last_tick = Some(now);
        self.next_eligible = now + self.interval();
        true
    }

    /// Change the rate; the next eligible time is re-derived from the last
    /// admitted tick, which may move it earlier
    pub fn set_rate(&mut self, speed: f64, multiplier: f64) -> SimResult<()> {
        validate_rate(speed, multiplier)?;
        self.speed = speed;
        self.multiplier = multiplier;
        if let Some(last) = self.last_tick {
            self.next_eligible = last + self.interval();
        }
        info!(speed, multiplier, interval = self.interval(), "pacer rate changed");
        Ok(())
    }
}

fn validate_rate(speed: f64, multiplier: f64) -> SimResult<()> {
    if !(speed.is_finite() && speed > 0.0) {
        return Err(SimError::NonPositiveSpeed(speed));
    }
    if !(multiplier.is_finite() && multiplier > 0.0) {
        return Err(SimError::NonPositiveMultiplier(multiplier));
    }
    Ok(())
}
