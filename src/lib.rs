//! # Gridsnake
//!
//! Movement and growth simulation for a grid-based snake game.
//!
//! A chain of segments advances one cell per tick across an integer grid,
//! grows when it eats, and resets when it runs into itself, an obstacle or
//! (unless wrap-through is enabled) a wall. Ticks are paced at a fixed rate
//! independent of how often the caller renders.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridsnake::prelude::*;
//!
//! let config = SimConfig::new().initial_size(4).speed(20.0);
//! let intents = ScriptedIntents::new([Some(Direction::Up)]);
//! let mut game = Game::with_seed(&config, intents, ScoreBoard::new(), 7).unwrap();
//!
//! let report = game.frame(0.0).unwrap();
//! assert!(report.advanced());
//! assert_eq!(game.controller().chain().head_direction(), Direction::Up);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Simulation configuration
pub mod config;

/// Error types
pub mod error;

/// Top-level frame loop and renderer snapshot
pub mod game;

/// Segment chain, turning, pacing, boundaries and orchestration
pub mod sim;

/// Prelude module for convenient imports
///
/// This module re-exports commonly used types and traits for convenience.
pub mod prelude {
    pub use crate::{
        config::SimConfig,
        error::{SimError, SimResult},
        game::{FrameReport, Game, Snapshot},
        sim::{
            Contact, ContactOutcome, Direction, GridVector, IntentSource, ScoreBoard, ScoreListener,
            ScriptedIntents, SegmentChain, SegmentView, SimulationController, TickReport, VisualRole,
        },
    };
}

/// Current version of gridsnake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
