//! Headless snake session
//!
//! Runs a simulated 60 FPS frame loop with a greedy steering intent source
//! that heads for the food, and logs round results. Pass a JSON config path
//! as the first argument to override the defaults.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example headless -- config.json
//! RUST_LOG=gridsnake=debug cargo run --example headless
//! ```

use anyhow::Result;
use gridsnake::prelude::*;

/// Simulated seconds to run
const DURATION_SECS: f64 = 60.0;

/// Simulated render rate
const FRAMES_PER_SECOND: f64 = 60.0;

/// Pick a turn toward the food that is legal from `heading`
fn steer(head: GridVector, heading: Direction, food: Option<GridVector>) -> Option<Direction> {
    let delta = food? - head;
    let wanted = if heading.is_horizontal() {
        match delta.y.signum() {
            1 => Direction::Up,
            -1 => Direction::Down,
            _ => return None,
        }
    } else {
        match delta.x.signum() {
            1 => Direction::Right,
            -1 => Direction::Left,
            _ => return None,
        }
    };
    Some(wanted)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load_json(path)?,
        None => SimConfig::new().move_through_walls(true),
    };
    tracing::info!(?config, "🐍 Starting headless snake session");

    let mut game = Game::with_seed(&config, ScriptedIntents::default(), ScoreBoard::new(), 2024)?;
    let frames = (DURATION_SECS * FRAMES_PER_SECOND) as u64;
    let mut longest = game.controller().chain().len();

    for frame in 0..frames {
        let now = frame as f64 / FRAMES_PER_SECOND;

        let chain = game.controller().chain();
        let intent = steer(chain.head_position(), chain.head_direction(), game.arena().food());
        game.controller_mut().intents_mut().push(intent);

        let report = game.frame(now)?;
        longest = longest.max(game.controller().chain().len());

        if report.was_reset() {
            tracing::info!(
                "Round over at t={:.2}s, best score so far {}",
                now,
                game.controller().score().best()
            );
        }
    }

    let snapshot = game.snapshot();
    tracing::info!(
        ticks = snapshot.tick,
        rounds = snapshot.round,
        longest,
        score = game.controller().score().score(),
        best = game.controller().score().best(),
        "Session finished"
    );
    println!("{}", snapshot.to_json()?);

    Ok(())
}
