//! Error types for the simulation
//!
//! Every variant is a configuration problem detected before a chain is
//! built or a rate is applied. Gameplay failures (self collision, walls,
//! obstacles) are not errors; they reset the round.

use thiserror::Error;

/// Errors raised when validating simulation parameters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A chain needs at least its head
    #[error("initial_size must be at least 1, got {0}")]
    InitialSizeTooSmall(usize),

    /// Base speed is zero, negative or not finite
    #[error("speed must be a positive number of steps per second, got {0}")]
    NonPositiveSpeed(f64),

    /// Speed multiplier is zero, negative or not finite
    #[error("speed_multiplier must be positive, got {0}")]
    NonPositiveMultiplier(f64),

    /// Half extents outside `2..=MAX_HALF_EXTENT`
    #[error("grid half extents must be between 2 and {max}, got {half_width}x{half_height}", max = crate::sim::MAX_HALF_EXTENT)]
    InvalidBounds {
        /// Requested horizontal half extent
        half_width: i32,
        /// Requested vertical half extent
        half_height: i32,
    },
}

/// Result alias for simulation operations
pub type SimResult<T> = Result<T, SimError>;
