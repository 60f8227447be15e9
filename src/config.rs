//! Simulation configuration
//!
//! This module defines the tunable parameters of a round and provides
//! validation, builder-style setters and JSON loading.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::{SimError, SimResult},
    sim::boundary::Bounds,
};

/// Simulation parameters
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of segments (head included) at the start of a round
    pub initial_size: usize,

    /// Base rate in steps per second
    pub speed: f64,

    /// Factor applied on top of `speed`
    pub speed_multiplier: f64,

    /// Wrap the head to the opposite side instead of resetting on walls
    pub move_through_walls: bool,

    /// Walls sit at `x = ±half_width`
    pub half_width: i32,

    /// Walls sit at `y = ±half_height`
    pub half_height: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_size: 4,
            speed: 20.0,
            speed_multiplier: 1.0,
            move_through_walls: false,
            half_width: 10,
            half_height: 10,
        }
    }
}

impl SimConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> SimResult<()> {
        if self.initial_size < 1 {
            return Err(SimError::InitialSizeTooSmall(self.initial_size));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SimError::NonPositiveSpeed(self.speed));
        }
        if !(self.speed_multiplier.is_finite() && self.speed_multiplier > 0.0) {
            return Err(SimError::NonPositiveMultiplier(self.speed_multiplier));
        }
        self.bounds()?;
        Ok(())
    }

    /// Play-field bounds described by this configuration
    pub fn bounds(&self) -> SimResult<Bounds> {
        Bounds::new(self.half_width, self.half_height)
    }

    /// Set initial chain length
    pub fn initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Set base speed
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set speed multiplier
    pub fn speed_multiplier(mut self, multiplier: f64) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    /// Enable or disable wrap-through walls
    pub fn move_through_walls(mut self, enabled: bool) -> Self {
        self.move_through_walls = enabled;
        self
    }

    /// Set wall positions
    pub fn half_extents(mut self, half_width: i32, half_height: i32) -> Self {
        self.half_width = half_width;
        self.half_height = half_height;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json).context("malformed simulation config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json_str(&contents).with_context(|| format!("loading config {}", path.display()))
    }

    /// Save configuration to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::*;
    use crate::sim::MAX_HALF_EXTENT;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_size, 4);
        assert_eq!(config.speed, 20.0);
        assert_eq!(config.speed_multiplier, 1.0);
        assert!(!config.move_through_walls);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            SimConfig::new().initial_size(0).validate(),
            Err(SimError::InitialSizeTooSmall(0))
        );
        assert_eq!(SimConfig::new().speed(0.0).validate(), Err(SimError::NonPositiveSpeed(0.0)));
        assert_eq!(
            SimConfig::new().speed_multiplier(-1.0).validate(),
            Err(SimError::NonPositiveMultiplier(-1.0))
        );
        assert!(SimConfig::new().half_extents(1, 1).validate().is_err());
        assert_eq!(
            SimConfig::new().half_extents(100_000, 100_000).validate(),
            Err(SimError::InvalidBounds { half_width: 100_000, half_height: 100_000 })
        );
        assert!(SimConfig::new().half_extents(MAX_HALF_EXTENT, 2).validate().is_ok());

        // A single-segment snake is fine
        assert!(SimConfig::new().initial_size(1).validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimConfig::new().initial_size(6).speed(10.0).speed_multiplier(1.5).move_through_walls(true);

        assert_eq!(config.initial_size, 6);
        assert_eq!(config.speed_multiplier, 1.5);
        assert!(config.move_through_walls);

        // Other values should remain default
        assert_eq!(config.half_width, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() -> Result<()> {
        let config = SimConfig::from_json_str(r#"{ "speed": 8.0, "move_through_walls": true }"#)?;
        assert_eq!(config.speed, 8.0);
        assert!(config.move_through_walls);
        assert_eq!(config.initial_size, 4);
        Ok(())
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(SimConfig::from_json_str(r#"{ "initial_size": 0 }"#).is_err());
        assert!(SimConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_json_file_roundtrip() -> Result<()> {
        let config = SimConfig::new().initial_size(7).half_extents(15, 12);
        let temp_file = NamedTempFile::new()?;

        config.save_json(temp_file.path())?;
        let loaded = SimConfig::load_json(temp_file.path())?;

        assert_eq!(loaded, config);
        Ok(())
    }
}
