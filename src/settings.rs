//! Simulation settings
//!
//! Everything the core used to read from ambient constants is passed in
//! explicitly through [`SimConfig`]. Persisted as JSON; missing fields fall
//! back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Distribution bounds for randomly spawned balls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Lower bound (inclusive) of each velocity component, m/s
    pub velocity_min: i32,
    /// Upper bound (exclusive) of each velocity component, m/s
    pub velocity_max: i32,
    /// Lower bound (inclusive) of the radius, meters
    pub radius_min: f64,
    /// Upper bound (exclusive) of the radius, meters
    pub radius_max: f64,
    /// Density used to derive mass, kg/m²
    pub density: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            velocity_min: SPAWN_VELOCITY_MIN,
            velocity_max: SPAWN_VELOCITY_MAX,
            radius_min: SPAWN_RADIUS_MIN,
            radius_max: SPAWN_RADIUS_MAX,
            density: BALL_DENSITY,
        }
    }
}

impl SpawnConfig {
    /// Reject empty ranges and non-positive radius or density
    pub fn validate(&self) -> Result<(), SimError> {
        if self.velocity_min >= self.velocity_max {
            return Err(SimError::InvalidConfig(format!(
                "spawn velocity range [{}, {}) is empty",
                self.velocity_min, self.velocity_max
            )));
        }
        if !(self.radius_min.is_finite() && self.radius_min > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "spawn radius_min must be positive, got {}",
                self.radius_min
            )));
        }
        if !(self.radius_max.is_finite() && self.radius_max > self.radius_min) {
            return Err(SimError::InvalidConfig(format!(
                "spawn radius range [{}, {}) is empty",
                self.radius_min, self.radius_max
            )));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "spawn density must be positive, got {}",
                self.density
            )));
        }
        Ok(())
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in meters (walls at x = 0 and x = width)
    pub arena_width: f64,
    /// Arena height in meters (walls at y = 0 and y = height)
    pub arena_height: f64,
    /// Gravitational acceleration, m/s² along +y
    pub gravity: f64,
    /// Fixed timestep in seconds
    pub dt: f64,
    /// Collision elasticity in (0, 1]
    pub elasticity: f64,
    /// Screen scale used by spawning and render extraction
    pub pixels_per_meter: f64,
    /// Random spawn distribution
    pub spawn: SpawnConfig,
    /// Creation policy: reject spawns once the summed diameters would exceed this
    pub max_total_diameter: Option<f64>,
    /// Seed for the spawn RNG
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            gravity: GRAVITY,
            dt: SIM_DT,
            elasticity: ELASTICITY,
            pixels_per_meter: PIXELS_PER_METER,
            spawn: SpawnConfig::default(),
            max_total_diameter: None,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Check every field; stepping with an unvalidated config is allowed but
    /// may produce nonsense.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("dt", self.dt),
            ("pixels_per_meter", self.pixels_per_meter),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.elasticity > 0.0 && self.elasticity <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "elasticity must be in (0, 1], got {}",
                self.elasticity
            )));
        }
        self.spawn.validate()?;

        let max_diameter = 2.0 * self.spawn.radius_max;
        if max_diameter > self.arena_width.min(self.arena_height) {
            return Err(SimError::InvalidConfig(format!(
                "largest spawn diameter {max_diameter} does not fit in a {}x{} arena",
                self.arena_width, self.arena_height
            )));
        }
        if let Some(limit) = self.max_total_diameter
            && !(limit.is_finite() && limit >= 0.0)
        {
            return Err(SimError::InvalidConfig(format!(
                "max_total_diameter must be non-negative, got {limit}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Simulation config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arena_width, 8.0);
        assert_eq!(config.arena_height, 6.0);
        assert_eq!(config.gravity, 9.82);
        assert_eq!(config.elasticity, 0.8);
    }

    #[test]
    fn test_rejects_bad_elasticity() {
        for elasticity in [0.0, -0.5, 1.01, f64::NAN] {
            let config = SimConfig {
                elasticity,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(SimError::InvalidConfig(_))),
                "elasticity {elasticity} should be rejected"
            );
        }

        let config = SimConfig {
            elasticity: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_spawn_ranges() {
        let mut config = SimConfig::default();
        config.spawn.velocity_min = 5;
        config.spawn.velocity_max = 5;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.spawn.radius_min = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.spawn.radius_max = 0.05;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.spawn.density = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_ball_larger_than_arena() {
        let config = SimConfig {
            arena_height: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_total_diameter_limit() {
        for limit in [-1.0, f64::NAN, f64::INFINITY] {
            let config = SimConfig {
                max_total_diameter: Some(limit),
                ..Default::default()
            };
            let result = config.validate();
            assert!(result.is_err(), "limit {limit} should be rejected");
        }

        let config = SimConfig {
            max_total_diameter: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "elasticity": 1.0, "spawn": { "density": 2.0 } }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.elasticity, 1.0);
        assert_eq!(config.spawn.density, 2.0);
        assert_eq!(config.spawn.radius_max, SPAWN_RADIUS_MAX);
        assert_eq!(config.gravity, GRAVITY);
    }

    #[test]
    fn test_from_json_validates() {
        let result = SimConfig::from_json(r#"{ "dt": -1.0 }"#);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));

        let result = SimConfig::from_json("not json");
        assert!(matches!(result, Err(SimError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "bouncing_balls_settings_{}.json",
            std::process::id()
        ));
        let config = SimConfig {
            seed: 42,
            max_total_diameter: Some(12.0),
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = SimConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = SimConfig::load("/nonexistent/bouncing_balls.json");
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
