//! Randomized ball creation from screen clicks

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Body, Color};
use crate::error::SimError;
use crate::pixels_to_meters;
use crate::settings::SpawnConfig;

/// Turns a click point into a ball with sampled velocity, radius and color.
///
/// Owns its RNG so spawning is reproducible from the seed alone.
#[derive(Debug, Clone)]
pub struct Spawner {
    pub config: SpawnConfig,
    pub pixels_per_meter: f64,
    seed: u64,
    rng: Pcg32,
}

impl Spawner {
    /// Fails if `config` has an empty range or a non-positive scale, since
    /// sampling from it would panic.
    pub fn new(config: SpawnConfig, pixels_per_meter: f64, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        if !(pixels_per_meter.is_finite() && pixels_per_meter > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "pixels_per_meter must be positive, got {pixels_per_meter}"
            )));
        }
        Ok(Self {
            config,
            pixels_per_meter,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the random sequence from the original seed
    pub fn reseed(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// One velocity component, an integer in `[velocity_min, velocity_max)`
    pub fn sample_velocity(&mut self) -> f64 {
        let (min, max) = (self.config.velocity_min, self.config.velocity_max);
        self.rng.random_range(min..max) as f64
    }

    /// Radius in `[radius_min, radius_max)`
    pub fn sample_radius(&mut self) -> f64 {
        let (min, max) = (self.config.radius_min, self.config.radius_max);
        self.rng.random_range(min..max)
    }

    /// Random opaque color, each channel in `0..255`
    pub fn sample_color(&mut self) -> Color {
        Color::new(
            self.rng.random_range(0..255),
            self.rng.random_range(0..255),
            self.rng.random_range(0..255),
        )
    }

    /// Create a ball centered under the given pixel coordinates
    pub fn spawn(&mut self, x_px: f64, y_px: f64) -> Result<Body, SimError> {
        let color = self.sample_color();
        self.spawn_with_color(x_px, y_px, color)
    }

    /// Like [`Spawner::spawn`] but with a caller-chosen color
    pub fn spawn_with_color(
        &mut self,
        x_px: f64,
        y_px: f64,
        color: Color,
    ) -> Result<Body, SimError> {
        let pos = pixels_to_meters(x_px, y_px, self.pixels_per_meter);
        let vel = DVec2::new(self.sample_velocity(), self.sample_velocity());
        let radius = self.sample_radius();
        Body::new(pos, vel, radius, self.config.density, color)
    }
}
