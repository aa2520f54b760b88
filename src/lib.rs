//! Bouncing Balls - a deterministic 2D ball physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, walls, pairwise collisions, ticks)
//! - `settings`: Serializable simulation configuration
//! - `renderer`: Render extraction for an external drawing layer
//! - `error`: Error types for construction and configuration

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::{SimConfig, SpawnConfig};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const SIM_DT: f64 = 0.0167;
    /// Gravitational acceleration (m/s², positive y points down)
    pub const GRAVITY: f64 = 9.82;
    /// Coefficient shared by wall and ball-ball collisions
    pub const ELASTICITY: f64 = 0.8;
    /// Screen scale (pixels per meter)
    pub const PIXELS_PER_METER: f64 = 100.0;

    /// Frame size in pixels
    pub const FRAME_WIDTH_PX: u32 = 800;
    pub const FRAME_HEIGHT_PX: u32 = 600;

    /// Arena size in meters
    pub const ARENA_WIDTH: f64 = FRAME_WIDTH_PX as f64 / PIXELS_PER_METER;
    pub const ARENA_HEIGHT: f64 = FRAME_HEIGHT_PX as f64 / PIXELS_PER_METER;

    /// Spawn defaults: velocity components are drawn from [min, max) m/s
    pub const SPAWN_VELOCITY_MIN: i32 = -10;
    pub const SPAWN_VELOCITY_MAX: i32 = 10;
    /// Spawn defaults: radius drawn from [min, max) meters
    pub const SPAWN_RADIUS_MIN: f64 = 0.1;
    pub const SPAWN_RADIUS_MAX: f64 = 0.5;
    /// Ball density (kg/m²)
    pub const BALL_DENSITY: f64 = 1.0;
}

/// Convert a screen point (pixels) to world coordinates (meters)
#[inline]
pub fn pixels_to_meters(x_px: f64, y_px: f64, pixels_per_meter: f64) -> DVec2 {
    DVec2::new(x_px, y_px) / pixels_per_meter
}

/// Convert world coordinates (meters) to a screen point (pixels)
#[inline]
pub fn meters_to_pixels(pos: DVec2, pixels_per_meter: f64) -> DVec2 {
    pos * pixels_per_meter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_matches_frame() {
        assert_eq!(consts::ARENA_WIDTH, 8.0);
        assert_eq!(consts::ARENA_HEIGHT, 6.0);
    }

    #[test]
    fn test_pixel_conversion() {
        let world = pixels_to_meters(250.0, 130.0, 100.0);
        assert!((world.x - 2.5).abs() < 1e-12);
        assert!((world.y - 1.3).abs() < 1e-12);

        let screen = meters_to_pixels(world, 100.0);
        assert!((screen.x - 250.0).abs() < 1e-9);
        assert!((screen.y - 130.0).abs() < 1e-9);
    }
}
