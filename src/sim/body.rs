//! Ball state and per-step kinematics

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Display color of a ball. Not read by the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for GPU upload
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// A circular rigid body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position (meters)
    pub pos: DVec2,
    /// Velocity (m/s)
    pub vel: DVec2,
    /// Accumulated external force (N), excluding gravity
    pub force: DVec2,
    mass: f64,
    radius: f64,
    color: Color,
}

impl Body {
    /// Create a body; mass is derived as `π·r²·density`.
    pub fn new(
        pos: DVec2,
        vel: DVec2,
        radius: f64,
        density: f64,
        color: Color,
    ) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidBody(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        if !(density.is_finite() && density > 0.0) {
            return Err(SimError::InvalidBody(format!(
                "density must be positive and finite, got {density}"
            )));
        }
        if !(pos.is_finite() && vel.is_finite()) {
            return Err(SimError::InvalidBody(format!(
                "non-finite initial state pos={pos} vel={vel}"
            )));
        }

        let mass = PI * radius * radius * density;
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidBody(format!(
                "derived mass {mass} is not positive and finite"
            )));
        }

        Ok(Self {
            pos,
            vel,
            force: DVec2::ZERO,
            mass,
            radius,
            color,
        })
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Integrate velocity over `dt` under gravity `g` (+y) and the
    /// accumulated force.
    ///
    /// The x axis carries a second-order `½·a·dt²` term. With zero force it
    /// is a no-op, but it must stay in place for parity once forces are set.
    pub fn accelerate(&mut self, dt: f64, g: f64) {
        let accel = self.force / self.mass;
        self.vel.y += (g + accel.y) * dt;
        self.vel.x += (accel.x * dt) + (0.5 * accel.x * dt * dt);
    }

    /// Integrate position over `dt`. Must run after [`Body::accelerate`].
    ///
    /// y is plain Euler on the already-updated velocity; x uses the average of
    /// the current velocity and a one-step force prediction.
    pub fn advance(&mut self, dt: f64) {
        self.pos.y += self.vel.y * dt;
        let predicted = self.vel.x + (self.force.x / self.mass) * dt;
        self.pos.x += (0.5 * self.vel.x + 0.5 * predicted) * dt;
    }

    /// Magnitude of the velocity (m/s)
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Linear momentum `m·v`
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// Kinetic energy `½·m·|v|²`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    /// True when position and velocity hold no NaN or infinity
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}
