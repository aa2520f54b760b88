//! The ball collection and one-tick advancement
//!
//! Bodies live in a `Vec` in creation order. Pairwise resolution addresses
//! them by index, and later pairs in a tick see the state left by earlier
//! pairs. Clusters of three or more balls are therefore resolved
//! sequentially, not simultaneously.

use glam::DVec2;

use super::arena::Arena;
use super::body::{Body, Color};
use super::collision::{self, PairOutcome, SkipReason};
use super::spawn::Spawner;
use crate::error::SimError;
use crate::settings::SimConfig;

/// Index of a body in creation order. Invalidated by [`World::clear_bodies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// What happened during one [`World::step`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Individual wall contacts (a corner hit counts twice)
    pub wall_hits: usize,
    /// Overlapping pairs whose velocities were exchanged
    pub collisions: usize,
    /// Overlapping pairs left untouched, with their indices
    pub skipped: Vec<(usize, usize, SkipReason)>,
    /// Bodies pushed back inside the arena after pair resolution
    pub contained: usize,
}

/// The simulation world
#[derive(Debug, Clone)]
pub struct World {
    arena: Arena,
    bodies: Vec<Body>,
    spawner: Spawner,
    time_ticks: u64,
}

impl World {
    pub fn new(arena: Arena, spawner: Spawner) -> Self {
        log::info!(
            "World created: {}x{} m arena, spawn seed {}",
            arena.width,
            arena.height,
            spawner.seed()
        );
        Self {
            arena,
            bodies: Vec::new(),
            spawner,
            time_ticks: 0,
        }
    }

    /// Build a world from a validated config
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let arena = Arena::new(config.arena_width, config.arena_height);
        let spawner = Spawner::new(config.spawn.clone(), config.pixels_per_meter, config.seed)?;
        Ok(Self::new(arena, spawner))
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn spawner_mut(&mut self) -> &mut Spawner {
        &mut self.spawner
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of completed steps
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Add a ball. Balls too large for the arena are rejected; overlap with
    /// existing balls is allowed.
    pub fn insert(&mut self, body: Body) -> Result<BodyHandle, SimError> {
        self.arena.fits(body.radius())?;
        self.bodies.push(body);
        Ok(BodyHandle(self.bodies.len() - 1))
    }

    /// Spawn a random ball under a screen point
    pub fn create_body(&mut self, x_px: f64, y_px: f64) -> Result<BodyHandle, SimError> {
        let body = self.spawner.spawn(x_px, y_px)?;
        self.insert(body)
    }

    /// Spawn a ball under a screen point with a fixed color
    pub fn create_body_with_color(
        &mut self,
        x_px: f64,
        y_px: f64,
        color: Color,
    ) -> Result<BodyHandle, SimError> {
        let body = self.spawner.spawn_with_color(x_px, y_px, color)?;
        self.insert(body)
    }

    /// Remove every ball
    pub fn clear_bodies(&mut self) {
        log::info!("Cleared {} balls", self.bodies.len());
        self.bodies.clear();
    }

    /// Sum of all ball diameters
    pub fn total_diameter(&self) -> f64 {
        self.bodies.iter().map(|b| 2.0 * b.radius()).sum()
    }

    /// Vector sum of `m·v` over all balls
    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Sum of kinetic energies
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Advance one step using the config's timestep, gravity and elasticity
    pub fn step_with(&mut self, config: &SimConfig) -> StepReport {
        self.step(config.dt, config.gravity, config.elasticity)
    }

    /// Advance every ball by `dt` seconds.
    ///
    /// Per ball: integrate velocity, integrate position, bounce off walls.
    /// Then every overlapping pair is resolved in `(i, j)`, `i < j` order, and
    /// finally any ball pushed out by pair resolution is clamped back inside.
    /// Pair resolution never rewinds a pair further than `dt`.
    pub fn step(&mut self, dt: f64, g: f64, elasticity: f64) -> StepReport {
        let mut report = StepReport::default();

        for body in &mut self.bodies {
            body.accelerate(dt, g);
            body.advance(dt);
            report.wall_hits += self.arena.bounce(body, elasticity).count();
        }

        self.resolve_collisions(dt, elasticity, &mut report);

        for body in &mut self.bodies {
            if self.arena.contain(body) {
                report.contained += 1;
            }
        }
        if report.contained > 0 {
            log::debug!(
                "tick {}: {} balls clamped back into the arena",
                self.time_ticks,
                report.contained
            );
        }

        self.time_ticks += 1;
        report
    }

    fn resolve_collisions(&mut self, dt: f64, elasticity: f64, report: &mut StepReport) {
        let len = self.bodies.len();
        for i in 0..len {
            for j in (i + 1)..len {
                let (a, b) = collision::pair_mut(&mut self.bodies, i, j);
                if !collision::overlapping(a, b) {
                    continue;
                }

                match collision::resolve_pair(a, b, elasticity, dt) {
                    PairOutcome::Resolved { .. } => report.collisions += 1,
                    PairOutcome::Skipped(reason) => {
                        match reason {
                            SkipReason::Coincident => log::debug!(
                                "tick {}: balls {i} and {j} share a center, skipping",
                                self.time_ticks
                            ),
                            SkipReason::NonFinite => log::warn!(
                                "tick {}: balls {i} and {j} rolled back after a non-finite result",
                                self.time_ticks
                            ),
                        }
                        report.skipped.push((i, j, reason));
                    }
                }
            }
        }
    }
}
