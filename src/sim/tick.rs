//! Fixed timestep simulation tick
//!
//! Applies the input gathered since the last tick, then advances the world.
//! Spawning and clearing only ever happen here, between steps.

use super::world::{StepReport, World};
use crate::settings::SimConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clear all balls (right click)
    pub clear: bool,
    /// Screen points (pixels) to spawn balls at (left clicks)
    pub spawn_at: Vec<(f64, f64)>,
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub spawned: usize,
    /// Spawns refused by the creation limit or by the arena size
    pub rejected: usize,
    pub cleared: bool,
    pub step: StepReport,
}

/// Apply input then advance the world by `config.dt`.
///
/// Clearing happens before spawning, so a tick with both starts over with
/// only the new balls.
pub fn tick(world: &mut World, input: &TickInput, config: &SimConfig) -> TickReport {
    let mut report = TickReport::default();

    if input.clear {
        world.clear_bodies();
        report.cleared = true;
    }

    for &(x, y) in &input.spawn_at {
        if try_spawn(world, x, y, config) {
            report.spawned += 1;
        } else {
            report.rejected += 1;
        }
    }

    report.step = world.step_with(config);
    report
}

/// Spawn one ball, honoring `max_total_diameter` if set
fn try_spawn(world: &mut World, x: f64, y: f64, config: &SimConfig) -> bool {
    let body = match world.spawner_mut().spawn(x, y) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Spawn at ({x}, {y}) failed: {e}");
            return false;
        }
    };

    if let Some(limit) = config.max_total_diameter {
        let total = world.total_diameter() + 2.0 * body.radius();
        if total > limit {
            log::debug!(
                "Spawn at ({x}, {y}) refused: total diameter {total:.2} > {limit:.2}"
            );
            return false;
        }
    }

    match world.insert(body) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Spawn at ({x}, {y}) rejected: {e}");
            false
        }
    }
}
