//! Headless bouncing-balls runner
//!
//! Usage: `bouncing-balls [config.json] [ticks]`
//!
//! Drops a handful of balls as if the user had clicked across the top of the
//! window, runs the simulation for the requested number of ticks and logs
//! energy and collision statistics. Set `RUST_LOG=debug` for per-tick detail.

use std::process::ExitCode;

use bouncing_balls::consts::{FRAME_WIDTH_PX, SIM_DT};
use bouncing_balls::renderer::extract_instances;
use bouncing_balls::sim::{TickInput, World, tick};
use bouncing_balls::{SimConfig, SimError};

/// Ten seconds at the default rate
const DEFAULT_TICKS: u64 = (10.0 / SIM_DT) as u64;
const DEMO_BALLS: u32 = 12;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SimError> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let ticks = match args.next() {
        Some(raw) => match raw.parse::<u64>() {
            Ok(ticks) => ticks,
            Err(e) => {
                let msg = format!("bad tick count {raw:?}: {e}");
                return Err(SimError::InvalidConfig(msg));
            }
        },
        None => DEFAULT_TICKS,
    };

    log::info!("Bouncing Balls (headless) starting...");
    log::info!(
        "dt={}s g={} elasticity={} seed={}",
        config.dt,
        config.gravity,
        config.elasticity,
        config.seed
    );

    let mut world = World::from_config(&config)?;

    // Simulated left clicks spread across the top third of the frame
    let spacing = FRAME_WIDTH_PX as f64 / (DEMO_BALLS + 1) as f64;
    let clicks = (1..=DEMO_BALLS)
        .map(|i| (spacing * i as f64, 80.0 + 15.0 * (i % 4) as f64))
        .collect();
    let mut input = TickInput {
        spawn_at: clicks,
        ..Default::default()
    };

    let mut collisions = 0usize;
    let mut wall_hits = 0usize;
    let mut skipped = 0usize;
    let initial_energy = {
        let report = tick(&mut world, &input, &config);
        log::info!(
            "Spawned {} balls ({} rejected)",
            report.spawned,
            report.rejected
        );
        collisions += report.step.collisions;
        wall_hits += report.step.wall_hits;
        skipped += report.step.skipped.len();
        world.total_kinetic_energy()
    };
    input.spawn_at.clear();

    for _ in 1..ticks {
        let report = tick(&mut world, &input, &config);
        collisions += report.step.collisions;
        wall_hits += report.step.wall_hits;
        skipped += report.step.skipped.len();

        if world.time_ticks() % 60 == 0 {
            log::debug!(
                "tick {}: kinetic energy {:.3} J",
                world.time_ticks(),
                world.total_kinetic_energy()
            );
        }
    }

    log::info!(
        "Ran {} ticks: {} collisions, {} wall hits, {} skipped pairs",
        world.time_ticks(),
        collisions,
        wall_hits,
        skipped
    );
    log::info!(
        "Kinetic energy {:.3} J -> {:.3} J",
        initial_energy,
        world.total_kinetic_energy()
    );

    let instances = extract_instances(&world, config.pixels_per_meter);
    for (i, ball) in instances.iter().enumerate() {
        println!(
            "ball {i:2}: center=({:7.2}, {:7.2}) px radius={:5.2} px",
            ball.center[0], ball.center[1], ball.radius
        );
    }

    Ok(())
}
