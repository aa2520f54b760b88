//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod spawn;
pub mod tick;
pub mod world;

pub use arena::{Arena, WallHits};
pub use body::{Body, Color};
pub use collision::{PairOutcome, SkipReason, contact_time, exchange_velocities, resolve_pair};
pub use spawn::Spawner;
pub use tick::{TickInput, TickReport, tick};
pub use world::{BodyHandle, StepReport, World};
