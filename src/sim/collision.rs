//! Ball-ball collision detection and response
//!
//! Collisions are found after the balls already overlap, since ticks are
//! discrete. Resolution runs in three passes:
//! 1. rewind both balls along their velocities to the estimated contact time
//! 2. exchange the normal velocity components (tangential ones are kept)
//! 3. replay the same time span forward with the new velocities

use glam::DVec2;

use super::body::Body;

/// Why a colliding pair was left untouched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Centers coincide, so there is no collision axis
    Coincident,
    /// Resolution produced NaN or infinity; the pair was rolled back
    NonFinite,
}

/// Result of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Velocities were exchanged. `back_dated` is the rewind time used for
    /// passes 1 and 3, if a valid one was found.
    Resolved { back_dated: Option<f64> },
    Skipped(SkipReason),
}

/// Center distance below which two balls are treated as coincident
const MIN_SEPARATION: f64 = 1e-12;

/// True when the two circles touch or overlap
#[inline]
pub fn overlapping(a: &Body, b: &Body) -> bool {
    a.pos.distance(b.pos) <= a.radius() + b.radius()
}

/// Unit vector from `a` to `b` and the center distance, or `None` if the
/// centers (nearly) coincide.
fn collision_axis(a: &Body, b: &Body) -> Option<(DVec2, f64)> {
    let offset = b.pos - a.pos;
    let dis = offset.length();
    if !dis.is_finite() || dis < MIN_SEPARATION {
        return None;
    }
    Some((offset / dis, dis))
}

/// How long ago (seconds) the two balls were exactly touching, estimated from
/// their velocities along the center line.
///
/// Returns `None` when the estimate is negative or not finite: the balls are
/// separating or moving in parallel, and nothing should be rewound.
/// The estimate is unbounded; a grazing overlap with a tiny closing speed can
/// report several seconds.
pub fn contact_time(a: &Body, b: &Body) -> Option<f64> {
    let (axis, dis) = collision_axis(a, b)?;
    let va = a.vel.dot(axis);
    let vb = b.vel.dot(axis);

    let dt = (a.radius() + b.radius() - dis) / (va - vb);
    (dt.is_finite() && dt >= 0.0).then_some(dt)
}

/// Move both balls along their current velocities by `dt` seconds
/// (negative `dt` rewinds).
fn shift(a: &mut Body, b: &mut Body, dt: f64) {
    a.pos += a.vel * dt;
    b.pos += b.vel * dt;
}

/// Exchange the normal velocity components of two touching balls.
///
/// Velocities are rotated into the (normal, tangent) basis of the center
/// line, the normal parts are updated with the two-body restitution formula,
/// and the result is rotated back. With `elasticity = 1` momentum and kinetic
/// energy are conserved.
pub fn exchange_velocities(
    a: &mut Body,
    b: &mut Body,
    elasticity: f64,
) -> Result<(), SkipReason> {
    let (n, _) = collision_axis(a, b).ok_or(SkipReason::Coincident)?;

    // (normal, tangent) components
    let van = a.vel.x * n.x + a.vel.y * n.y;
    let vat = -a.vel.x * n.y + a.vel.y * n.x;
    let vbn = b.vel.x * n.x + b.vel.y * n.y;
    let vbt = -b.vel.x * n.y + b.vel.y * n.x;

    let ma = a.mass();
    let mb = b.mass();
    let va = van + ((1.0 + elasticity) * (vbn - van)) / (1.0 + ma / mb);
    let vb = vbn + ((1.0 + elasticity) * (van - vbn)) / (1.0 + mb / ma);

    a.vel = DVec2::new(va * n.x - vat * n.y, va * n.y + vat * n.x);
    b.vel = DVec2::new(vb * n.x - vbt * n.y, vb * n.y + vbt * n.x);
    Ok(())
}

/// Resolve one overlapping pair in place.
///
/// A contact time further back than `max_rewind` (normally the tick length)
/// is not trusted: the balls were already overlapping before this tick, so
/// velocities are exchanged without rewinding or replaying.
///
/// On any skip both balls are left exactly as they were.
pub fn resolve_pair(a: &mut Body, b: &mut Body, elasticity: f64, max_rewind: f64) -> PairOutcome {
    if collision_axis(a, b).is_none() {
        return PairOutcome::Skipped(SkipReason::Coincident);
    }

    let (saved_a, saved_b) = (*a, *b);
    let restore = |a: &mut Body, b: &mut Body| {
        *a = saved_a;
        *b = saved_b;
    };

    let back_dated = contact_time(a, b).filter(|&dt| dt <= max_rewind);
    if let Some(dt) = back_dated {
        shift(a, b, -dt);
    }

    if let Err(reason) = exchange_velocities(a, b, elasticity) {
        restore(a, b);
        return PairOutcome::Skipped(reason);
    }

    if let Some(dt) = back_dated {
        shift(a, b, dt);
    }

    if !(a.is_finite() && b.is_finite()) {
        restore(a, b);
        return PairOutcome::Skipped(SkipReason::NonFinite);
    }

    PairOutcome::Resolved { back_dated }
}

/// Mutable references to two distinct bodies, `i < j`
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
