//! Rectangular arena and wall collisions
//!
//! Walls sit at x = 0, x = width, y = 0 (top) and y = height (bottom).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::error::SimError;

/// Which walls a ball touched during one wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }

    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|&&hit| hit)
            .count()
    }
}

/// Axis-aligned arena in meters, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that a ball of this radius has room to exist inside the arena
    pub fn fits(&self, radius: f64) -> Result<(), SimError> {
        let diameter = 2.0 * radius;
        if diameter > self.width || diameter > self.height {
            return Err(SimError::BodyTooLarge {
                diameter,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Range of valid center positions for a ball of the given radius
    pub fn center_bounds(&self, radius: f64) -> (DVec2, DVec2) {
        (
            DVec2::splat(radius),
            DVec2::new(self.width - radius, self.height - radius),
        )
    }

    /// Bounce a ball off every wall it reaches or crosses.
    ///
    /// Each wall is checked independently; a ball in a corner is corrected on
    /// both axes. The position is snapped to the wall and the matching
    /// velocity component reversed and scaled by `elasticity`.
    pub fn bounce(&self, body: &mut Body, elasticity: f64) -> WallHits {
        let r = body.radius();
        let mut hits = WallHits::default();

        if body.pos.y - r <= 0.0 {
            body.pos.y = r;
            body.vel.y = -body.vel.y * elasticity;
            hits.top = true;
        }
        if body.pos.y + r >= self.height {
            body.pos.y = self.height - r;
            body.vel.y = -body.vel.y * elasticity;
            hits.bottom = true;
        }
        if body.pos.x - r <= 0.0 {
            body.pos.x = r;
            body.vel.x = -body.vel.x * elasticity;
            hits.left = true;
        }
        if body.pos.x + r >= self.width {
            body.pos.x = self.width - r;
            body.vel.x = -body.vel.x * elasticity;
            hits.right = true;
        }

        hits
    }

    /// Clamp a ball's center into the arena without touching its velocity.
    /// Returns true if the position changed.
    pub fn contain(&self, body: &mut Body) -> bool {
        let (min, max) = self.center_bounds(body.radius());
        let clamped = body.pos.clamp(min, max);
        if clamped != body.pos {
            body.pos = clamped;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Color;

    fn ball(pos: DVec2, vel: DVec2, radius: f64) -> Body {
        Body::new(pos, vel, radius, 1.0, Color::default()).unwrap()
    }

    #[test]
    fn test_no_bounce_inside() {
        let arena = Arena::new(8.0, 6.0);
        let mut body = ball(DVec2::new(4.0, 3.0), DVec2::new(1.0, 1.0), 0.5);
        let hits = arena.bounce(&mut body, 0.8);
        assert!(!hits.any());
        assert_eq!(body.pos, DVec2::new(4.0, 3.0));
        assert_eq!(body.vel, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_floor_bounce_clamps_and_damps() {
        let arena = Arena::new(8.0, 6.0);
        let mut body = ball(DVec2::new(4.0, 5.8), DVec2::new(0.5, 3.0), 0.5);
        let hits = arena.bounce(&mut body, 0.8);
        assert!(hits.bottom);
        assert_eq!(hits.count(), 1);
        assert_eq!(body.pos.y, 5.5);
        assert!((body.vel.y - (-2.4)).abs() < 1e-12);
        assert_eq!(body.vel.x, 0.5);
    }

    #[test]
    fn test_touching_counts_as_contact() {
        let arena = Arena::new(8.0, 6.0);
        let mut body = ball(DVec2::new(0.5, 3.0), DVec2::new(-1.0, 0.0), 0.5);
        let hits = arena.bounce(&mut body, 1.0);
        assert!(hits.left);
        assert_eq!(body.vel.x, 1.0);
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let arena = Arena::new(8.0, 6.0);
        let mut body = ball(DVec2::new(8.2, -0.1), DVec2::new(2.0, -3.0), 0.25);
        let hits = arena.bounce(&mut body, 0.5);
        assert!(hits.top && hits.right);
        assert_eq!(hits.count(), 2);
        assert_eq!(body.pos, DVec2::new(7.75, 0.25));
        assert_eq!(body.vel, DVec2::new(-1.0, 1.5));
    }

    #[test]
    fn test_contain_only_moves_position() {
        let arena = Arena::new(8.0, 6.0);
        let mut body = ball(DVec2::new(-1.0, 7.0), DVec2::new(-2.0, 2.0), 0.5);
        assert!(arena.contain(&mut body));
        assert_eq!(body.pos, DVec2::new(0.5, 5.5));
        assert_eq!(body.vel, DVec2::new(-2.0, 2.0));
        assert!(!arena.contain(&mut body));
    }

    #[test]
    fn test_fits() {
        let arena = Arena::new(8.0, 6.0);
        assert!(arena.fits(3.0).is_ok());
        let result = arena.fits(3.1);
        assert!(matches!(result, Err(SimError::BodyTooLarge { .. })));
    }
}
