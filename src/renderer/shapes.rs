//! Shape generation for balls

use std::f32::consts::PI;

use glam::Vec2;

use super::vertex::{BallInstance, Vertex};
use crate::meters_to_pixels;
use crate::sim::World;

/// One instance per ball, in pixel space, in creation order
pub fn extract_instances(world: &World, pixels_per_meter: f64) -> Vec<BallInstance> {
    world
        .bodies()
        .iter()
        .map(|body| {
            let center = meters_to_pixels(body.position(), pixels_per_meter);
            let center = center.as_vec2();
            BallInstance {
                center: center.to_array(),
                radius: (body.radius() * pixels_per_meter) as f32,
                _pad: 0.0,
                color: body.color().to_rgba(),
            }
        })
        .collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangle list for every ball, for renderers without instancing
pub fn ball_mesh(world: &World, pixels_per_meter: f64, segments: u32) -> Vec<Vertex> {
    extract_instances(world, pixels_per_meter)
        .iter()
        .flat_map(|ball| {
            let center = Vec2::from(ball.center);
            circle(center, ball.radius, ball.color, segments)
        })
        .collect()
}
