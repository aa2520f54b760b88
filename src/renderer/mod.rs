//! Render extraction
//!
//! The simulation works in meters; drawing happens elsewhere in pixels.
//! This module flattens a [`World`](crate::sim::World) into GPU-ready data
//! (`bytemuck::Pod`) without depending on any graphics API.

pub mod shapes;
pub mod vertex;

pub use shapes::{ball_mesh, circle, extract_instances};
pub use vertex::{BallInstance, Vertex};
