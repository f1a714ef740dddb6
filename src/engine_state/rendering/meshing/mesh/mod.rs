//! Mesh generation for voxel rendering.
//!
//! This module converts an occupancy grid into flat, GPU-friendly vertex and
//! colour streams. Each exposed unit face of an occupied cell becomes its own
//! two-triangle quad.
//!
//! # Architecture
//! - [`build_mesh`]: Visits every cell and emits the faces that are visible
//! - [`Face`]: The corners of one face, computed from the cell and its side
//!
//! # Usage
//! ```
//! use cgmath::Vector3;
//! use voxel_mesher::{build_mesh, ConstantColour, FloatBuffer, OccupancyGrid};
//!
//! let grid = OccupancyGrid::solid(Vector3::new(2, 1, 1), 1).unwrap();
//! let mut vertices = FloatBuffer::with_capacity(64).unwrap();
//! let mut colours = FloatBuffer::with_capacity(64).unwrap();
//! build_mesh(&grid, &mut vertices, &mut colours, &ConstantColour::default()).unwrap();
//! // Ten unit faces: the shared face between the two cells is hidden.
//! assert_eq!(vertices.len(), 10 * 24);
//! ```

mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;
