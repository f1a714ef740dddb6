//! Rendering-side data for the voxel mesher.
//!
//! This module produces the CPU-side geometry a renderer uploads: the face-culled
//! voxel mesh and the optional diagnostic overlays. Drawing itself is left to
//! whatever backend embeds the crate.

pub mod debug_geometry;
pub mod meshing;
