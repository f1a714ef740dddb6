//! # Meshing Module
//!
//! Everything needed to turn an occupancy grid into renderable geometry:
//!
//! * `float_buffer` - The growable float store the geometry is written into
//! * `colour` - Per-face colouring strategies
//! * `mesh` - Face visibility and emission

pub mod colour;
pub mod float_buffer;
pub mod mesh;
