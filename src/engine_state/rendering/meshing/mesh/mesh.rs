//! Face-culled mesh generation for occupancy grids.
//!
//! [`build_mesh`] walks a grid once and writes every exposed unit face as two
//! triangles into a pair of flat float buffers, one holding positions and one
//! holding colours. Faces are never merged.

use log::debug;
use web_time::Instant;

use crate::engine_state::{
    rendering::meshing::{
        colour::FaceColour,
        float_buffer::{AllocationError, FloatBuffer},
    },
    voxels::{block::block_side::BlockSide, grid::OccupancyGrid},
};

use super::face::Face;

/// Number of floats per vertex, in both the position and the colour stream.
pub const COMPONENTS_PER_VERTEX: usize = 4;
/// Number of vertices emitted for one face (two triangles).
pub const VERTICES_PER_FACE: usize = 6;
/// Number of floats one face adds to each buffer.
pub const FLOATS_PER_FACE: usize = COMPONENTS_PER_VERTEX * VERTICES_PER_FACE;

/// Appends the geometry of every exposed face of `grid` to the two buffers.
///
/// Cells are visited x outer, y middle, z inner. For each occupied cell the six
/// sides are tested in [`BlockSide::all`] order (−x, +x, −y, +y, −z, +z). A side
/// is exposed when the neighbour across it lies outside the grid or holds a
/// different material id; two different materials touching therefore both emit
/// their face. Every exposed face adds six `x, y, z, 1.0` vertices to
/// `vertex_buffer` and six copies of `face_colour.colour(block, side)` to
/// `colour_buffer`.
///
/// The buffers are not cleared first. Clear both before calling to get a fresh
/// mesh.
///
/// # Errors
/// Propagates [`AllocationError`] from buffer growth. Faces appended before the
/// failure stay in the buffers, so the output must be treated as incomplete.
pub fn build_mesh<C>(
    grid: &OccupancyGrid,
    vertex_buffer: &mut FloatBuffer,
    colour_buffer: &mut FloatBuffer,
    face_colour: &C,
) -> Result<(), AllocationError>
where
    C: FaceColour + ?Sized,
{
    let start = Instant::now();
    let mut faces_emitted = 0usize;

    for (position, block_type_int) in grid.occupied_cells() {
        for side in BlockSide::all() {
            if grid.neighbour(position.x, position.y, position.z, side) == block_type_int {
                continue;
            }

            let face = Face::new(position.x, position.y, position.z, block_type_int, side);
            let colour = face_colour.colour(block_type_int, side);
            append_face(&face, &colour, vertex_buffer, colour_buffer)?;
            faces_emitted += 1;
        }
    }

    debug!(
        "Meshed {}x{}x{} grid: {} faces in {:?}",
        grid.width(),
        grid.height(),
        grid.depth(),
        faces_emitted,
        start.elapsed()
    );

    Ok(())
}

/// Writes one face: its six vertices and one colour per vertex.
fn append_face(
    face: &Face,
    colour: &[f32; 4],
    vertex_buffer: &mut FloatBuffer,
    colour_buffer: &mut FloatBuffer,
) -> Result<(), AllocationError> {
    for vertex in face.triangle_vertices() {
        vertex_buffer.extend_from_slice(&[vertex.x, vertex.y, vertex.z, 1.0])?;
        colour_buffer.extend_from_slice(colour)?;
    }
    Ok(())
}
