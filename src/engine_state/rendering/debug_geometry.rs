//! Diagnostic geometry drawn next to the voxel mesh.
//!
//! Two overlays help check that a mesh lines up with the grid it came from: the
//! three grid axes as line segments, and one point per cell. Both are written
//! into the same kind of `x, y, z, w` / `r, g, b, a` float streams as the mesh.

use crate::engine_state::{
    rendering::meshing::float_buffer::{AllocationError, FloatBuffer},
    voxels::grid::OccupancyGrid,
};

/// Colour of the x axis.
pub const X_AXIS_COLOUR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Colour of the y axis.
pub const Y_AXIS_COLOUR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Colour of the z axis.
pub const Z_AXIS_COLOUR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Colour of every cell point.
pub const POINT_COLOUR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Line-list and point-list overlays for one grid.
#[derive(Debug, Default)]
pub struct DebugGeometry {
    /// Axis endpoints, two vertices per line.
    pub axes_vertices: FloatBuffer,
    /// Axis colours, one per endpoint.
    pub axes_colours: FloatBuffer,
    /// One vertex per grid cell.
    pub point_vertices: FloatBuffer,
    /// One colour per grid cell.
    pub point_colours: FloatBuffer,
}

impl DebugGeometry {
    /// Builds both overlays for `grid`.
    pub fn build(grid: &OccupancyGrid) -> Result<Self, AllocationError> {
        let mut geometry = DebugGeometry::default();
        geometry.rebuild(grid)?;
        Ok(geometry)
    }

    /// Replaces both overlays with those of `grid`, reusing the existing buffers.
    ///
    /// On failure the overlays hold partial output; call [`DebugGeometry::clear`]
    /// to discard it.
    pub fn rebuild(&mut self, grid: &OccupancyGrid) -> Result<(), AllocationError> {
        self.clear();
        push_axes(grid, &mut self.axes_vertices, &mut self.axes_colours)?;
        push_voxel_points(grid, &mut self.point_vertices, &mut self.point_colours)
    }

    /// Empties all four buffers, keeping their allocations.
    pub fn clear(&mut self) {
        self.axes_vertices.clear();
        self.axes_colours.clear();
        self.point_vertices.clear();
        self.point_colours.clear();
    }

    /// Whether no overlay geometry is held.
    pub fn is_empty(&self) -> bool {
        self.axes_vertices.is_empty() && self.point_vertices.is_empty()
    }
}

/// Appends the three axes of `grid` as line segments from the origin to the last
/// cell along each axis.
pub fn push_axes(
    grid: &OccupancyGrid,
    vertex_buffer: &mut FloatBuffer,
    colour_buffer: &mut FloatBuffer,
) -> Result<(), AllocationError> {
    let dimensions = grid.dimensions();
    let x_end = (dimensions.x - 1) as f32;
    let y_end = (dimensions.y - 1) as f32;
    let z_end = (dimensions.z - 1) as f32;

    let lines = [
        ([x_end, 0.0, 0.0, 1.0], X_AXIS_COLOUR),
        ([0.0, y_end, 0.0, 1.0], Y_AXIS_COLOUR),
        ([0.0, 0.0, z_end, 1.0], Z_AXIS_COLOUR),
    ];

    for (end, colour) in lines {
        vertex_buffer.extend_from_slice(&[0.0, 0.0, 0.0, 1.0])?;
        vertex_buffer.extend_from_slice(&end)?;
        colour_buffer.extend_from_slice(&colour)?;
        colour_buffer.extend_from_slice(&colour)?;
    }

    Ok(())
}

/// Appends one point per cell of `grid`, occupied or not, at its integer
/// coordinates.
pub fn push_voxel_points(
    grid: &OccupancyGrid,
    vertex_buffer: &mut FloatBuffer,
    colour_buffer: &mut FloatBuffer,
) -> Result<(), AllocationError> {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            for z in 0..grid.depth() {
                vertex_buffer.extend_from_slice(&[x as f32, y as f32, z as f32, 1.0])?;
                colour_buffer.extend_from_slice(&POINT_COLOUR)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;

    use super::*;

    #[test]
    fn axes_span_the_grid() {
        let grid = OccupancyGrid::empty(Vector3::new(4, 5, 6)).unwrap();
        let geometry = DebugGeometry::build(&grid).unwrap();

        let axes = geometry.axes_vertices.snapshot();
        assert_eq!(axes.len(), 6 * 4);
        assert_eq!(&axes[4..8], &[3.0, 0.0, 0.0, 1.0]);
        assert_eq!(&axes[12..16], &[0.0, 4.0, 0.0, 1.0]);
        assert_eq!(&axes[20..24], &[0.0, 0.0, 5.0, 1.0]);
        assert_eq!(geometry.axes_colours.len(), axes.len());
    }

    #[test]
    fn one_point_per_cell() {
        let grid = OccupancyGrid::empty(Vector3::new(2, 3, 4)).unwrap();
        let geometry = DebugGeometry::build(&grid).unwrap();
        assert_eq!(geometry.point_vertices.len(), 24 * 4);
        assert_eq!(geometry.point_colours.len(), 24 * 4);
        assert_eq!(&geometry.point_vertices.snapshot()[4..8], &[0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn rebuild_reuses_the_buffers() {
        let grid = OccupancyGrid::empty(Vector3::new(3, 3, 3)).unwrap();
        let mut geometry = DebugGeometry::build(&grid).unwrap();
        let capacity = geometry.point_vertices.capacity();
        let reallocations = geometry.point_vertices.reallocations();

        geometry.rebuild(&grid).unwrap();
        assert_eq!(geometry.point_vertices.len(), 27 * 4);
        assert_eq!(geometry.axes_vertices.len(), 6 * 4);
        assert_eq!(geometry.point_vertices.capacity(), capacity);
        assert_eq!(geometry.point_vertices.reallocations(), reallocations);

        geometry.clear();
        assert!(geometry.is_empty());
        assert!(geometry.point_colours.is_empty());
    }
}
