//! # Engine State Module
//!
//! The top-level application context of the mesher.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the grid, the output buffers and the colouring
//! * `rendering` - Mesh generation, float buffers and debug overlays
//! * `voxels` - Block vocabulary and the occupancy grid
//!
//! ## Architecture
//!
//! There is no ambient state: the grid and both output buffers are fields of
//! `EngineState` and are lent to the mesher by reference for each rebuild. The
//! buffers are reused across rebuilds, so once they have grown to the size of the
//! mesh no further allocation happens.

use std::time::Duration;

use log::{info, warn};
use web_time::Instant;

use rendering::{
    debug_geometry::DebugGeometry,
    meshing::{
        colour::Colouring,
        float_buffer::{AllocationError, FloatBuffer},
        mesh::{build_mesh, COMPONENTS_PER_VERTEX, FLOATS_PER_FACE},
    },
};
use voxels::grid::OccupancyGrid;

pub mod rendering;
pub mod voxels;

/// Summary of one rebuild, reported after the mesh is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Number of exposed faces written.
    pub faces: usize,
    /// Number of vertices written (the draw count).
    pub vertices: usize,
    /// Floats written to the vertex buffer.
    pub vertex_buffer_len: usize,
    /// Floats written to the colour buffer.
    pub colour_buffer_len: usize,
    /// Capacity of the vertex buffer after the rebuild.
    pub vertex_buffer_capacity: usize,
    /// Capacity of the colour buffer after the rebuild.
    pub colour_buffer_capacity: usize,
    /// Reallocations of both buffers during this rebuild.
    pub reallocations: usize,
    /// Wall time spent meshing.
    pub build_time: Duration,
}

/// A borrowed view of the last completed mesh, ready for upload.
#[derive(Debug, Clone, Copy)]
pub struct MeshSnapshot<'a> {
    /// `x, y, z, w` per vertex.
    pub vertices: &'a [f32],
    /// `r, g, b, a` per vertex.
    pub colours: &'a [f32],
}

impl<'a> MeshSnapshot<'a> {
    /// Number of vertices to draw as a triangle list.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / COMPONENTS_PER_VERTEX
    }

    /// The position stream as raw bytes.
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// The colour stream as raw bytes.
    pub fn colour_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.colours)
    }
}

/// The main state container of the mesher.
///
/// # Examples
///
/// ```
/// use cgmath::Vector3;
/// use voxel_mesher::{Colouring, EngineState, OccupancyGrid};
///
/// let grid = OccupancyGrid::solid(Vector3::new(4, 4, 4), 1).unwrap();
/// let mut engine_state = EngineState::new(grid, Colouring::default(), 64).unwrap();
/// let stats = engine_state.rebuild().unwrap();
/// assert_eq!(stats.faces, 6 * 16);
/// assert_eq!(engine_state.mesh().vertex_count(), stats.vertices);
/// ```
#[derive(Debug)]
pub struct EngineState {
    /// The voxels being meshed
    grid: OccupancyGrid,
    /// Positions of the current mesh
    vertex_buffer: FloatBuffer,
    /// Colours of the current mesh
    colour_buffer: FloatBuffer,
    /// How faces are coloured
    colouring: Colouring,
    /// Diagnostic overlays, rebuilt with the mesh when enabled
    debug_geometry: Option<DebugGeometry>,
}

impl EngineState {
    /// Creates the engine state with empty output buffers.
    ///
    /// # Arguments
    /// * `grid` - The voxels to mesh
    /// * `colouring` - How faces are coloured
    /// * `initial_buffer_capacity` - Capacity hint, in floats, for each output buffer
    pub fn new(
        grid: OccupancyGrid,
        colouring: Colouring,
        initial_buffer_capacity: usize,
    ) -> Result<Self, AllocationError> {
        Ok(EngineState {
            grid,
            vertex_buffer: FloatBuffer::with_capacity(initial_buffer_capacity)?,
            colour_buffer: FloatBuffer::with_capacity(initial_buffer_capacity)?,
            colouring,
            debug_geometry: None,
        })
    }

    /// Enables or disables the diagnostic overlays for subsequent rebuilds.
    pub fn set_debug_geometry(&mut self, enabled: bool) {
        if !enabled {
            self.debug_geometry = None;
        } else if self.debug_geometry.is_none() {
            self.debug_geometry = Some(DebugGeometry::default());
        }
    }

    /// The overlays produced by the last rebuild, if enabled.
    pub fn debug_geometry(&self) -> Option<&DebugGeometry> {
        self.debug_geometry.as_ref()
    }

    /// The grid being meshed.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Mutable access to the grid. Changes show up after the next rebuild.
    pub fn grid_mut(&mut self) -> &mut OccupancyGrid {
        &mut self.grid
    }

    /// Replaces the colouring. Takes effect on the next rebuild.
    pub fn set_colouring(&mut self, colouring: Colouring) {
        self.colouring = colouring;
    }

    /// Regenerates the mesh from the current grid.
    ///
    /// Both buffers are cleared first, so the result is exactly the mesh of the
    /// grid. If meshing or the overlays fail, the mesh and the overlays are
    /// cleared before the error is returned; neither ever exposes partial or
    /// stale output.
    pub fn rebuild(&mut self) -> Result<MeshStats, AllocationError> {
        let reallocations_before =
            self.vertex_buffer.reallocations() + self.colour_buffer.reallocations();
        self.vertex_buffer.clear();
        self.colour_buffer.clear();

        let start = Instant::now();
        if let Err(err) = build_mesh(
            &self.grid,
            &mut self.vertex_buffer,
            &mut self.colour_buffer,
            &self.colouring,
        ) {
            warn!("Mesh rebuild failed, discarding partial mesh: {}", err);
            self.discard_output();
            return Err(err);
        }
        let build_time = start.elapsed();

        if let Some(debug_geometry) = self.debug_geometry.as_mut() {
            if let Err(err) = debug_geometry.rebuild(&self.grid) {
                warn!("Debug geometry rebuild failed, discarding mesh: {}", err);
                self.discard_output();
                return Err(err);
            }
        }

        let stats = MeshStats {
            faces: self.vertex_buffer.len() / FLOATS_PER_FACE,
            vertices: self.vertex_buffer.len() / COMPONENTS_PER_VERTEX,
            vertex_buffer_len: self.vertex_buffer.len(),
            colour_buffer_len: self.colour_buffer.len(),
            vertex_buffer_capacity: self.vertex_buffer.capacity(),
            colour_buffer_capacity: self.colour_buffer.capacity(),
            reallocations: self.vertex_buffer.reallocations() + self.colour_buffer.reallocations()
                - reallocations_before,
            build_time,
        };

        info!("Vertex buffer index: {}", stats.vertex_buffer_len);
        info!("Colour buffer index: {}", stats.colour_buffer_len);
        info!("Vertex buffer size: {}", stats.vertex_buffer_capacity);
        info!("Colour buffer size: {}", stats.colour_buffer_capacity);
        info!(
            "Meshed {} faces ({} vertices) in {:?} with {} reallocations",
            stats.faces, stats.vertices, stats.build_time, stats.reallocations
        );

        Ok(stats)
    }

    /// Empties the mesh buffers and the overlays after a failed rebuild.
    fn discard_output(&mut self) {
        self.vertex_buffer.clear();
        self.colour_buffer.clear();
        if let Some(debug_geometry) = self.debug_geometry.as_mut() {
            debug_geometry.clear();
        }
    }

    /// Borrows the mesh produced by the last successful rebuild.
    pub fn mesh(&self) -> MeshSnapshot<'_> {
        MeshSnapshot {
            vertices: self.vertex_buffer.snapshot(),
            colours: self.colour_buffer.snapshot(),
        }
    }
}
