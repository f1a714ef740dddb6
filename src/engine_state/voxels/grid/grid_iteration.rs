//! # Grid Iteration Module
//!
//! This module provides an iterator over the occupied cells of a grid, in the
//! same x-outer, y-middle, z-inner order the cells are stored in.

use cgmath::Point3;

use crate::engine_state::voxels::block::{BlockTypeSize, AIR};

use super::OccupancyGrid;

/// An iterator over all non-empty cells in a grid.
///
/// It walks the flat cell storage once, skipping empty cells, and reconstructs
/// the coordinates of each occupied cell from its storage offset.
pub struct GridBlockIterator<'a> {
    /// Reference to the grid being iterated over
    grid_ref: &'a OccupancyGrid,
    /// Current position in the cell storage
    current_offset: usize,
}

impl<'a> GridBlockIterator<'a> {
    /// Creates a new `GridBlockIterator` positioned at the first cell of `grid_ref`.
    pub fn new(grid_ref: &'a OccupancyGrid) -> Self {
        GridBlockIterator {
            grid_ref,
            current_offset: 0,
        }
    }

    fn position_of(&self, offset: usize) -> Point3<usize> {
        let plane = self.grid_ref.height * self.grid_ref.depth;
        let x = offset / plane;
        let y = (offset % plane) / self.grid_ref.depth;
        let z = offset % self.grid_ref.depth;
        Point3::new(x, y, z)
    }
}

impl Iterator for GridBlockIterator<'_> {
    type Item = (Point3<usize>, BlockTypeSize);

    fn next(&mut self) -> Option<Self::Item> {
        let cells = &self.grid_ref.cells;
        while self.current_offset < cells.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let block_type = cells[offset];
            if block_type != AIR {
                return Some((self.position_of(offset), block_type));
            }
        }
        None
    }
}
