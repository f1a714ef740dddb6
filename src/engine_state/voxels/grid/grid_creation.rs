//! # Grid Creation Module
//!
//! A builder that fills an [`OccupancyGrid`] one cell at a time in storage order
//! (x outer, y middle, z inner). The procedural generators drive it by asking
//! for the position of the next cell and pushing a value for it.

use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::{BlockTypeSize, AIR};

use super::{GridError, OccupancyGrid};

/// A builder for populating a grid in storage order.
pub struct GridCreationIterator {
    /// Dimensions of the grid being created
    dimensions: Vector3<usize>,
    /// Cell values pushed so far
    cells: Vec<BlockTypeSize>,
    /// Total number of cells in the finished grid
    cell_count: usize,
    /// Coordinates of the next cell to be pushed
    local_x: usize,
    local_y: usize,
    local_z: usize,
}

impl GridCreationIterator {
    /// Creates a new `GridCreationIterator` for a grid of `dimensions` cells.
    ///
    /// # Errors
    /// Rejects zero dimensions and cell counts that overflow `usize`.
    pub fn new(dimensions: Vector3<usize>) -> Result<Self, GridError> {
        if dimensions.x == 0 || dimensions.y == 0 || dimensions.z == 0 {
            return Err(GridError::EmptyDimension {
                width: dimensions.x,
                height: dimensions.y,
                depth: dimensions.z,
            });
        }

        let cell_count = dimensions
            .x
            .checked_mul(dimensions.y)
            .and_then(|plane| plane.checked_mul(dimensions.z))
            .ok_or(GridError::TooLarge {
                width: dimensions.x,
                height: dimensions.y,
                depth: dimensions.z,
            })?;

        Ok(GridCreationIterator {
            dimensions,
            cells: Vec::with_capacity(cell_count),
            cell_count,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        })
    }

    /// Coordinates of the cell the next push writes, or `None` once the grid is full.
    pub fn position(&self) -> Option<Point3<usize>> {
        if self.cells.len() < self.cell_count {
            Some(Point3::new(self.local_x, self.local_y, self.local_z))
        } else {
            None
        }
    }

    /// Writes `block_type` into the current cell and advances to the next one.
    ///
    /// Pushes past the last cell are ignored.
    pub fn push_block_type(&mut self, block_type: BlockTypeSize) {
        if self.cells.len() == self.cell_count {
            return;
        }
        self.cells.push(block_type);

        self.local_z += 1;
        if self.local_z == self.dimensions.z {
            self.local_z = 0;
            self.local_y += 1;

            if self.local_y == self.dimensions.y {
                self.local_y = 0;
                self.local_x += 1;
            }
        }
    }

    /// Finalizes the grid. Cells that were never pushed are left empty.
    pub fn return_grid(mut self) -> OccupancyGrid {
        self.cells.resize(self.cell_count, AIR);
        OccupancyGrid {
            width: self.dimensions.x,
            height: self.dimensions.y,
            depth: self.dimensions.z,
            cells: self.cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_advance_z_fastest() {
        let mut gci = GridCreationIterator::new(Vector3::new(2, 2, 2)).unwrap();
        let mut visited = Vec::new();
        while let Some(position) = gci.position() {
            visited.push((position.x, position.y, position.z));
            gci.push_block_type(1);
        }
        assert_eq!(
            visited,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 1, 0),
                (0, 1, 1),
                (1, 0, 0),
                (1, 0, 1),
                (1, 1, 0),
                (1, 1, 1),
            ]
        );
    }

    #[test]
    fn unfinished_grids_are_padded_with_air() {
        let mut gci = GridCreationIterator::new(Vector3::new(1, 1, 3)).unwrap();
        gci.push_block_type(7);
        let grid = gci.return_grid();
        assert_eq!(grid.cells(), &[7, 0, 0]);
    }
}
