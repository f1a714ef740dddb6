//! # Grid Module
//!
//! This module provides the `OccupancyGrid`, a dense three-dimensional array of
//! material ids with fixed dimensions, and the procedural generators used to
//! fill one.
//!
//! ## Memory Layout
//!
//! Cells live in a single contiguous vector. The cell at `(x, y, z)` is stored at
//! `x * height * depth + y * depth + z`, so walking x, then y, then z visits
//! memory front to back. The mesher iterates in exactly that order.
//!
//! ## Boundaries
//!
//! There is no wraparound and no padding. Any coordinate outside the grid reads
//! as empty through [`OccupancyGrid::neighbour`], which bounds-checks explicitly
//! instead of reading past the end of the storage.

use cgmath::{Point3, Vector3};
use grid_creation::GridCreationIterator;
use noise::{NoiseFn, Perlin};
use thiserror::Error;

use super::block::block_side::BlockSide;
use super::block::block_type::BlockType;
use super::block::{BlockTypeSize, AIR};

mod grid_creation;
pub mod grid_iteration;

use grid_iteration::GridBlockIterator;

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Scaling factor applied to cell coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Errors reported by the bounds-checked grid accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// One of the requested dimensions was zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}x{depth}")]
    EmptyDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Requested depth.
        depth: usize,
    },

    /// The requested dimensions do not fit in memory addressing.
    #[error("grid of {width}x{height}x{depth} cells is too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// Requested depth.
        depth: usize,
    },

    /// A coordinate was outside `[0, width) × [0, height) × [0, depth)`.
    #[error("cell ({x}, {y}, {z}) is outside the {width}x{height}x{depth} grid")]
    OutOfBounds {
        /// Requested x coordinate.
        x: usize,
        /// Requested y coordinate.
        y: usize,
        /// Requested z coordinate.
        z: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
        /// Grid depth.
        depth: usize,
    },
}

/// A dense 3-D grid of material ids.
///
/// The dimensions are chosen at construction and never change. A value of `0`
/// is empty space; every other value is an opaque material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// Number of cells along x.
    width: usize,
    /// Number of cells along y.
    height: usize,
    /// Number of cells along z.
    depth: usize,
    /// Cell values in x-major, z-minor order.
    cells: Vec<BlockTypeSize>,
}

impl OccupancyGrid {
    /// Creates a new, completely empty grid.
    ///
    /// # Arguments
    /// * `dimensions` - Width, height and depth in cells
    ///
    /// # Errors
    /// `GridError::EmptyDimension` if any dimension is zero, `GridError::TooLarge`
    /// if the cell count overflows `usize`.
    pub fn empty(dimensions: Vector3<usize>) -> Result<Self, GridError> {
        Self::solid(dimensions, AIR)
    }

    /// Creates a new grid with every cell set to `block_type`.
    pub fn solid(dimensions: Vector3<usize>, block_type: BlockTypeSize) -> Result<Self, GridError> {
        let mut gci = GridCreationIterator::new(dimensions)?;
        while gci.position().is_some() {
            gci.push_block_type(block_type);
        }
        Ok(gci.return_grid())
    }

    /// Creates a new grid with a checkerboard pattern (for testing).
    ///
    /// A cell is filled with `block_type` when `x + y + z` is even, so no two
    /// filled cells share a face.
    pub fn checkerboard(
        dimensions: Vector3<usize>,
        block_type: BlockTypeSize,
    ) -> Result<Self, GridError> {
        let mut gci = GridCreationIterator::new(dimensions)?;
        while let Some(position) = gci.position() {
            if (position.x + position.y + position.z) % 2 == 0 {
                gci.push_block_type(block_type);
            } else {
                gci.push_block_type(AIR);
            }
        }
        Ok(gci.return_grid())
    }

    /// Creates a new grid with randomly placed blocks.
    ///
    /// # Arguments
    /// * `dimensions` - Width, height and depth in cells
    /// * `sparseness` - Probability in `[0, 1]` that a cell stays empty
    /// * `seed` - Seed of the random generator; equal seeds give equal grids
    pub fn random(
        dimensions: Vector3<usize>,
        sparseness: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut gci = GridCreationIterator::new(dimensions)?;

        while gci.position().is_some() {
            if rng.f64() < sparseness {
                gci.push_block_type(AIR);
            } else {
                gci.push_block_type(BlockType::get_random_type(&mut rng).to_int());
            }
        }

        Ok(gci.return_grid())
    }

    /// Generates terrain by sampling 3D Perlin noise.
    ///
    /// Cells whose noise sample falls outside `[-threshold, threshold]` become
    /// solid, which gives blobs with caves and overhangs. Solid cells get a
    /// block type drawn from a generator seeded with `seed`.
    ///
    /// # Arguments
    /// * `dimensions` - Width, height and depth in cells
    /// * `seed` - Noise and material seed
    /// * `scale` - Factor applied to cell coordinates before sampling
    /// * `threshold` - Half-width of the band of noise values that stay empty
    pub fn perlin(
        dimensions: Vector3<usize>,
        seed: u32,
        scale: f64,
        threshold: f64,
    ) -> Result<Self, GridError> {
        let perlin = Perlin::new(seed);
        let mut rng = fastrand::Rng::with_seed(u64::from(seed));
        let mut gci = GridCreationIterator::new(dimensions)?;

        while let Some(position) = gci.position() {
            let sample = perlin.get(Self::to_perlin_pos(position, scale));
            if (-threshold..=threshold).contains(&sample) {
                gci.push_block_type(AIR);
            } else {
                gci.push_block_type(BlockType::get_random_type(&mut rng).to_int());
            }
        }

        Ok(gci.return_grid())
    }

    /// Converts cell coordinates to scaled coordinates for Perlin noise sampling.
    fn to_perlin_pos(pos: Point3<usize>, scale_factor: f64) -> [f64; 3] {
        [
            pos.x as f64 * scale_factor,
            pos.y as f64 * scale_factor,
            pos.z as f64 * scale_factor,
        ]
    }

    /// Width, height and depth of the grid.
    pub fn dimensions(&self) -> Vector3<usize> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Number of cells along x.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along y.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells along z.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// All cell values in storage order.
    pub fn cells(&self) -> &[BlockTypeSize] {
        &self.cells
    }

    /// Whether `(x, y, z)` lies inside the grid.
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x * self.height * self.depth + y * self.depth + z
    }

    /// Reads the cell at `(x, y, z)`.
    ///
    /// # Errors
    /// `GridError::OutOfBounds` if the coordinate is outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<BlockTypeSize, GridError> {
        self.check_bounds(x, y, z)?;
        Ok(self.cells[self.index(x, y, z)])
    }

    /// Writes `block_type` into the cell at `(x, y, z)`.
    ///
    /// # Errors
    /// `GridError::OutOfBounds` if the coordinate is outside the grid.
    pub fn set(
        &mut self,
        x: usize,
        y: usize,
        z: usize,
        block_type: BlockTypeSize,
    ) -> Result<(), GridError> {
        self.check_bounds(x, y, z)?;
        let index = self.index(x, y, z);
        self.cells[index] = block_type;
        Ok(())
    }

    /// Reads the neighbour of `(x, y, z)` across `side`.
    ///
    /// Neighbours outside the grid read as empty. `(x, y, z)` itself is expected
    /// to be inside the grid.
    pub fn neighbour(&self, x: usize, y: usize, z: usize, side: BlockSide) -> BlockTypeSize {
        let offset = side.offset();
        let (Some(nx), Some(ny), Some(nz)) = (
            x.checked_add_signed(offset.x),
            y.checked_add_signed(offset.y),
            z.checked_add_signed(offset.z),
        ) else {
            return AIR;
        };

        if self.contains(nx, ny, nz) {
            self.cells[self.index(nx, ny, nz)]
        } else {
            AIR
        }
    }

    /// Iterates over every non-empty cell in storage order.
    pub fn occupied_cells(&self) -> GridBlockIterator<'_> {
        GridBlockIterator::new(self)
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != AIR).count()
    }

    fn check_bounds(&self, x: usize, y: usize, z: usize) -> Result<(), GridError> {
        if self.contains(x, y, z) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        let err = OccupancyGrid::empty(Vector3::new(4, 0, 4)).unwrap_err();
        assert_eq!(
            err,
            GridError::EmptyDimension {
                width: 4,
                height: 0,
                depth: 4
            }
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = OccupancyGrid::empty(Vector3::new(usize::MAX, 2, 1)).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));
    }

    #[test]
    fn storage_is_x_major_z_minor() {
        let mut grid = OccupancyGrid::empty(Vector3::new(2, 3, 4)).unwrap();
        grid.set(1, 2, 3, 9).unwrap();
        assert_eq!(grid.cells()[3 * 4 + 2 * 4 + 3], 9);
        assert_eq!(grid.cells().len(), 24);
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut grid = OccupancyGrid::empty(Vector3::new(2, 2, 2)).unwrap();
        assert!(grid.get(2, 0, 0).is_err());
        assert!(grid.set(0, 0, 2, 1).is_err());
        assert_eq!(grid.get(1, 1, 1), Ok(0));
    }

    #[test]
    fn neighbours_outside_the_grid_are_empty() {
        let grid = OccupancyGrid::solid(Vector3::new(1, 1, 1), 3).unwrap();
        for side in BlockSide::all() {
            assert_eq!(grid.neighbour(0, 0, 0, side), AIR);
        }
    }

    #[test]
    fn neighbours_inside_the_grid_are_read() {
        let mut grid = OccupancyGrid::empty(Vector3::new(3, 3, 3)).unwrap();
        grid.set(0, 1, 1, 1).unwrap();
        grid.set(2, 1, 1, 2).unwrap();
        grid.set(1, 0, 1, 3).unwrap();
        grid.set(1, 2, 1, 4).unwrap();
        grid.set(1, 1, 0, 5).unwrap();
        grid.set(1, 1, 2, 6).unwrap();

        let values: Vec<BlockTypeSize> = BlockSide::all()
            .into_iter()
            .map(|side| grid.neighbour(1, 1, 1, side))
            .collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn checkerboard_fills_half_the_cells() {
        let grid = OccupancyGrid::checkerboard(Vector3::new(4, 4, 4), 1).unwrap();
        assert_eq!(grid.occupied_count(), 32);
        assert_eq!(grid.get(0, 0, 0), Ok(1));
        assert_eq!(grid.get(1, 0, 0), Ok(0));
    }

    #[test]
    fn random_grids_are_reproducible() {
        let a = OccupancyGrid::random(Vector3::new(8, 8, 8), 0.5, 42).unwrap();
        let b = OccupancyGrid::random(Vector3::new(8, 8, 8), 0.5, 42).unwrap();
        assert_eq!(a, b);
        assert!(a.occupied_count() > 0);
    }

    #[test]
    fn perlin_grids_are_reproducible() {
        let dimensions = Vector3::new(16, 16, 16);
        let a = OccupancyGrid::perlin(dimensions, 3, 0.1, PERLIN_POSITIVE_THRESHOLD).unwrap();
        let b = OccupancyGrid::perlin(dimensions, 3, 0.1, PERLIN_POSITIVE_THRESHOLD).unwrap();
        assert_eq!(a, b);
    }
}
