//! # Configuration
//!
//! JSON configuration of the mesher binary. Every field is optional; missing
//! fields take the values of the classic demo, a 100³ grid filled with material 1
//! and painted green.
//!
//! ```json
//! {
//!     "grid": { "width": 100, "height": 100, "depth": 100 },
//!     "generator": { "kind": "solid", "material": 1 },
//!     "colouring": { "kind": "constant", "rgba": [0.0, 1.0, 0.0, 1.0] },
//!     "initial_buffer_capacity": 64,
//!     "debug_geometry": false
//! }
//! ```

use std::{fs, path::Path};

use cgmath::Vector3;
use serde::Deserialize;

use crate::engine_state::{
    rendering::meshing::colour::{Colouring, ConstantColour, PaletteColour},
    voxels::{
        block::{block_type::BlockType, BlockTypeSize},
        grid::{GridError, OccupancyGrid, PERLIN_POSITIVE_THRESHOLD, PERLIN_SCALE_FACTOR},
    },
};

use super::EngineError;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid dimensions.
    pub grid: GridConfig,
    /// How the grid is filled.
    pub generator: GeneratorConfig,
    /// How faces are coloured.
    pub colouring: ColouringConfig,
    /// Capacity hint, in floats, for each output buffer.
    pub initial_buffer_capacity: usize,
    /// Whether to build the axis and cell-point overlays.
    pub debug_geometry: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            grid: GridConfig::default(),
            generator: GeneratorConfig::default(),
            colouring: ColouringConfig::default(),
            initial_buffer_capacity: 64,
            debug_geometry: false,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells along x.
    pub width: usize,
    /// Cells along y.
    pub height: usize,
    /// Cells along z.
    pub depth: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: 100,
            height: 100,
            depth: 100,
        }
    }
}

impl GridConfig {
    /// The dimensions as a vector.
    pub fn dimensions(&self) -> Vector3<usize> {
        Vector3::new(self.width, self.height, self.depth)
    }
}

/// Procedural fill of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Every cell empty.
    Empty,
    /// Every cell set to `material`.
    Solid {
        /// Material id of every cell.
        #[serde(default = "default_material")]
        material: BlockTypeSize,
    },
    /// Alternating cells set to `material`.
    Checkerboard {
        /// Material id of the filled cells.
        #[serde(default = "default_material")]
        material: BlockTypeSize,
    },
    /// Random cells with random named materials.
    Random {
        /// Probability that a cell stays empty.
        #[serde(default = "default_sparseness")]
        sparseness: f64,
        /// Random seed.
        #[serde(default)]
        seed: u64,
    },
    /// Perlin-noise terrain.
    Perlin {
        /// Noise seed.
        #[serde(default)]
        seed: u32,
        /// Coordinate scale applied before sampling.
        #[serde(default = "default_perlin_scale")]
        scale: f64,
        /// Half-width of the empty noise band.
        #[serde(default = "default_perlin_threshold")]
        threshold: f64,
    },
}

fn default_material() -> BlockTypeSize {
    BlockType::DIRT.to_int()
}

fn default_sparseness() -> f64 {
    0.9
}

fn default_perlin_scale() -> f64 {
    PERLIN_SCALE_FACTOR
}

fn default_perlin_threshold() -> f64 {
    PERLIN_POSITIVE_THRESHOLD
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::Solid {
            material: default_material(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a grid of `dimensions` cells filled by this generator.
    pub fn generate(&self, dimensions: Vector3<usize>) -> Result<OccupancyGrid, GridError> {
        match *self {
            GeneratorConfig::Empty => OccupancyGrid::empty(dimensions),
            GeneratorConfig::Solid { material } => OccupancyGrid::solid(dimensions, material),
            GeneratorConfig::Checkerboard { material } => {
                OccupancyGrid::checkerboard(dimensions, material)
            }
            GeneratorConfig::Random { sparseness, seed } => {
                OccupancyGrid::random(dimensions, sparseness, seed)
            }
            GeneratorConfig::Perlin {
                seed,
                scale,
                threshold,
            } => OccupancyGrid::perlin(dimensions, seed, scale, threshold),
        }
    }
}

/// Face colouring.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColouringConfig {
    /// One colour for every face.
    Constant {
        /// The RGBA colour.
        #[serde(default = "default_rgba")]
        rgba: [f32; 4],
    },
    /// Colour by block type, shaded per side.
    Palette,
}

fn default_rgba() -> [f32; 4] {
    ConstantColour::default().0
}

impl Default for ColouringConfig {
    fn default() -> Self {
        ColouringConfig::Constant {
            rgba: default_rgba(),
        }
    }
}

impl From<ColouringConfig> for Colouring {
    fn from(config: ColouringConfig) -> Self {
        match config {
            ColouringConfig::Constant { rgba } => Colouring::Constant(ConstantColour(rgba)),
            ColouringConfig::Palette => Colouring::Palette(PaletteColour::default()),
        }
    }
}
