#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! Face-culled mesh generation for dense voxel grids.
//!
//! Given a 3D grid of `u8` material ids (`0` is empty), the mesher emits exactly
//! the faces that can be seen: faces on the grid boundary and faces whose
//! neighbour holds a different material. Each such face becomes two triangles,
//! written as flat `x, y, z, w` positions and `r, g, b, a` colours into reusable
//! growable float buffers that a renderer can upload as they are.
//!
//! ## Key Modules
//!
//! * `application_state` - Configuration loading and the binary's harness
//! * `engine_state` - The application context, the voxel model and the mesher
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use voxel_mesher::{build_mesh, ConstantColour, FloatBuffer, OccupancyGrid};
//!
//! let mut grid = OccupancyGrid::empty(Vector3::new(3, 3, 3)).unwrap();
//! grid.set(1, 1, 1, 5).unwrap();
//!
//! let mut vertices = FloatBuffer::with_capacity(64).unwrap();
//! let mut colours = FloatBuffer::with_capacity(64).unwrap();
//! build_mesh(&grid, &mut vertices, &mut colours, &ConstantColour([1.0, 0.0, 0.0, 1.0])).unwrap();
//!
//! // Six faces of six vertices of four floats.
//! assert_eq!(vertices.len(), 6 * 6 * 4);
//! assert_eq!(colours.len(), vertices.len());
//! ```
//!
//! ## Performance Considerations
//!
//! * The grid is a single contiguous vector walked front to back
//! * Output buffers keep their allocation across rebuilds
//! * Faces are not merged; every exposed unit face costs six vertices

use log::{error, info};

pub mod application_state;
pub mod engine_state;

pub use application_state::{config::EngineConfig, EngineError};
pub use engine_state::{
    rendering::meshing::{
        colour::{Colouring, ConstantColour, FaceColour, PaletteColour},
        float_buffer::{AllocationError, FloatBuffer},
        mesh::{build_mesh, Face, COMPONENTS_PER_VERTEX, FLOATS_PER_FACE, VERTICES_PER_FACE},
    },
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType, BlockTypeSize},
        grid::{GridError, OccupancyGrid},
    },
    EngineState, MeshSnapshot, MeshStats,
};

/// Runs the mesher binary.
///
/// The first command-line argument, if any, is the path of a JSON configuration
/// file. Exits the process with status 1 on failure.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    match application_state::run_application(config_path.as_deref()) {
        Ok(stats) => info!("Done: {} vertices ready for upload", stats.vertices),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
