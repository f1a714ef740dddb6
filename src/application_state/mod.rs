//! # Application State
//!
//! The thin harness around the mesher: it reads the configuration, builds the
//! [`EngineState`], runs one rebuild and reports the result. Window creation,
//! shaders and GPU upload belong to whichever renderer embeds the crate.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::engine_state::{
    rendering::meshing::float_buffer::AllocationError, voxels::grid::GridError, EngineState,
    MeshStats,
};

pub mod config;

use config::EngineConfig;

/// Everything that can stop the application.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A mesh buffer could not grow.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// The configured grid is invalid.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    /// The configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Builds an [`EngineState`] as described by `config`.
pub fn create_engine_state(config: &EngineConfig) -> Result<EngineState, EngineError> {
    let grid = config.generator.generate(config.grid.dimensions())?;
    info!(
        "Generated {}x{}x{} grid with {} occupied cells",
        grid.width(),
        grid.height(),
        grid.depth(),
        grid.occupied_count()
    );

    let mut engine_state = EngineState::new(
        grid,
        config.colouring.into(),
        config.initial_buffer_capacity,
    )?;
    engine_state.set_debug_geometry(config.debug_geometry);
    Ok(engine_state)
}

/// Loads the configuration at `config_path` (or the defaults), builds the
/// engine state and meshes it once.
pub fn run_application(config_path: Option<&Path>) -> Result<MeshStats, EngineError> {
    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            EngineConfig::load(path)?
        }
        None => {
            info!("No configuration given, using defaults");
            EngineConfig::default()
        }
    };

    let mut engine_state = create_engine_state(&config)?;
    let stats = engine_state.rebuild()?;

    if let Some(debug_geometry) = engine_state.debug_geometry() {
        info!(
            "Debug geometry: {} axis vertices, {} cell points",
            debug_geometry.axes_vertices.len() / 4,
            debug_geometry.point_vertices.len() / 4
        );
    }

    Ok(stats)
}
