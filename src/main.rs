//! # Voxel Mesher Entry Point
//!
//! Builds the configured grid, meshes it once and logs the buffer statistics.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- mesher.json
//! ```

fn main() {
    voxel_mesher::run();
}
