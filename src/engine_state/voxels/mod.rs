//! # Voxel Data
//!
//! This module contains the voxel model the mesher reads.
//!
//! ## Architecture
//!
//! * **Block**: Material ids, the named block types and the six block faces
//! * **Grid**: A fixed-size dense 3D array of material ids, with bounds-checked
//!   access, occupied-cell iteration and procedural generators
//!
//! ## Ownership
//!
//! The grid is owned by the caller. Meshing only borrows it immutably, so the
//! borrow checker rules out edits while a build pass is running.

pub mod block;
pub mod grid;
