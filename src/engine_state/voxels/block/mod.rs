//! # Block Module
//!
//! This module provides the block-related vocabulary of the mesher: the raw
//! material id stored per cell, the named block types and the six block faces.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
///
/// `0` is empty space; every other value is an opaque material id.
pub type BlockTypeSize = u8;

/// The material id of empty space.
pub const AIR: BlockTypeSize = 0;
