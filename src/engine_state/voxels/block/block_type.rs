//! # Block Type Module
//!
//! This module names the well-known material ids that can be stored in an
//! occupancy grid. Any other non-zero id is still a valid opaque material; it
//! simply has no name here.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates the named block types.
///
/// The discriminant of each variant is the material id stored in the grid. The
/// `FromPrimitive` derive allows conversion back from the raw id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space. Never meshed.
    AIR = 0,

    /// A basic dirt block, used as a common building material.
    DIRT = 1,

    /// A grass block.
    GRASS = 2,

    /// A wooden block.
    WOOD = 3,

    /// A plain white block, often used for testing.
    WHITE = 4,
}

impl BlockType {
    /// Converts a raw material id to a `BlockType`.
    ///
    /// # Returns
    /// `None` for ids that have no name.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// The raw material id of this block type.
    pub fn to_int(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether the block is drawn at all.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }

    /// Draws a random block type (excluding AIR) from `rng`.
    ///
    /// Used by the procedural grid generators, which seed `rng` so their output is
    /// reproducible.
    pub fn get_random_type(rng: &mut fastrand::Rng) -> Self {
        Self::from_int(rng.u8(1..=4)).unwrap_or(BlockType::DIRT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_int() {
        for block_type in [
            BlockType::AIR,
            BlockType::DIRT,
            BlockType::GRASS,
            BlockType::WOOD,
            BlockType::WHITE,
        ] {
            assert_eq!(BlockType::from_int(block_type.to_int()), Some(block_type));
        }
        assert_eq!(BlockType::from_int(200), None);
    }

    #[test]
    fn random_types_are_solid() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            assert!(BlockType::get_random_type(&mut rng).is_solid());
        }
    }
}
