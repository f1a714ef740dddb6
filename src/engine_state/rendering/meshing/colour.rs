//! # Face Colour Module
//!
//! Decides the RGBA colour written for every vertex of an emitted face.
//!
//! Any closure `Fn(BlockTypeSize, BlockSide) -> [f32; 4]` can be used directly.
//! Two ready-made colourings are provided: [`ConstantColour`], which paints every
//! face the same, and [`PaletteColour`], which looks up a base colour per block
//! type and shades it per side.

use phf::phf_map;

use crate::engine_state::voxels::block::{block_side::BlockSide, BlockTypeSize};

/// Maps a block's material id and face direction to an RGBA colour.
pub trait FaceColour {
    /// The colour of every vertex of the face on `block_side` of a block of type
    /// `block_type_int`.
    fn colour(&self, block_type_int: BlockTypeSize, block_side: BlockSide) -> [f32; 4];
}

impl<F> FaceColour for F
where
    F: Fn(BlockTypeSize, BlockSide) -> [f32; 4],
{
    fn colour(&self, block_type_int: BlockTypeSize, block_side: BlockSide) -> [f32; 4] {
        self(block_type_int, block_side)
    }
}

/// Paints every face with one colour.
///
/// The default is opaque green.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantColour(pub [f32; 4]);

impl Default for ConstantColour {
    fn default() -> Self {
        ConstantColour([0.0, 1.0, 0.0, 1.0])
    }
}

impl FaceColour for ConstantColour {
    fn colour(&self, _block_type_int: BlockTypeSize, _block_side: BlockSide) -> [f32; 4] {
        self.0
    }
}

/// Base colour of each named block type, indexed by material id.
static BLOCK_TYPE_TO_COLOUR: phf::Map<u8, [f32; 4]> = phf_map! {
    1u8 => [0.45, 0.32, 0.2, 1.0],  // DIRT
    2u8 => [0.3, 0.7, 0.25, 1.0],   // GRASS
    3u8 => [0.55, 0.4, 0.22, 1.0],  // WOOD
    4u8 => [1.0, 1.0, 1.0, 1.0],    // WHITE
};

/// Colours faces by block type, darkening them per side.
///
/// Flat-shaded geometry has no lighting, so neighbouring faces of a cube would be
/// indistinguishable without the per-side shade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColour {
    /// Colour used for material ids without a palette entry.
    pub fallback: [f32; 4],
}

impl Default for PaletteColour {
    fn default() -> Self {
        PaletteColour {
            fallback: [1.0, 0.0, 1.0, 1.0],
        }
    }
}

impl PaletteColour {
    /// Brightness factor applied to the RGB channels of a face.
    pub fn shade(block_side: BlockSide) -> f32 {
        match block_side {
            BlockSide::TOP => 1.0,
            BlockSide::BOTTOM => 0.5,
            BlockSide::LEFT | BlockSide::RIGHT => 0.8,
            BlockSide::BACK | BlockSide::FRONT => 0.65,
        }
    }
}

impl FaceColour for PaletteColour {
    fn colour(&self, block_type_int: BlockTypeSize, block_side: BlockSide) -> [f32; 4] {
        let [r, g, b, a] = BLOCK_TYPE_TO_COLOUR
            .get(&block_type_int)
            .copied()
            .unwrap_or(self.fallback);
        let shade = Self::shade(block_side);
        [r * shade, g * shade, b * shade, a]
    }
}

/// The colourings an engine can be configured with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Colouring {
    /// See [`ConstantColour`].
    Constant(ConstantColour),
    /// See [`PaletteColour`].
    Palette(PaletteColour),
}

impl Default for Colouring {
    fn default() -> Self {
        Colouring::Constant(ConstantColour::default())
    }
}

impl FaceColour for Colouring {
    fn colour(&self, block_type_int: BlockTypeSize, block_side: BlockSide) -> [f32; 4] {
        match self {
            Colouring::Constant(constant) => constant.colour(block_type_int, block_side),
            Colouring::Palette(palette) => palette.colour(block_type_int, block_side),
        }
    }
}
