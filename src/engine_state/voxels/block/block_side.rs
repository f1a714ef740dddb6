//! # Block Side Module
//!
//! This module defines the six axis-aligned faces of a voxel block together with
//! the geometry the mesher needs for each of them: the outward normal, the
//! neighbour offset and the two tangent axes spanning the face.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants follow the order in which the mesher evaluates faces for a
/// single cell: [LEFT, RIGHT, BOTTOM, TOP, BACK, FRONT], that is
/// −x, +x, −y, +y, −z, +z. This order is part of the output contract because it
/// decides where each face lands in the vertex buffer.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The back face (facing negative Z)
    BACK = 4,

    /// The front face (facing positive Z)
    FRONT = 5,
}

impl BlockSide {
    /// Returns all six block faces in emission order.
    ///
    /// The order is: [LEFT, RIGHT, BOTTOM, TOP, BACK, FRONT]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::BACK,
            BlockSide::FRONT,
        ]
    }

    /// Offset from a cell to the neighbour that shares this face.
    pub fn offset(self) -> Vector3<isize> {
        match self {
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
        }
    }

    /// Unit vector pointing out of the block through this face.
    pub fn normal(self) -> Vector3<f32> {
        self.offset().map(|component| component as f32)
    }

    /// The two unit axes spanning the face, ordered so that `u × v` equals the
    /// outward normal.
    ///
    /// Walking the corners `-u-v → +u-v → +u+v → -u+v` is then counter-clockwise
    /// when seen from outside the block, for every side.
    pub fn tangents(self) -> (Vector3<f32>, Vector3<f32>) {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        let z = Vector3::unit_z();
        match self {
            BlockSide::LEFT => (z, y),
            BlockSide::RIGHT => (y, z),
            BlockSide::BOTTOM => (x, z),
            BlockSide::TOP => (z, x),
            BlockSide::BACK => (y, x),
            BlockSide::FRONT => (x, y),
        }
    }
}
