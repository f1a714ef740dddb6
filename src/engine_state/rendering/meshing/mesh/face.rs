use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::{block_side::BlockSide, BlockTypeSize};

/// Represents a single exposed unit face of a voxel.
///
/// A face is defined by four corner points (lower-left, lower-right, upper-right,
/// upper-left). The corners are listed counter-clockwise as seen from outside the
/// block, whichever side the face is on, so back-face culling treats all six
/// sides the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Lower-left corner of the face in grid space
    pub ll: Point3<f32>,
    /// Lower-right corner of the face in grid space
    pub lr: Point3<f32>,
    /// Upper-right corner of the face in grid space
    pub ur: Point3<f32>,
    /// Upper-left corner of the face in grid space
    pub ul: Point3<f32>,
    /// The material id of the block owning the face
    pub block_type_int: BlockTypeSize,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the cell at `(i, j, k)`.
    ///
    /// The cell occupies the unit cube whose centre is `(i + 0.5, j + 0.5, k + 0.5)`.
    /// The face sits half a unit from that centre along the side's normal and spans
    /// half a unit either way along the side's two tangent axes.
    ///
    /// # Arguments
    /// * `i`, `j`, `k` - The coordinates of the voxel in grid space
    /// * `block_type_int` - The material id of the voxel
    /// * `block_side` - Which side of the block this face represents
    pub fn new(i: usize, j: usize, k: usize, block_type_int: BlockTypeSize, block_side: BlockSide) -> Self {
        let centre = Point3::new(i as f32 + 0.5, j as f32 + 0.5, k as f32 + 0.5);
        let face_centre = centre + block_side.normal() * 0.5;
        let (u, v): (Vector3<f32>, Vector3<f32>) = block_side.tangents();
        let (u, v) = (u * 0.5, v * 0.5);

        Face {
            ll: face_centre - u - v,
            lr: face_centre + u - v,
            ur: face_centre + u + v,
            ul: face_centre - u + v,
            block_type_int,
            block_side,
        }
    }

    /// The six vertices of the two triangles covering the face.
    ///
    /// The first triangle is `ll, lr, ur`, the second `ur, ul, ll`. Both keep the
    /// counter-clockwise winding of the corners.
    pub fn triangle_vertices(&self) -> [Point3<f32>; 6] {
        [self.ll, self.lr, self.ur, self.ur, self.ul, self.ll]
    }
}
