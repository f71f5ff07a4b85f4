//! Shared cube topology for block meshes
//!
//! Every block expands to the same 8-vertex, 12-triangle cube. Both the OBJ
//! and the OFF encoder reference these tables so that vertex enumeration
//! order, triangle order and winding stay identical across the two formats.

use crate::Triangle;

/// Per-vertex selection into the six corner fields `(x0, y0, z0, x1, y1, z1)`.
///
/// Enumerates the Cartesian combination `{x0,x1} x {y0,y1} x {z0,z1}`:
/// low corner first, x varies fastest, then y, then z.
pub const CORNER_SELECTION: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 1, 2],
    [0, 4, 2],
    [3, 4, 2],
    [0, 1, 5],
    [3, 1, 5],
    [0, 4, 5],
    [3, 4, 5],
];

/// The 12 triangles of a cube, two per face, referencing the local vertex
/// indices of [`CORNER_SELECTION`].
///
/// Face order is front, back, left, right, top, bottom. The triangle order
/// and winding are part of the output contract and must not change.
pub const FACES: [Triangle; 12] = [
    // front
    Triangle::new(0, 1, 2),
    Triangle::new(1, 3, 2),
    // back
    Triangle::new(4, 5, 6),
    Triangle::new(5, 7, 6),
    // left
    Triangle::new(0, 4, 2),
    Triangle::new(4, 6, 2),
    // right
    Triangle::new(1, 5, 3),
    Triangle::new(5, 7, 3),
    // top
    Triangle::new(2, 3, 6),
    Triangle::new(3, 7, 6),
    // bottom
    Triangle::new(0, 1, 4),
    Triangle::new(1, 5, 4),
];

/// Number of vertices emitted per block
pub const VERTICES_PER_BLOCK: usize = CORNER_SELECTION.len();

/// Number of triangles emitted per block
pub const FACES_PER_BLOCK: usize = FACES.len();

/// Nominal edge count per block, as declared in OFF headers.
///
/// Asserted by construction, not derived from shared-edge topology.
pub const EDGES_PER_BLOCK: usize = 18;

/// Expand six corner values into the 8 cube vertices in enumeration order
pub fn vertices<T: Copy>(corners: &[T; 6]) -> [[T; 3]; 8] {
    CORNER_SELECTION.map(|sel| [corners[sel[0]], corners[sel[1]], corners[sel[2]]])
}
