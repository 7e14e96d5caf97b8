//! # Position Module
//!
//! Coordinate types shared by the scanner, the renderer and host implementations.
//!
//! - `BlockPos`: integer cell coordinates in world space
//! - `ChunkPos`: horizontal chunk coordinates (x, z), one chunk per 16x16 column
//! - `DimensionId`: the named world instance a position belongs to
//! - `VerticalBounds`: the world's build height range

use std::fmt;

use cgmath::{Point2, Point3};
use serde::Deserialize;

use super::chunk::CHUNK_DIMENSION;

/// Integer coordinates of a voxel cell.
pub type BlockPos = Point3<i32>;

/// Horizontal chunk coordinates. `x` maps to block x, `y` maps to block z.
pub type ChunkPos = Point2<i32>;

/// Returns the chunk containing the given block.
pub fn chunk_of(pos: BlockPos) -> ChunkPos {
    Point2::new(
        pos.x.div_euclid(CHUNK_DIMENSION),
        pos.z.div_euclid(CHUNK_DIMENSION),
    )
}

/// Returns the block-space coordinates of the chunk's minimum corner on the x/z plane.
pub fn chunk_origin(chunk: ChunkPos) -> (i32, i32) {
    (chunk.x * CHUNK_DIMENSION, chunk.y * CHUNK_DIMENSION)
}

/// Returns the cell an observer at a continuous position is standing in.
pub fn block_pos_of(position: Point3<f64>) -> BlockPos {
    Point3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    )
}

/// Squared Euclidean distance between two cells.
///
/// Computed in `i64` so cells near the world border cannot overflow.
pub fn squared_distance(a: BlockPos, b: BlockPos) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    let dz = (a.z - b.z) as i64;
    dx * dx + dy * dy + dz * dz
}

/// Identifier of a dimension, e.g. `"the_nether"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct DimensionId(String);

impl DimensionId {
    /// Creates an identifier from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        DimensionId(name.into())
    }

    /// The nether dimension.
    pub fn nether() -> Self {
        DimensionId::new("the_nether")
    }

    /// The overworld dimension.
    pub fn overworld() -> Self {
        DimensionId::new("overworld")
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The vertical extent of a world: `bottom` is inclusive, `top` is exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerticalBounds {
    /// Lowest buildable y.
    pub bottom: i32,
    /// One past the highest buildable y.
    pub top: i32,
}

impl VerticalBounds {
    /// Creates new bounds. An inverted range is clamped to empty.
    pub fn new(bottom: i32, top: i32) -> Self {
        VerticalBounds {
            bottom,
            top: top.max(bottom),
        }
    }

    /// Number of cells in a column.
    pub fn height(&self) -> usize {
        (self.top - self.bottom) as usize
    }

    /// Whether `y` lies within the bounds.
    pub fn contains(&self, y: i32) -> bool {
        (self.bottom..self.top).contains(&y)
    }
}
