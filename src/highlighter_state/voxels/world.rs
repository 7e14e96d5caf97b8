//! # World Module
//!
//! This module provides `SimWorld`, the in-memory host world used by the demo binary and
//! the tests. It owns a sparse set of loaded column chunks for a single dimension.
//!
//! ## Architecture
//!
//! Only loaded chunks are kept in memory. A chunk that was never loaded, or was unloaded,
//! reads as absent through `WorldView::chunk_at`, exactly like a real host whose loader has
//! not reached that region yet.

use std::collections::HashMap;

use super::{
    block::block_type::BlockType,
    chunk::{chunk_generation::NetherGenerator, Chunk},
    position::{chunk_of, BlockPos, ChunkPos, DimensionId, VerticalBounds},
};
use crate::highlighter_state::host::WorldView;

/// Represents one dimension's worth of loaded chunks.
///
/// # Examples
///
/// ```
/// use block_highlighter::highlighter_state::voxels::{
///     block::block_type::BlockType,
///     position::{DimensionId, VerticalBounds},
///     world::SimWorld,
/// };
/// use cgmath::{Point2, Point3};
///
/// let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 128));
/// world.add_empty_chunk_at(Point2::new(0, 0));
/// assert!(world.set_block_at(Point3::new(1, 2, 3), BlockType::NetherQuartzOre));
/// ```
pub struct SimWorld {
    dimension: DimensionId,
    bounds: VerticalBounds,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkPos, Chunk>,
}

impl SimWorld {
    /// Creates a new world with no chunks loaded.
    ///
    /// # Arguments
    /// * `dimension` - The dimension this world represents
    /// * `bounds` - The vertical extent shared by every chunk
    pub fn new(dimension: DimensionId, bounds: VerticalBounds) -> Self {
        SimWorld {
            dimension,
            bounds,
            chunks: HashMap::new(),
        }
    }

    /// Loads an all-air chunk at `position` if none is loaded there.
    pub fn add_empty_chunk_at(&mut self, position: ChunkPos) {
        let bounds = self.bounds;
        self.chunks
            .entry(position)
            .or_insert_with(|| Chunk::empty(position, bounds));
    }

    /// Generates and loads a chunk at `position` if none is loaded there.
    pub fn generate_chunk_at(&mut self, position: ChunkPos, generator: &NetherGenerator) {
        let bounds = self.bounds;
        self.chunks
            .entry(position)
            .or_insert_with(|| generator.generate(position, bounds));
    }

    /// Generates every chunk within `radius` chunks of `center` (a square area).
    pub fn generate_square(&mut self, center: ChunkPos, radius: i32, generator: &NetherGenerator) {
        for cx in -radius..=radius {
            for cz in -radius..=radius {
                self.generate_chunk_at(ChunkPos::new(center.x + cx, center.y + cz), generator);
            }
        }
    }

    /// Removes the chunk at `position`, returning it if it was loaded.
    pub fn unload_chunk_at(&mut self, position: ChunkPos) -> Option<Chunk> {
        self.chunks.remove(&position)
    }

    /// Sets a block in a loaded chunk.
    ///
    /// # Returns
    /// `false` if the containing chunk is not loaded or `pos` is outside the vertical bounds.
    pub fn set_block_at(&mut self, pos: BlockPos, block_type: BlockType) -> bool {
        match self.chunks.get_mut(&chunk_of(pos)) {
            Some(chunk) => chunk.set_block_at(pos, block_type),
            None => false,
        }
    }

    /// Reads a block, treating unloaded chunks as air.
    pub fn block_type_at(&self, pos: BlockPos) -> BlockType {
        self.chunks
            .get(&chunk_of(pos))
            .and_then(|chunk| chunk.get_block_at(pos))
            .map(|block| block.block_type())
            .unwrap_or(BlockType::Air)
    }

    /// Number of loaded chunks.
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Counts `block_type` across every loaded chunk.
    pub fn count_of(&self, block_type: BlockType) -> usize {
        self.chunks
            .values()
            .map(|chunk| chunk.count_of(block_type))
            .sum()
    }
}

impl WorldView for SimWorld {
    type Chunk = Chunk;

    fn dimension(&self) -> &DimensionId {
        &self.dimension
    }

    fn vertical_bounds(&self) -> VerticalBounds {
        self.bounds
    }

    fn chunk_at(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point2, Point3};

    use super::*;

    #[test]
    fn blocks_in_unloaded_chunks_read_as_air() {
        let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 16));
        let pos = Point3::new(4, 4, 4);

        assert!(!world.set_block_at(pos, BlockType::NetherQuartzOre));
        world.add_empty_chunk_at(Point2::new(0, 0));
        assert!(world.set_block_at(pos, BlockType::NetherQuartzOre));
        assert_eq!(world.block_type_at(pos), BlockType::NetherQuartzOre);

        world.unload_chunk_at(Point2::new(0, 0));
        assert_eq!(world.block_type_at(pos), BlockType::Air);
        assert!(world.chunk_at(Point2::new(0, 0)).is_none());
    }

    #[test]
    fn generate_square_loads_every_chunk() {
        let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 8));
        world.generate_square(Point2::new(0, 0), 1, &NetherGenerator::new(1));

        assert_eq!(world.loaded_chunk_count(), 9);
    }
}
