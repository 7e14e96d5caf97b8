//! # Chunk Module
//!
//! This module provides the in-memory `Chunk` used by the reference host. A chunk is a
//! 16x16 column of cells spanning the world's full vertical extent.
//!
//! ## Storage Layout
//!
//! Blocks are stored densely, one byte per cell, in y-major order:
//! `index = (y - bottom) * CHUNK_PLANE_SIZE + z * CHUNK_DIMENSION + x`.
//! A horizontal slice is contiguous, which matches the generator's fill order.

use cgmath::Point3;

use super::{
    block::{block_type::BlockType, Block},
    position::{chunk_origin, BlockPos, ChunkPos, VerticalBounds},
};
use crate::highlighter_state::host::ChunkView;

pub mod chunk_generation;

/// The width and depth of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single horizontal plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;

/// A 16-wide column of blocks covering the world's full height.
#[derive(Clone, Debug)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: ChunkPos,
    /// The vertical range the column covers.
    bounds: VerticalBounds,
    /// Dense block storage, see the module docs for the layout.
    blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `bounds` - The vertical extent of the owning world
    pub fn empty(position: ChunkPos, bounds: VerticalBounds) -> Self {
        Self::filled(position, bounds, BlockType::Air)
    }

    /// Creates a chunk where every cell holds `block_type`.
    pub fn filled(position: ChunkPos, bounds: VerticalBounds, block_type: BlockType) -> Self {
        Chunk {
            position,
            bounds,
            blocks: vec![Block::new(block_type); bounds.height() * CHUNK_PLANE_SIZE as usize],
        }
    }

    /// Gets the block at the specified world position.
    ///
    /// # Returns
    /// `None` if the position lies outside this chunk's column or vertical bounds.
    pub fn get_block_at(&self, pos: BlockPos) -> Option<Block> {
        self.index_of(pos).map(|index| self.blocks[index])
    }

    /// Replaces the block at the specified world position.
    ///
    /// # Returns
    /// `false` if the position lies outside this chunk, in which case nothing changes.
    pub fn set_block_at(&mut self, pos: BlockPos, block_type: BlockType) -> bool {
        match self.index_of(pos) {
            Some(index) => {
                self.blocks[index] = Block::new(block_type);
                true
            }
            None => false,
        }
    }

    /// Counts the cells holding `block_type`.
    pub fn count_of(&self, block_type: BlockType) -> usize {
        let raw = Block::new(block_type);
        self.blocks.iter().filter(|block| **block == raw).count()
    }

    /// Iterates every world position in the column in storage order.
    pub fn positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        let (start_x, start_z) = chunk_origin(self.position);
        (self.bounds.bottom..self.bounds.top).flat_map(move |y| {
            (0..CHUNK_DIMENSION).flat_map(move |z| {
                (0..CHUNK_DIMENSION).map(move |x| Point3::new(start_x + x, y, start_z + z))
            })
        })
    }

    fn index_of(&self, pos: BlockPos) -> Option<usize> {
        let (start_x, start_z) = chunk_origin(self.position);
        let local_x = pos.x - start_x;
        let local_z = pos.z - start_z;
        if !(0..CHUNK_DIMENSION).contains(&local_x)
            || !(0..CHUNK_DIMENSION).contains(&local_z)
            || !self.bounds.contains(pos.y)
        {
            return None;
        }
        let local_y = pos.y - self.bounds.bottom;
        Some((local_y * CHUNK_PLANE_SIZE + local_z * CHUNK_DIMENSION + local_x) as usize)
    }
}

impl ChunkView for Chunk {
    fn position(&self) -> ChunkPos {
        self.position
    }

    fn block_type_at(&self, pos: BlockPos) -> BlockType {
        self.get_block_at(pos)
            .map(|block| block.block_type())
            .unwrap_or(BlockType::Air)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;

    fn bounds() -> VerticalBounds {
        VerticalBounds::new(0, 8)
    }

    #[test]
    fn set_and_read_back_with_negative_chunk() {
        let mut chunk = Chunk::empty(Point2::new(-1, -2), bounds());
        let pos = Point3::new(-3, 5, -20);

        assert!(chunk.set_block_at(pos, BlockType::NetherQuartzOre));
        assert_eq!(chunk.block_type_at(pos), BlockType::NetherQuartzOre);
        assert_eq!(chunk.count_of(BlockType::NetherQuartzOre), 1);
    }

    #[test]
    fn out_of_column_positions_are_rejected() {
        let mut chunk = Chunk::empty(Point2::new(0, 0), bounds());

        assert!(!chunk.set_block_at(Point3::new(16, 0, 0), BlockType::Stone));
        assert!(!chunk.set_block_at(Point3::new(0, 8, 0), BlockType::Stone));
        assert_eq!(chunk.block_type_at(Point3::new(0, -1, 0)), BlockType::Air);
    }

    #[test]
    fn positions_cover_every_cell_once() {
        let chunk = Chunk::filled(Point2::new(2, 3), bounds(), BlockType::Netherrack);
        let positions: Vec<_> = chunk.positions().collect();

        assert_eq!(positions.len(), 8 * 256);
        assert!(positions.iter().all(|pos| chunk.get_block_at(*pos).is_some()));
    }
}
