//! # Block Module
//!
//! Block type definitions and the compact block record stored by in-memory chunks.

use block_type::BlockType;

pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Represents a single voxel block in a chunk.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute keeps the record a single byte so a full-height column chunk
/// stays compact. The block type is stored as a `BlockTypeSize`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The empty block. Zeroed memory decodes to this value.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    ///
    /// # Arguments
    /// * `block_type` - The type of block to create
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes the stored type.
    pub fn block_type(&self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }
}
