//! # Block Type Module
//!
//! This module defines the block types the highlighter can recognise in the host world.
//! It provides conversion from the compact storage representation and a serde
//! representation used by the configuration file.

use num_derive::FromPrimitive;
use serde::Deserialize;

use super::BlockTypeSize;

/// Enumerates the block types the highlighter knows about.
///
/// The host may store block types in any form; `ChunkView` implementations map them onto
/// this enum. Anything the highlighter does not care about can be reported as `Air` or
/// the closest filler type. Only equality with the configured target matters to the scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// An empty cell.
    Air,
    /// Overworld filler stone.
    Stone,
    /// Nether filler block.
    Netherrack,
    /// Basalt column filler found in nether deltas.
    Basalt,
    /// Quartz ore, only generated in the nether.
    NetherQuartzOre,
    /// Gold ore variant found in the nether.
    NetherGoldOre,
    /// Rare nether ore.
    AncientDebris,
    /// Overworld iron ore.
    IronOre,
    /// Overworld diamond ore.
    DiamondOre,
    /// Indestructible floor and ceiling block.
    Bedrock,
}

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// Unknown values map to `Air`, so corrupted or newer storage never aborts a scan.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        num_traits::FromPrimitive::from_u8(btype).unwrap_or(BlockType::Air)
    }

    /// Returns `true` for cells that hold no block.
    pub fn is_air(self) -> bool {
        self == BlockType::Air
    }
}
