//! # Voxel Types
//!
//! Everything the highlighter knows about the host's voxel world.
//!
//! * **Block**: block types and the compact stored record
//! * **Position**: block, chunk and dimension coordinates
//! * **Chunk**: the reference host's column storage and terrain generation
//! * **World**: the reference host's loaded-chunk map
//!
//! The scanner only talks to the world through the `WorldView` and `ChunkView` traits.
//! `Chunk` and `SimWorld` are one implementation of those traits; an engine integration
//! supplies its own.

pub mod block;
pub mod chunk;
pub mod position;
pub mod world;
