//! # Chunk Generation Module
//!
//! Procedural terrain for the reference host. The generator fills a column with
//! nether-like terrain: a bedrock floor and ceiling, netherrack shaped by 3D Perlin noise,
//! and ore veins scattered through the solid cells.
//!
//! Generation is deterministic for a given seed and chunk position. Two worlds built
//! from the same seed contain the same blocks, which the demo and the tests rely on.

use cgmath::Point3;
use noise::{NoiseFn, Perlin};

use super::{Chunk, CHUNK_DIMENSION};
use crate::highlighter_state::voxels::{
    block::block_type::BlockType,
    position::{chunk_origin, ChunkPos, VerticalBounds},
};

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered empty for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.04;

/// Builds nether columns from a seed.
pub struct NetherGenerator {
    perlin: Perlin,
    seed: u64,
    /// Probability that a solid cell becomes quartz ore.
    quartz_chance: f64,
    /// Probability that a solid cell becomes ancient debris.
    debris_chance: f64,
}

impl NetherGenerator {
    /// Creates a generator with default ore frequencies.
    pub fn new(seed: u64) -> Self {
        NetherGenerator {
            perlin: Perlin::new(seed as u32),
            seed,
            quartz_chance: 0.012,
            debris_chance: 0.0008,
        }
    }

    /// Overrides the quartz ore probability.
    pub fn with_quartz_chance(mut self, chance: f64) -> Self {
        self.quartz_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Generates the chunk at `position`.
    ///
    /// Cells where the noise falls outside the threshold band are solid, which leaves
    /// cavern-shaped voids inside the band.
    pub fn generate(&self, position: ChunkPos, bounds: VerticalBounds) -> Chunk {
        let mut chunk = Chunk::empty(position, bounds);
        let mut rng = fastrand::Rng::with_seed(self.column_seed(position));
        let (start_x, start_z) = chunk_origin(position);

        for y in bounds.bottom..bounds.top {
            for z in 0..CHUNK_DIMENSION {
                for x in 0..CHUNK_DIMENSION {
                    let pos = Point3::new(start_x + x, y, start_z + z);
                    let block_type = if y == bounds.bottom || y == bounds.top - 1 {
                        BlockType::Bedrock
                    } else if self.is_solid(pos) {
                        self.pick_solid(&mut rng)
                    } else {
                        BlockType::Air
                    };
                    chunk.set_block_at(pos, block_type);
                }
            }
        }

        chunk
    }

    fn is_solid(&self, pos: Point3<i32>) -> bool {
        let sample = self.perlin.get(Self::to_perlin_pos(pos, PERLIN_SCALE_FACTOR));
        !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&sample)
    }

    fn pick_solid(&self, rng: &mut fastrand::Rng) -> BlockType {
        let roll = rng.f64();
        if roll < self.debris_chance {
            BlockType::AncientDebris
        } else if roll < self.debris_chance + self.quartz_chance {
            BlockType::NetherQuartzOre
        } else {
            BlockType::Netherrack
        }
    }

    fn column_seed(&self, position: ChunkPos) -> u64 {
        let x = position.x as i64 as u64;
        let z = position.y as i64 as u64;
        self.seed
            ^ x.wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ z.wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
    }

    /// Converts block coordinates to scaled coordinates for Perlin noise sampling.
    fn to_perlin_pos(pos: Point3<i32>, scale_factor: f64) -> [f64; 3] {
        [
            pos.x as f64 * scale_factor,
            pos.y as f64 * scale_factor,
            pos.z as f64 * scale_factor,
        ]
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;

    #[test]
    fn same_seed_generates_identical_chunks() {
        let bounds = VerticalBounds::new(0, 32);
        let a = NetherGenerator::new(7).generate(Point2::new(1, -1), bounds);
        let b = NetherGenerator::new(7).generate(Point2::new(1, -1), bounds);

        assert!(a
            .positions()
            .all(|pos| a.get_block_at(pos) == b.get_block_at(pos)));
    }

    #[test]
    fn floor_and_ceiling_are_bedrock() {
        let bounds = VerticalBounds::new(0, 16);
        let chunk = NetherGenerator::new(3).generate(Point2::new(0, 0), bounds);

        assert_eq!(chunk.count_of(BlockType::Bedrock), 2 * 256);
    }

    #[test]
    fn full_quartz_chance_leaves_no_netherrack() {
        let bounds = VerticalBounds::new(0, 16);
        let chunk = NetherGenerator::new(3)
            .with_quartz_chance(1.0)
            .generate(Point2::new(0, 0), bounds);

        assert_eq!(chunk.count_of(BlockType::Netherrack), 0);
    }
}
