//! # Block Scanner
//!
//! Bounded-radius search for one block type around a centre cell.
//!
//! ## Algorithm
//!
//! 1. Bail out if a dimension restriction is set and the world is elsewhere.
//! 2. Visit the square of chunks within `ceil(range / 16) + 1` of the centre's chunk.
//! 3. Skip chunks the host has not loaded; they contribute nothing.
//! 4. In each loaded chunk, walk every column bottom to top and keep cells whose squared
//!    distance to the centre is below `range²` and whose type is the target.
//!
//! Chunks are visited in a fixed order (x-major, then z) and cells inside a chunk in x, z, y
//! order, so an unchanged region always yields the same list.

use cgmath::Point3;
use log::trace;

use crate::config::HighlighterConfig;
use crate::highlighter_state::{
    host::{ChunkView, WorldView},
    voxels::{
        block::block_type::BlockType,
        chunk::CHUNK_DIMENSION,
        position::{chunk_of, chunk_origin, squared_distance, BlockPos, ChunkPos, DimensionId},
    },
};

/// The result of one scan.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanOutcome {
    /// The world is outside the configured dimension; nothing was scanned.
    WrongDimension,
    /// The region was scanned.
    Scanned(ScanReport),
}

/// What a completed scan found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    /// Matching positions, in visit order.
    pub positions: Vec<BlockPos>,
    /// Chunks that were loaded and walked.
    pub chunks_scanned: usize,
    /// Chunks in range that the host had not loaded.
    pub chunks_skipped: usize,
}

/// Finds the configured block type around a centre cell.
#[derive(Clone, Debug)]
pub struct BlockScanner {
    range: u32,
    target: BlockType,
    restrict_dimension: Option<DimensionId>,
}

impl BlockScanner {
    /// Creates a scanner from the search settings in `config`.
    pub fn new(config: &HighlighterConfig) -> Self {
        BlockScanner {
            range: config.range,
            target: config.target_block,
            restrict_dimension: config.restrict_dimension.clone(),
        }
    }

    /// The block type being searched for.
    pub fn target(&self) -> BlockType {
        self.target
    }

    /// Chunk radius of the square search area.
    pub fn chunk_radius(&self) -> i32 {
        self.range.div_ceil(CHUNK_DIMENSION as u32) as i32 + 1
    }

    /// Whether `dimension` passes the dimension restriction.
    pub fn accepts_dimension(&self, dimension: &DimensionId) -> bool {
        self.restrict_dimension
            .as_ref()
            .map_or(true, |restricted| restricted == dimension)
    }

    /// Scans `world` around `center`.
    pub fn scan<W: WorldView>(&self, world: &W, center: BlockPos) -> ScanOutcome {
        if !self.accepts_dimension(world.dimension()) {
            return ScanOutcome::WrongDimension;
        }

        let center_chunk = chunk_of(center);
        let chunk_radius = self.chunk_radius();
        let mut report = ScanReport::default();

        for cx in -chunk_radius..=chunk_radius {
            for cz in -chunk_radius..=chunk_radius {
                let chunk_pos = ChunkPos::new(center_chunk.x + cx, center_chunk.y + cz);
                match world.chunk_at(chunk_pos) {
                    Some(chunk) => {
                        self.scan_chunk(world, chunk, center, &mut report.positions);
                        report.chunks_scanned += 1;
                    }
                    None => {
                        trace!("Chunk {:?} not loaded, skipping", chunk_pos);
                        report.chunks_skipped += 1;
                    }
                }
            }
        }

        ScanOutcome::Scanned(report)
    }

    fn scan_chunk<W: WorldView>(
        &self,
        world: &W,
        chunk: &W::Chunk,
        center: BlockPos,
        found: &mut Vec<BlockPos>,
    ) {
        let (start_x, start_z) = chunk_origin(chunk.position());
        let bounds = world.vertical_bounds();
        let range_squared = self.range as i64 * self.range as i64;

        for x in 0..CHUNK_DIMENSION {
            for z in 0..CHUNK_DIMENSION {
                for y in bounds.bottom..bounds.top {
                    let pos = Point3::new(start_x + x, y, start_z + z);
                    if squared_distance(pos, center) >= range_squared {
                        continue;
                    }
                    if chunk.block_type_at(pos) == self.target {
                        found.push(pos);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point2;

    use super::*;
    use crate::highlighter_state::voxels::{position::VerticalBounds, world::SimWorld};

    fn world_with_chunks(radius: i32) -> SimWorld {
        let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 128));
        for cx in -radius..=radius {
            for cz in -radius..=radius {
                world.add_empty_chunk_at(Point2::new(cx, cz));
            }
        }
        world
    }

    fn scanned(outcome: ScanOutcome) -> ScanReport {
        match outcome {
            ScanOutcome::Scanned(report) => report,
            other => panic!("Expected Scanned, got {:?}", other),
        }
    }

    #[test]
    fn chunk_radius_rounds_up() {
        let mut config = HighlighterConfig::default();
        assert_eq!(BlockScanner::new(&config).chunk_radius(), 3);
        config.range = 33;
        assert_eq!(BlockScanner::new(&config).chunk_radius(), 4);
        config.range = 1;
        assert_eq!(BlockScanner::new(&config).chunk_radius(), 2);
    }

    #[test]
    fn range_boundary_is_strict() {
        let config = HighlighterConfig {
            range: 5,
            ..HighlighterConfig::default()
        };
        let scanner = BlockScanner::new(&config);
        let mut world = world_with_chunks(2);
        let center = Point3::new(0, 64, 0);

        // 5² = 25
        let at_limit = Point3::new(0, 64, 5);
        // 4² + 2² + 2² = 24
        let just_inside = Point3::new(4, 66, -2);

        for pos in [at_limit, just_inside] {
            assert!(world.set_block_at(pos, BlockType::NetherQuartzOre));
        }

        let report = scanned(scanner.scan(&world, center));
        assert_eq!(report.positions, vec![just_inside]);
    }

    #[test]
    fn default_range_excludes_exactly_thirty_two_blocks_away() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = world_with_chunks(3);
        let center = Point3::new(0, 64, 0);

        // 32² = 1024
        let at_limit = Point3::new(-32, 64, 0);
        // 1² + 11² + 30² = 1022
        let inside = Point3::new(1, 75, 30);

        for pos in [at_limit, inside] {
            assert!(world.set_block_at(pos, BlockType::NetherQuartzOre));
        }

        let report = scanned(scanner.scan(&world, center));
        assert_eq!(report.positions, vec![inside]);
    }

    #[test]
    fn whole_vertical_extent_is_scanned() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(-64, 320));
        world.add_empty_chunk_at(Point2::new(0, 0));

        let lowest = Point3::new(0, -64, 0);
        let highest = Point3::new(0, 319, 0);
        let below_zero = Point3::new(1, -20, 1);
        for pos in [lowest, highest, below_zero] {
            assert!(world.set_block_at(pos, BlockType::NetherQuartzOre));
        }
        assert!(!world.set_block_at(Point3::new(0, 320, 0), BlockType::NetherQuartzOre));

        // Centred on each end so the range never hides either of them.
        let bottom = scanned(scanner.scan(&world, Point3::new(0, -50, 0)));
        assert_eq!(bottom.positions, vec![lowest, below_zero]);

        let top = scanned(scanner.scan(&world, Point3::new(0, 300, 0)));
        assert_eq!(top.positions, vec![highest]);
    }

    #[test]
    fn wrong_dimension_scans_nothing() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = SimWorld::new(DimensionId::overworld(), VerticalBounds::new(0, 16));
        world.add_empty_chunk_at(Point2::new(0, 0));
        world.set_block_at(Point3::new(1, 1, 1), BlockType::NetherQuartzOre);

        assert_eq!(
            scanner.scan(&world, Point3::new(0, 0, 0)),
            ScanOutcome::WrongDimension
        );
    }

    #[test]
    fn unloaded_chunks_are_counted_and_skipped() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = world_with_chunks(0);
        world.set_block_at(Point3::new(3, 10, 3), BlockType::NetherQuartzOre);

        let report = scanned(scanner.scan(&world, Point3::new(0, 10, 0)));
        assert_eq!(report.positions, vec![Point3::new(3, 10, 3)]);
        assert_eq!(report.chunks_scanned, 1);
        assert_eq!(report.chunks_skipped, 48);
    }

    #[test]
    fn non_target_blocks_are_ignored() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = world_with_chunks(1);
        world.set_block_at(Point3::new(2, 2, 2), BlockType::AncientDebris);
        world.set_block_at(Point3::new(-2, 2, -2), BlockType::NetherQuartzOre);

        let report = scanned(scanner.scan(&world, Point3::new(0, 2, 0)));
        assert_eq!(report.positions, vec![Point3::new(-2, 2, -2)]);
    }

    #[test]
    fn rescanning_an_unchanged_world_is_idempotent() {
        let scanner = BlockScanner::new(&HighlighterConfig::default());
        let mut world = world_with_chunks(3);
        for i in 0..20 {
            world.set_block_at(Point3::new(i - 10, 30 + i, 10 - i), BlockType::NetherQuartzOre);
        }

        let first = scanned(scanner.scan(&world, Point3::new(0, 40, 0)));
        let second = scanned(scanner.scan(&world, Point3::new(0, 40, 0)));
        assert_eq!(first.positions.len(), 20);
        assert_eq!(first, second);
    }
}
