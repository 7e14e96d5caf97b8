#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Block Highlighter
//!
//! Finds every block of one type near a moving observer and outlines it each frame.
//!
//! The highlighter is embedded in a host game client. The host calls it once per simulation
//! tick, which may trigger a rescan of the surrounding chunks, and once per rendered frame,
//! which draws a wireframe box around every cached match.
//!
//! ## Key Modules
//!
//! * `config` - Tunables with compiled-in defaults and JSON overrides
//! * `core` - The single-threaded shared resource the two callbacks use
//! * `highlighter_state` - The cache, the scanner, the renderer and the host interface
//!
//! ## Usage
//!
//! ```rust
//! use block_highlighter::{config::HighlighterConfig, highlighter_state::Highlighter};
//!
//! let highlighter = Highlighter::new(HighlighterConfig::default());
//! let cache = highlighter.cache();
//! assert!(cache.get().is_empty());
//! ```
//!
//! The `run` function drives a demo against the in-memory reference host.

use cgmath::{Point2, Point3, Vector3};
use log::info;

use config::HighlighterConfig;
use highlighter_state::{
    cache::RefreshOutcome,
    sim_client::SimClient,
    voxels::{
        chunk::chunk_generation::NetherGenerator,
        position::{DimensionId, VerticalBounds},
        world::SimWorld,
    },
    Highlighter,
};

pub mod config;
pub mod core;
pub mod highlighter_state;

/// Config file read by `run` from the working directory.
pub const CONFIG_FILE_NAME: &str = "highlighter.json";

/// Seed of the demo world.
const DEMO_SEED: u64 = 0x51AB_2024;
/// Ticks the demo simulates.
const DEMO_TICKS: usize = 200;
/// Chunk radius of the generated demo region.
const DEMO_WORLD_RADIUS: i32 = 8;

/// Runs the demo: a walk through a generated nether region with the highlighter attached.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = HighlighterConfig::load_or_default(CONFIG_FILE_NAME);

    let generator = NetherGenerator::new(DEMO_SEED);
    let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 128));
    world.generate_square(Point2::new(0, 0), DEMO_WORLD_RADIUS, &generator);
    info!(
        "Generated {} chunks holding {} {:?} blocks",
        world.loaded_chunk_count(),
        world.count_of(config.target_block),
        config.target_block
    );

    let mut client = SimClient::new(world, Point3::new(0.5, 64.0, 0.5));
    client.register(Highlighter::new(config));

    // Walk east at sprint speed; one block every ~3.5 ticks.
    let stride = Vector3::new(0.28, 0.0, 0.0);
    for _ in 0..DEMO_TICKS {
        let summary = client.step();
        for outcome in &summary.outcomes {
            match outcome {
                RefreshOutcome::Refreshed { reason, found, .. } => info!(
                    "tick {}: rescanned ({}), {} matches, {} vertices drawn",
                    summary.tick, reason, found, summary.vertices
                ),
                RefreshOutcome::Cleared { reason } => {
                    info!("tick {}: cleared ({})", summary.tick, reason)
                }
                RefreshOutcome::Fresh => {}
            }
        }
        client.move_observer_by(stride);
    }

    info!(
        "Finished at tick {} with observer at {:?}",
        client.tick(),
        client.observer().position
    );
}
