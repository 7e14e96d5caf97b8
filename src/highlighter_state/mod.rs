//! # Highlighter State Module
//!
//! The adapter between the host's callbacks and the highlighter's two components.
//!
//! ## Key Components
//!
//! * `Highlighter` - Owns the shared cache, the refresher and the renderer
//! * `cache` - Cache storage, refresh policy and the block scanner
//! * `rendering` - Outline geometry and draw commands
//! * `host` - Traits and contexts the host provides
//! * `voxels` - Coordinates, block types and the reference host world
//! * `sim_client` - A minimal host loop driving the callbacks
//!
//! ## Architecture
//!
//! The host calls two callbacks on its single logic thread: one per simulation step and
//! one per rendered frame. Both need the cache, so it lives in an `StResource` shared by
//! the two handlers. A handler only borrows the cache for the duration of its call.

use log::info;

use crate::{config::HighlighterConfig, core::StResource};
use cache::{BlockCache, CacheRefresher, RefreshOutcome};
use host::{FrameContext, RenderSurface, TickContext, WorldView};
use rendering::OutlineRenderer;

pub mod cache;
pub mod host;
pub mod rendering;
pub mod sim_client;
pub mod voxels;

/// Callback the host invokes on each simulation step.
pub type TickHandler<W> = Box<dyn FnMut(&TickContext<'_, W>) -> RefreshOutcome>;

/// Callback the host invokes on each rendered frame. Returns the vertices submitted.
pub type RenderHandler = Box<dyn FnMut(&FrameContext, &mut dyn RenderSurface) -> usize>;

/// The highlighter: a cache of matching blocks plus the logic that fills and draws it.
///
/// # Examples
///
/// ```
/// use block_highlighter::{config::HighlighterConfig, highlighter_state::Highlighter};
///
/// let highlighter = Highlighter::new(HighlighterConfig::default());
/// assert!(highlighter.cache().get().is_empty());
/// ```
pub struct Highlighter {
    cache: StResource<BlockCache>,
    refresher: CacheRefresher,
    renderer: OutlineRenderer,
}

impl Highlighter {
    /// Creates a highlighter with an empty cache.
    pub fn new(config: HighlighterConfig) -> Self {
        info!(
            "Highlighter initialized: {:?} within {} blocks, dimension {}",
            config.target_block,
            config.range,
            config
                .restrict_dimension
                .as_ref()
                .map_or("any", |dimension| dimension.as_str())
        );

        Highlighter {
            refresher: CacheRefresher::new(&config),
            renderer: OutlineRenderer::new(&config),
            cache: StResource::new(BlockCache::new()),
        }
    }

    /// A handle to the shared cache.
    pub fn cache(&self) -> StResource<BlockCache> {
        self.cache.clone()
    }

    /// Simulation-step callback.
    pub fn on_tick<W: WorldView>(&self, ctx: &TickContext<'_, W>) -> RefreshOutcome {
        self.refresher.maybe_refresh(&mut self.cache.get_mut(), ctx)
    }

    /// Frame-render callback.
    ///
    /// # Returns
    /// The number of vertices submitted to `surface`.
    pub fn on_render<S: RenderSurface + ?Sized>(
        &self,
        frame: &FrameContext,
        surface: &mut S,
    ) -> usize {
        self.renderer.draw(&self.cache.get(), frame, surface)
    }

    /// Splits the highlighter into the two callbacks a host registers.
    ///
    /// The returned handlers share one cache; the tick handler writes it and the render
    /// handler reads it.
    pub fn into_handlers<W: WorldView + 'static>(self) -> (TickHandler<W>, RenderHandler) {
        let Highlighter {
            cache,
            refresher,
            renderer,
        } = self;

        let tick_cache = cache.clone();
        let tick: TickHandler<W> =
            Box::new(move |ctx| refresher.maybe_refresh(&mut tick_cache.get_mut(), ctx));

        let render: RenderHandler =
            Box::new(move |frame, surface| renderer.draw(&cache.get(), frame, surface));

        (tick, render)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point2, Point3};

    use super::*;
    use crate::highlighter_state::{
        host::Observer,
        rendering::{draw_command::RenderState, recording_surface::RecordingSurface},
        voxels::{
            block::block_type::BlockType,
            position::{DimensionId, VerticalBounds},
            world::SimWorld,
        },
    };

    fn two_ore_world() -> SimWorld {
        let mut world = SimWorld::new(DimensionId::nether(), VerticalBounds::new(0, 32));
        world.add_empty_chunk_at(Point2::new(0, 0));
        world.set_block_at(Point3::new(1, 1, 1), BlockType::NetherQuartzOre);
        world.set_block_at(Point3::new(2, 1, 1), BlockType::NetherQuartzOre);
        world
    }

    #[test]
    fn direct_callbacks_refresh_then_draw() {
        let world = two_ore_world();
        let highlighter = Highlighter::new(HighlighterConfig::default());
        let observer = Observer::new(Point3::new(0.0, 1.0, 0.0), DimensionId::nether());
        let ctx = |tick| TickContext {
            tick,
            observer: &observer,
            world: &world,
        };

        assert!(matches!(
            highlighter.on_tick(&ctx(0)),
            RefreshOutcome::Refreshed { found: 2, .. }
        ));
        assert_eq!(highlighter.on_tick(&ctx(1)), RefreshOutcome::Fresh);
        assert_eq!(highlighter.cache().get().len(), 2);

        let mut surface = RecordingSurface::new(RenderState::default());
        let frame = FrameContext {
            camera_position: Point3::new(0.0, 2.6, 0.0),
            observer_dimension: DimensionId::nether(),
        };
        assert_eq!(highlighter.on_render(&frame, &mut surface), 48);
        assert_eq!(surface.batches().len(), 1);

        let elsewhere = FrameContext {
            observer_dimension: DimensionId::overworld(),
            ..frame
        };
        assert_eq!(highlighter.on_render(&elsewhere, &mut surface), 0);
    }

    #[test]
    fn handlers_share_one_cache() {
        let world = two_ore_world();

        let (mut tick, mut render) =
            Highlighter::new(HighlighterConfig::default()).into_handlers::<SimWorld>();

        let observer = Observer::new(Point3::new(0.0, 1.0, 0.0), DimensionId::nether());
        tick(&TickContext {
            tick: 0,
            observer: &observer,
            world: &world,
        });

        let mut surface = RecordingSurface::new(RenderState::default());
        let frame = FrameContext {
            camera_position: Point3::new(0.0, 2.6, 0.0),
            observer_dimension: DimensionId::nether(),
        };
        assert_eq!(render(&frame, &mut surface), 48);
        assert_eq!(surface.vertex_count(), 48);
        assert_eq!(surface.render_state(), RenderState::default());
    }
}
