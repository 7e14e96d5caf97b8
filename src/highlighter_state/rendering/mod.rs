//! # Outline Rendering
//!
//! Turns the cached block positions into line geometry once per frame.
//!
//! ## Key Components
//!
//! * `OutlineRenderer` - Produces the frame's `DrawCommand` list and replays it on a surface
//! * `draw_command` - The command list and the render state it manipulates
//! * `outline` - Cuboid edge geometry
//! * `vertex` - The line vertex and colour types
//! * `recording_surface` - An in-memory `RenderSurface` for the reference host
//!
//! ## Render State
//!
//! The pass pushes a camera translation, sets its line width, enables blending, and disables
//! culling and depth writes. Every one of those changes is undone at the end of the same
//! command list, in reverse order, using the values captured before the pass began.
//!
//! The negative camera position is split in two. Its whole-block part is folded into the
//! vertices, which are emitted relative to the camera's cell, and only the sub-block remainder
//! is pushed as the translation. Vertex coordinates therefore stay small enough for `f32` to
//! hold the outline epsilon anywhere in the world.

use log::trace;

use crate::config::HighlighterConfig;

use super::{
    cache::BlockCache,
    host::{FrameContext, RenderSurface},
    voxels::position::{block_pos_of, DimensionId},
};
use draw_command::{DrawCommand, RenderState};
use outline::{push_block_outline, OutlineStyle, VERTICES_PER_BOX};

pub mod draw_command;
pub mod outline;
pub mod recording_surface;
pub mod vertex;

/// Builds the outline pass for a frame.
pub struct OutlineRenderer {
    style: OutlineStyle,
    restrict_dimension: Option<DimensionId>,
}

impl OutlineRenderer {
    /// Creates a renderer from the outline and dimension settings in `config`.
    pub fn new(config: &HighlighterConfig) -> Self {
        OutlineRenderer {
            style: OutlineStyle::from_config(config),
            restrict_dimension: config.restrict_dimension.clone(),
        }
    }

    /// Produces the commands that draw outlines for every cached position.
    ///
    /// # Arguments
    /// * `cache` - The current cache
    /// * `frame` - Camera and observer information for this frame
    /// * `prior` - Render state before the pass; the pass ends by restoring it
    ///
    /// # Returns
    /// An empty list if the observer is outside the restricted dimension or the cache is
    /// empty. Otherwise a self-contained pass with `24 * N` vertices for `N` positions.
    pub fn render(
        &self,
        cache: &BlockCache,
        frame: &FrameContext,
        prior: RenderState,
    ) -> Vec<DrawCommand> {
        if let Some(dimension) = &self.restrict_dimension {
            if frame.observer_dimension != *dimension {
                return Vec::new();
            }
        }

        let positions = cache.positions();
        if positions.is_empty() {
            return Vec::new();
        }

        let camera = frame.camera_position;
        let anchor = block_pos_of(camera);
        let mut commands = Vec::with_capacity(positions.len() * VERTICES_PER_BOX + 12);

        commands.push(DrawCommand::PushTranslation([
            anchor.x as f64 - camera.x,
            anchor.y as f64 - camera.y,
            anchor.z as f64 - camera.z,
        ]));
        commands.push(DrawCommand::SetLineWidth(self.style.thickness));
        commands.push(DrawCommand::SetBlend(true));
        commands.push(DrawCommand::SetCull(false));
        commands.push(DrawCommand::SetDepthWrite(false));

        commands.push(DrawCommand::BeginLines);
        for pos in positions {
            push_block_outline(&mut commands, *pos, anchor, &self.style);
        }
        commands.push(DrawCommand::EndLines);

        commands.push(DrawCommand::SetDepthWrite(prior.depth_write));
        commands.push(DrawCommand::SetCull(prior.cull));
        commands.push(DrawCommand::SetBlend(prior.blend));
        commands.push(DrawCommand::SetLineWidth(prior.line_width));
        commands.push(DrawCommand::PopTranslation);

        commands
    }

    /// Renders the pass and replays it onto `surface`.
    ///
    /// # Returns
    /// The number of vertices submitted.
    pub fn draw<S: RenderSurface + ?Sized>(
        &self,
        cache: &BlockCache,
        frame: &FrameContext,
        surface: &mut S,
    ) -> usize {
        let commands = self.render(cache, frame, surface.render_state());
        draw_command::replay(&commands, surface);

        let vertices = draw_command::vertex_count(&commands);
        trace!("Outline pass submitted {} vertices", vertices);
        vertices
    }
}
