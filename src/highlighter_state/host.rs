//! # Host Interface
//!
//! The narrow contract between the highlighter and the engine it is embedded in.
//!
//! Inbound, the host calls a tick handler with a `TickContext` and a render handler with a
//! `FrameContext`. Outbound, the highlighter reads the world through `WorldView` /
//! `ChunkView` and draws through `RenderSurface`.

use cgmath::Point3;

use super::{
    rendering::{draw_command::RenderState, vertex::LineVertex},
    voxels::{
        block::block_type::BlockType,
        position::{BlockPos, ChunkPos, DimensionId, VerticalBounds},
    },
};

/// Read access to a single loaded chunk.
pub trait ChunkView {
    /// The chunk's coordinates.
    fn position(&self) -> ChunkPos;

    /// The block type at a world position inside this chunk.
    ///
    /// Positions outside the chunk should read as `BlockType::Air`.
    fn block_type_at(&self, pos: BlockPos) -> BlockType;
}

/// Read access to the world the observer is currently in.
pub trait WorldView {
    /// The host's chunk handle.
    type Chunk: ChunkView;

    /// The dimension this world belongs to.
    fn dimension(&self) -> &DimensionId;

    /// The world's build height range.
    fn vertical_bounds(&self) -> VerticalBounds;

    /// Returns the chunk at `pos` if the host currently has it loaded.
    fn chunk_at(&self, pos: ChunkPos) -> Option<&Self::Chunk>;
}

/// The host's line-drawing API.
///
/// Every setter changes live render state; the highlighter restores each one it touches.
pub trait RenderSurface {
    /// Snapshot of the toggles the highlighter may change.
    fn render_state(&self) -> RenderState;

    /// Enables or disables alpha blending (with the default blend function).
    fn set_blend(&mut self, enabled: bool);

    /// Enables or disables back-face culling.
    fn set_cull(&mut self, enabled: bool);

    /// Enables or disables depth-buffer writes.
    fn set_depth_write(&mut self, enabled: bool);

    /// Sets the rasterised line width.
    fn set_line_width(&mut self, width: f32);

    /// Pushes a translation onto the model-view stack.
    fn push_translation(&mut self, offset: [f64; 3]);

    /// Pops the most recent translation.
    fn pop_translation(&mut self);

    /// Starts a line-list batch.
    fn begin_lines(&mut self);

    /// Appends one vertex to the open batch.
    fn vertex(&mut self, vertex: LineVertex);

    /// Submits the open batch.
    fn end_lines(&mut self);
}

/// The entity the scan is centred on.
#[derive(Clone, Debug, PartialEq)]
pub struct Observer {
    /// Continuous world position.
    pub position: Point3<f64>,
    /// The dimension the observer is in.
    pub dimension: DimensionId,
}

impl Observer {
    /// Creates an observer.
    pub fn new(position: Point3<f64>, dimension: DimensionId) -> Self {
        Observer {
            position,
            dimension,
        }
    }
}

/// Everything the tick handler receives on one simulation step.
pub struct TickContext<'a, W> {
    /// Host world time, in ticks.
    pub tick: u64,
    /// The observer's current state.
    pub observer: &'a Observer,
    /// The observer's current world.
    pub world: &'a W,
}

/// Everything the render handler receives for one frame.
#[derive(Clone, Debug)]
pub struct FrameContext {
    /// Camera position in world space.
    pub camera_position: Point3<f64>,
    /// The dimension the observer is in this frame.
    pub observer_dimension: DimensionId,
}
