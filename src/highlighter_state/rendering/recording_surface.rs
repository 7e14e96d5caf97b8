//! An in-memory `RenderSurface`.
//!
//! The reference host has no GPU. `RecordingSurface` keeps the live render state and the
//! translation stack, and stores each submitted batch so callers can inspect what a frame
//! would have drawn.

use log::warn;

use crate::highlighter_state::host::RenderSurface;

use super::{draw_command::RenderState, vertex::LineVertex};

/// Records everything drawn onto it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: RenderState,
    translations: Vec<[f64; 3]>,
    open_batch: Option<Vec<LineVertex>>,
    batches: Vec<Vec<LineVertex>>,
}

impl RecordingSurface {
    /// Creates a surface whose toggles start at `state`.
    pub fn new(state: RenderState) -> Self {
        RecordingSurface {
            state,
            ..Default::default()
        }
    }

    /// Every batch submitted since the last `clear`.
    pub fn batches(&self) -> &[Vec<LineVertex>] {
        &self.batches
    }

    /// Total vertices submitted since the last `clear`.
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    /// Current depth of the translation stack.
    pub fn translation_depth(&self) -> usize {
        self.translations.len()
    }

    /// Sum of the translations currently pushed.
    pub fn current_translation(&self) -> [f64; 3] {
        self.translations.iter().fold([0.0; 3], |acc, t| {
            [acc[0] + t[0], acc[1] + t[1], acc[2] + t[2]]
        })
    }

    /// Whether a batch has been opened and not yet submitted.
    pub fn has_open_batch(&self) -> bool {
        self.open_batch.is_some()
    }

    /// Drops recorded geometry, keeping render state and transforms.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn render_state(&self) -> RenderState {
        self.state
    }

    fn set_blend(&mut self, enabled: bool) {
        self.state.blend = enabled;
    }

    fn set_cull(&mut self, enabled: bool) {
        self.state.cull = enabled;
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.state.depth_write = enabled;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn push_translation(&mut self, offset: [f64; 3]) {
        self.translations.push(offset);
    }

    fn pop_translation(&mut self) {
        if self.translations.pop().is_none() {
            warn!("Translation stack underflow");
        }
    }

    fn begin_lines(&mut self) {
        if self.open_batch.replace(Vec::new()).is_some() {
            warn!("Line batch opened twice, discarding the first");
        }
    }

    fn vertex(&mut self, vertex: LineVertex) {
        match self.open_batch.as_mut() {
            Some(batch) => batch.push(vertex),
            None => warn!("Vertex submitted outside a line batch"),
        }
    }

    fn end_lines(&mut self) {
        if let Some(batch) = self.open_batch.take() {
            self.batches.push(batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter_state::rendering::vertex::Rgba;

    #[test]
    fn vertices_outside_a_batch_are_dropped() {
        let mut surface = RecordingSurface::default();
        let vertex = LineVertex::new([0.0; 3], Rgba::new(1.0, 1.0, 1.0, 1.0), [1.0, 0.0, 0.0]);

        surface.vertex(vertex);
        surface.begin_lines();
        surface.vertex(vertex);
        surface.end_lines();

        assert_eq!(surface.vertex_count(), 1);
        assert!(!surface.has_open_batch());
    }

    #[test]
    fn translations_accumulate() {
        let mut surface = RecordingSurface::default();
        surface.push_translation([1.0, 2.0, 3.0]);
        surface.push_translation([-1.0, 0.0, 1.0]);

        assert_eq!(surface.current_translation(), [0.0, 2.0, 4.0]);
        surface.pop_translation();
        assert_eq!(surface.translation_depth(), 1);
    }
}
