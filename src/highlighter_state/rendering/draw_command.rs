//! # Draw Commands
//!
//! The renderer does not call the host directly. It produces a flat list of
//! `DrawCommand`s that an adapter replays onto a `RenderSurface`. This keeps the geometry
//! and state handling testable without a host, and makes the acquire/release pairing of
//! render state visible in one place.

use crate::highlighter_state::host::RenderSurface;

use super::vertex::LineVertex;

/// The host render toggles the outline pass changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Alpha blending enabled.
    pub blend: bool,
    /// Back-face culling enabled.
    pub cull: bool,
    /// Depth-buffer writes enabled.
    pub depth_write: bool,
    /// Current line width.
    pub line_width: f32,
}

impl Default for RenderState {
    /// The state a typical host leaves between passes.
    fn default() -> Self {
        RenderState {
            blend: false,
            cull: true,
            depth_write: true,
            line_width: 1.0,
        }
    }
}

/// One call into the host's rendering API.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Enable or disable alpha blending.
    SetBlend(bool),
    /// Enable or disable back-face culling.
    SetCull(bool),
    /// Enable or disable depth writes.
    SetDepthWrite(bool),
    /// Change the line width.
    SetLineWidth(f32),
    /// Push a model-view translation.
    PushTranslation([f64; 3]),
    /// Pop the last translation.
    PopTranslation,
    /// Open a line-list batch.
    BeginLines,
    /// Append a vertex to the open batch.
    Vertex(LineVertex),
    /// Submit the open batch.
    EndLines,
}

impl DrawCommand {
    /// Issues this command against `surface`.
    pub fn apply<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        match *self {
            DrawCommand::SetBlend(enabled) => surface.set_blend(enabled),
            DrawCommand::SetCull(enabled) => surface.set_cull(enabled),
            DrawCommand::SetDepthWrite(enabled) => surface.set_depth_write(enabled),
            DrawCommand::SetLineWidth(width) => surface.set_line_width(width),
            DrawCommand::PushTranslation(offset) => surface.push_translation(offset),
            DrawCommand::PopTranslation => surface.pop_translation(),
            DrawCommand::BeginLines => surface.begin_lines(),
            DrawCommand::Vertex(vertex) => surface.vertex(vertex),
            DrawCommand::EndLines => surface.end_lines(),
        }
    }

    /// Applies this command's effect on render toggles to `state`.
    ///
    /// Geometry and transform commands leave the state untouched.
    pub fn apply_to_state(&self, state: &mut RenderState) {
        match *self {
            DrawCommand::SetBlend(enabled) => state.blend = enabled,
            DrawCommand::SetCull(enabled) => state.cull = enabled,
            DrawCommand::SetDepthWrite(enabled) => state.depth_write = enabled,
            DrawCommand::SetLineWidth(width) => state.line_width = width,
            _ => {}
        }
    }
}

/// Issues every command in order.
pub fn replay<S: RenderSurface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        command.apply(surface);
    }
}

/// Number of `Vertex` commands in `commands`.
pub fn vertex_count(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Vertex(_)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_commands_fold_into_state() {
        let mut state = RenderState::default();
        for command in [
            DrawCommand::SetBlend(true),
            DrawCommand::SetLineWidth(3.0),
            DrawCommand::BeginLines,
        ] {
            command.apply_to_state(&mut state);
        }

        assert!(state.blend);
        assert!(state.cull);
        assert_eq!(state.line_width, 3.0);
    }
}
