//! Vertex data structures for outline rendering.
//!
//! This module defines the line vertex handed to the host's line pipeline and the colour
//! type used for outlines.

use serde::Deserialize;

/// A straight-alpha RGBA colour with components in `[0, 1]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Rgba {
    /// Creates a colour from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Whether every component lies within `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// The components as an array, in RGBA order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A vertex in the host's line pipeline.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Color: [f32; 4] (16 bytes)
/// - Normal: [f32; 3] (12 bytes)
///
/// Total size: 40 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Position in world space. The camera translation is applied by the surface.
    pub position: [f32; 3],
    /// Vertex colour.
    pub color: [f32; 4],
    /// Unit direction of the edge this vertex belongs to. The line pipeline uses it to
    /// orient the quad it expands the line into; it is not a surface normal.
    pub normal: [f32; 3],
}

impl LineVertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - Endpoint position in world space
    /// * `color` - Colour of the line
    /// * `normal` - Direction of the edge, already normalised
    pub fn new(position: [f32; 3], color: Rgba, normal: [f32; 3]) -> Self {
        LineVertex {
            position,
            color: color.to_array(),
            normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 40);
        let color = Rgba::new(1.0, 1.0, 1.0, 0.9);
        let vertex = LineVertex::new([1.0, 2.0, 3.0], color, [0.0, 1.0, 0.0]);
        assert_eq!(bytemuck::bytes_of(&vertex).len(), 40);
    }

    #[test]
    fn normalized_check_rejects_negative_alpha() {
        assert!(Rgba::new(0.0, 0.5, 1.0, 1.0).is_normalized());
        assert!(!Rgba::new(0.0, 0.5, 1.0, -0.1).is_normalized());
    }
}
