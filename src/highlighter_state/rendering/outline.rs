//! Wireframe cuboid geometry.
//!
//! Each highlighted block becomes the 12 edges of its unit cube, pushed outward by a small
//! epsilon so the lines do not z-fight with the block's own faces. Edges are emitted as
//! independent vertex pairs; shared corners are not deduplicated.

use crate::config::HighlighterConfig;
use crate::highlighter_state::voxels::position::BlockPos;

use super::{
    draw_command::DrawCommand,
    vertex::{LineVertex, Rgba},
};

/// Number of edges of a cuboid.
pub const EDGES_PER_BOX: usize = 12;
/// Number of vertices emitted per cuboid.
pub const VERTICES_PER_BOX: usize = EDGES_PER_BOX * 2;

/// Appearance of the outlines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OutlineStyle {
    /// Colour of every vertex.
    pub color: Rgba,
    /// Line width.
    pub thickness: f32,
    /// Outward expansion on every face.
    pub epsilon: f64,
}

impl OutlineStyle {
    /// Extracts the outline settings from the config.
    pub fn from_config(config: &HighlighterConfig) -> Self {
        OutlineStyle {
            color: config.outline_color,
            thickness: config.outline_thickness,
            epsilon: config.outline_epsilon,
        }
    }
}

/// Axis-aligned box corners of the expanded outline around `pos`, relative to `anchor`.
///
/// The offset is taken in integers and expanded in `f64` before narrowing, so the epsilon
/// survives at any distance from the world origin as long as `anchor` is near `pos`.
pub fn outline_bounds(pos: BlockPos, anchor: BlockPos, epsilon: f64) -> ([f32; 3], [f32; 3]) {
    let offset = [
        (pos.x as i64 - anchor.x as i64) as f64,
        (pos.y as i64 - anchor.y as i64) as f64,
        (pos.z as i64 - anchor.z as i64) as f64,
    ];
    let min = offset.map(|o| (o - epsilon) as f32);
    let max = offset.map(|o| (o + 1.0 + epsilon) as f32);
    (min, max)
}

/// The 12 edges of the box spanned by `min` and `max`.
///
/// Order: the four bottom edges, the four top edges, then the four verticals.
pub fn box_edges(min: [f32; 3], max: [f32; 3]) -> [([f32; 3], [f32; 3]); EDGES_PER_BOX] {
    let [x0, y0, z0] = min;
    let [x1, y1, z1] = max;
    [
        // Bottom face
        ([x0, y0, z0], [x1, y0, z0]),
        ([x1, y0, z0], [x1, y0, z1]),
        ([x1, y0, z1], [x0, y0, z1]),
        ([x0, y0, z1], [x0, y0, z0]),
        // Top face
        ([x0, y1, z0], [x1, y1, z0]),
        ([x1, y1, z0], [x1, y1, z1]),
        ([x1, y1, z1], [x0, y1, z1]),
        ([x0, y1, z1], [x0, y1, z0]),
        // Vertical edges
        ([x0, y0, z0], [x0, y1, z0]),
        ([x1, y0, z0], [x1, y1, z0]),
        ([x1, y0, z1], [x1, y1, z1]),
        ([x0, y0, z1], [x0, y1, z1]),
    ]
}

/// Unit vector pointing from `from` to `to`.
fn edge_normal(from: [f32; 3], to: [f32; 3]) -> [f32; 3] {
    let d = [to[0] - from[0], to[1] - from[1], to[2] - from[2]];
    let length = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
    if length == 0.0 {
        return [0.0, 1.0, 0.0];
    }
    [d[0] / length, d[1] / length, d[2] / length]
}

/// Appends the vertices of one block outline to `commands`.
///
/// Vertex positions are relative to `anchor`, the cell the pass is translated to.
pub fn push_block_outline(
    commands: &mut Vec<DrawCommand>,
    pos: BlockPos,
    anchor: BlockPos,
    style: &OutlineStyle,
) {
    let (min, max) = outline_bounds(pos, anchor, style.epsilon);
    for (from, to) in box_edges(min, max) {
        let normal = edge_normal(from, to);
        commands.push(DrawCommand::Vertex(LineVertex::new(from, style.color, normal)));
        commands.push(DrawCommand::Vertex(LineVertex::new(to, style.color, normal)));
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;

    fn style() -> OutlineStyle {
        OutlineStyle::from_config(&HighlighterConfig::default())
    }

    #[test]
    fn bounds_are_expanded_by_epsilon() {
        let (min, max) = outline_bounds(Point3::new(10, -5, 0), Point3::new(0, 0, 0), 0.25);
        assert_eq!(min, [9.75, -5.25, -0.25]);
        assert_eq!(max, [11.25, -3.75, 1.25]);
    }

    #[test]
    fn expansion_survives_far_from_origin() {
        for x in [200_000, 3_000_000, -3_000_000] {
            let pos = Point3::new(x, 64, 0);
            let anchor = Point3::new(x - 2, 65, 1);
            let (min, max) = outline_bounds(pos, anchor, 0.002);

            assert!(min[0] < 2.0 && min[0] > 1.99);
            assert!(max[0] > 3.0 && max[0] < 3.01);
            assert!(min[1] < -1.0);
            assert!(max[2] > 0.0);
        }
    }

    #[test]
    fn every_edge_is_axis_aligned_with_unit_normal() {
        for (from, to) in box_edges([0.0; 3], [1.0; 3]) {
            let changed = (0..3).filter(|&i| from[i] != to[i]).count();
            assert_eq!(changed, 1);

            let n = edge_normal(from, to);
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn one_block_emits_twenty_four_vertices_in_outline_color() {
        let mut commands = Vec::new();
        push_block_outline(&mut commands, Point3::new(0, 64, 0), Point3::new(0, 65, 0), &style());

        assert_eq!(commands.len(), VERTICES_PER_BOX);
        for command in &commands {
            match command {
                DrawCommand::Vertex(vertex) => assert_eq!(vertex.color, [1.0, 1.0, 1.0, 0.9]),
                other => panic!("Expected vertex, got {:?}", other),
            }
        }
    }

    #[test]
    fn edge_pairs_share_their_normal() {
        let mut commands = Vec::new();
        push_block_outline(&mut commands, Point3::new(3, 3, 3), Point3::new(0, 0, 0), &style());

        for pair in commands.chunks(2) {
            match (pair[0], pair[1]) {
                (DrawCommand::Vertex(a), DrawCommand::Vertex(b)) => assert_eq!(a.normal, b.normal),
                other => panic!("Expected vertex pair, got {:?}", other),
            }
        }
    }
}
