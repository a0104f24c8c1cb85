//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{DrawCommand, Frame};
use super::vertex::{Color, Vertex};

const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 96;

/// Enough segments that edges stay smooth at the given radius
pub fn segments_for(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangles for every shape in the frame, in draw order (canvas space)
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in &frame.commands {
        if let DrawCommand::Circle {
            center,
            diameter,
            color,
        } = command
        {
            let radius = diameter / 2.0;
            // Zero-size splashes and fully faded fills contribute nothing
            if radius <= 0.0 || color[3] <= 0.0 {
                continue;
            }
            vertices.extend(circle(*center, radius, *color, segments_for(radius)));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::new(5.0, 5.0), 10.0, colors::BALL, 16);
        assert_eq!(verts.len(), 48);
        assert_eq!(verts[0].position, [5.0, 5.0]);
        assert!((verts[1].position[0] - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_segments_clamped() {
        assert_eq!(segments_for(1.0), MIN_SEGMENTS);
        assert_eq!(segments_for(1000.0), MAX_SEGMENTS);
    }

    #[test]
    fn test_frame_vertices_skip_empty() {
        let frame = Frame {
            commands: vec![
                DrawCommand::Clear(colors::BACKGROUND),
                DrawCommand::Circle {
                    center: Vec2::ZERO,
                    diameter: 0.0,
                    color: colors::BALL,
                },
                DrawCommand::Circle {
                    center: Vec2::ZERO,
                    diameter: 30.0,
                    color: colors::BALL,
                },
            ],
        };
        let verts = frame_vertices(&frame);
        assert_eq!(verts.len(), (segments_for(15.0) * 3) as usize);
    }
}
