//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Linear RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Build a color from 0-255 channels
#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    [r / 255.0, g / 255.0, b / 255.0, (a / 255.0).clamp(0.0, 1.0)]
}

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    /// Sky blue (135, 206, 235)
    pub const BACKGROUND: Color = [135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0, 1.0];
    pub const BALL: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
}
