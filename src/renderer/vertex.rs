//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
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
    /// Play-area panel (gray-900 at half opacity over black)
    pub const PLAY_AREA: [f32; 4] = [0.07, 0.09, 0.15, 0.5];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Cyan halo under the paddle
    pub const PADDLE_GLOW: [f32; 4] = [0.02, 0.71, 0.83, 0.35];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Yellow halo around the ball
    pub const BALL_GLOW: [f32; 4] = [1.0, 0.94, 0.54, 0.35];
    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}
