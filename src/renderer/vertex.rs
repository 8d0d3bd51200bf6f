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
    /// Asphalt (#555)
    pub const ROAD: [f32; 4] = [0.333, 0.333, 0.333, 1.0];
    /// Dashed center line, half transparent
    pub const ROAD_LINE: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    /// Player body (#007bff)
    pub const PLAYER: [f32; 4] = [0.0, 0.482, 1.0, 1.0];
    /// Headlights (#ffdd00)
    pub const HEADLIGHT: [f32; 4] = [1.0, 0.867, 0.0, 1.0];
    /// Oncoming cars (#dc3545)
    pub const OBSTACLE: [f32; 4] = [0.863, 0.208, 0.271, 1.0];
}
