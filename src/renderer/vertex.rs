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
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TERRAIN: [f32; 4] = [15.0 / 255.0, 199.0 / 255.0, 91.0 / 255.0, 1.0];
    pub const CITY: [f32; 4] = [171.0 / 255.0, 88.0 / 255.0, 229.0 / 255.0, 1.0];
    pub const ENEMY_TRAIL: [f32; 4] = [1.0, 54.0 / 255.0, 54.0 / 255.0, 1.0];
    pub const PLAYER_TRAIL: [f32; 4] = [54.0 / 255.0, 251.0 / 255.0, 1.0, 1.0];
    pub const MISSILE_HEAD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EXPLOSION: [f32; 4] = [1.0, 237.0 / 255.0, 54.0 / 255.0, 1.0];
}
