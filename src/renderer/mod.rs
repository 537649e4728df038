//! WebGPU rendering module
//!
//! `scene` turns a simulation snapshot into a triangle list in playfield
//! coordinates; `pipeline` uploads it and draws it each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, logical_to_ndc};
pub use scene::build_scene;
pub use vertex::Vertex;

/// Failures while bringing up the GPU surface
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("canvas element `{0}` not found")]
    MissingCanvas(&'static str),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
