//! WebGPU rendering module
//!
//! Flat-colored triangles: the scene is rebuilt from a `Snapshot` every frame
//! in play-area pixels and mapped to clip space by the pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
