//! WebGPU rendering module
//!
//! Every scene element is an axis-aligned colored quad, so a single
//! vertex-color pipeline draws the whole frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
