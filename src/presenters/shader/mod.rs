//! GPU rendering collaborator: the WGSL escape-time shader and its pipeline.

pub mod pipeline;
pub mod uniforms;

pub use pipeline::MandelbrotPipeline;
pub use uniforms::GpuViewUniforms;
