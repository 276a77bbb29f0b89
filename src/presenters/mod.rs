pub mod pixels;
pub mod shader;
