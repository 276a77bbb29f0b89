use bytemuck::{Pod, Zeroable};

use crate::core::actions::render_frame::ShadeOptions;
use crate::core::view::ViewUniforms;

/// Byte layout of the shader's `ViewUniforms` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuViewUniforms {
    pub screen_size: [f64; 2],
    pub offset: [f64; 2],
    pub zoom: f64,
    pub escape_radius_squared: f64,
    pub iterations: i32,
    pub legend_strip_width: u32,
    pub linearize_output: u32,
    _padding: u32,
}

impl GpuViewUniforms {
    #[must_use]
    pub fn new(uniforms: &ViewUniforms, options: &ShadeOptions, linearize_output: bool) -> Self {
        Self {
            screen_size: uniforms.screen_size,
            offset: uniforms.offset,
            zoom: uniforms.zoom,
            escape_radius_squared: options.escape_radius_squared,
            iterations: uniforms.iterations,
            legend_strip_width: options.legend_strip_width,
            linearize_output: u32::from(linearize_output),
            _padding: 0,
        }
    }
}
