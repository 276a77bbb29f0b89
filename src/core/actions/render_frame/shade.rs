use crate::core::data::colour::Rgb;
use crate::core::fractals::mandelbrot::{cubic_ramp, escape_fraction};
use crate::core::view::uniforms::ViewUniforms;

/// Renderer settings that are fixed for the lifetime of the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeOptions {
    pub escape_radius_squared: f64,
    /// Width of the solid white strip at the left edge; `0` disables it.
    pub legend_strip_width: u32,
}

/// Colours the pixel at `column`, `row` of a top-down RGBA frame exactly as
/// the fragment shader colours the same framebuffer pixel.
#[must_use]
pub fn shade_pixel(column: u32, row: u32, uniforms: &ViewUniforms, options: &ShadeOptions) -> [u8; 4] {
    let fragment_x = f64::from(column) + 0.5;

    if fragment_x < f64::from(options.legend_strip_width) {
        return Rgb::WHITE.to_rgba8();
    }

    let fragment_y = uniforms.screen_size[1] - (f64::from(row) + 0.5);
    let c = uniforms.fractal_point_at(fragment_x, fragment_y);
    let iterations = uniforms.iterations.max(0) as u32;
    let t = escape_fraction(c, iterations, options.escape_radius_squared);

    cubic_ramp(t as f32).to_rgba8()
}
