use crate::core::data::complex::Complex;

/// The per-frame snapshot of the view that the renderer consumes.
///
/// Coordinates passed to [`ViewUniforms::fractal_point_at`] follow the shader
/// convention: origin at the bottom-left of the framebuffer, `y` growing upward,
/// pixel centres at half-integer positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewUniforms {
    pub iterations: i32,
    pub zoom: f64,
    pub offset: [f64; 2],
    pub screen_size: [f64; 2],
}

impl ViewUniforms {
    #[must_use]
    pub fn fractal_point_at(&self, fragment_x: f64, fragment_y: f64) -> Complex {
        Complex {
            real: (fragment_x - self.screen_size[0] / 2.0) / self.zoom - self.offset[0],
            imag: (fragment_y - self.screen_size[1] / 2.0) / self.zoom - self.offset[1],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.screen_size[0] as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.screen_size[1] as u32
    }
}
