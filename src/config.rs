use crate::core::fractals::mandelbrot::DEFAULT_ESCAPE_RADIUS_SQUARED;
use crate::core::view::view_state::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Which renderer draws the fractal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBackend {
    /// Try the double-precision shader, fall back to software if the GPU refuses it.
    #[default]
    Auto,
    /// Double-precision fragment shader only; failure to set it up is fatal.
    Shader,
    /// CPU rendering into the framebuffer.
    Software,
}

impl RenderBackend {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Shader => "shader (f64)",
            Self::Software => "software (f64)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub initial_width: u32,
    pub initial_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Numpad0 restores the default view.
    pub reset_key_enabled: bool,
    /// OS key-repeat events count as presses.
    pub key_repeat_enabled: bool,
    pub backend: RenderBackend,
    pub escape_radius_squared: f64,
    /// Width in pixels of a solid white strip at the left edge; `0` disables it.
    pub legend_strip_width: u32,
    pub show_hud: bool,
    pub vsync: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: String::from("Mandelbrot Set"),
            initial_width: DEFAULT_WINDOW_WIDTH,
            initial_height: DEFAULT_WINDOW_HEIGHT,
            min_width: 200,
            min_height: 200,
            reset_key_enabled: true,
            key_repeat_enabled: false,
            backend: RenderBackend::default(),
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            legend_strip_width: 0,
            show_hud: false,
            vsync: true,
        }
    }
}
