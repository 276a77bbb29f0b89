use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::uniforms::ViewUniforms;

pub const DEFAULT_ZOOM: f64 = 100.0;
pub const DEFAULT_ITERATIONS: u32 = 200;
pub const MIN_ITERATIONS: u32 = 50;
pub const ITERATION_STEP: u32 = 50;
/// The shader's loop bound is a signed 32-bit integer.
pub const MAX_ITERATIONS: u32 = i32::MAX as u32;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

const KEY_PAN_PIXELS: f64 = 20.0;
const KEY_ZOOM_FACTOR: f64 = 2.0;
const SCROLL_ZOOM_FACTOR: f64 = 1.2;
/// Decrements at or below this value land on the floor instead.
const ITERATION_DECREMENT_THRESHOLD: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStateError {
    NonPositiveZoom { zoom: f64 },
    IterationsBelowMinimum { iterations: u32 },
    ZeroWindowSize { width: u32, height: u32 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
            Self::IterationsBelowMinimum { iterations } => {
                write!(
                    f,
                    "iterations must be at least {}, got {}",
                    MIN_ITERATIONS, iterations
                )
            }
            Self::ZeroWindowSize { width, height } => {
                write!(f, "window size must be non-zero, got {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Direction of a keyboard pan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    /// `A`: shifts the origin right, revealing more of the plane on the left.
    Left,
    /// `D`
    Right,
    /// `W`
    Up,
    /// `S`
    Down,
}

/// The mutable view parameters shared between input handling and rendering.
///
/// `zoom` is in screen pixels per fractal unit and is always finite and
/// positive. `iterations` never drops below [`MIN_ITERATIONS`]. The window
/// dimensions are never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    iterations: u32,
    window_width: u32,
    window_height: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset_x: 0.0,
            offset_y: 0.0,
            iterations: DEFAULT_ITERATIONS,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl ViewState {
    pub fn new(
        zoom: f64,
        offset: (f64, f64),
        iterations: u32,
        window_width: u32,
        window_height: u32,
    ) -> Result<Self, ViewStateError> {
        if !is_valid_zoom(zoom) {
            return Err(ViewStateError::NonPositiveZoom { zoom });
        }

        if iterations < MIN_ITERATIONS {
            return Err(ViewStateError::IterationsBelowMinimum { iterations });
        }

        if window_width == 0 || window_height == 0 {
            return Err(ViewStateError::ZeroWindowSize {
                width: window_width,
                height: window_height,
            });
        }

        Ok(Self {
            zoom,
            offset_x: offset.0,
            offset_y: offset.1,
            iterations,
            window_width,
            window_height,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Restores the default view. The window size is left alone.
    pub fn reset(&mut self) {
        self.iterations = DEFAULT_ITERATIONS;
        self.zoom = DEFAULT_ZOOM;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    pub fn pan(&mut self, direction: PanDirection) {
        let step = KEY_PAN_PIXELS / self.zoom;

        match direction {
            PanDirection::Left => self.offset_x += step,
            PanDirection::Right => self.offset_x -= step,
            PanDirection::Up => self.offset_y -= step,
            PanDirection::Down => self.offset_y += step,
        }
    }

    /// Doubles the zoom around the fractal-space origin.
    pub fn zoom_in(&mut self) {
        self.try_set_zoom(self.zoom * KEY_ZOOM_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.try_set_zoom(self.zoom / KEY_ZOOM_FACTOR);
    }

    pub fn increase_iterations(&mut self) {
        self.iterations = self
            .iterations
            .saturating_add(ITERATION_STEP)
            .min(MAX_ITERATIONS);
    }

    /// Steps down by [`ITERATION_STEP`] while above 100, otherwise lands on the floor.
    pub fn decrease_iterations(&mut self) {
        self.iterations = if self.iterations > ITERATION_DECREMENT_THRESHOLD {
            self.iterations - ITERATION_STEP
        } else {
            MIN_ITERATIONS
        };
    }

    /// Moves the view by a screen-space drag delta. Screen `y` grows downward
    /// while fractal `y` grows upward, hence the sign flip.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.zoom;
        self.offset_y += -dy / self.zoom;
    }

    /// Zooms by one scroll notch while keeping the fractal point under `cursor` fixed.
    ///
    /// A negative delta zooms out, a positive one zooms in, and zero does nothing.
    pub fn zoom_at(&mut self, cursor: ScreenPoint, scroll_delta: f64) {
        if scroll_delta == 0.0 {
            return;
        }

        let new_zoom = if scroll_delta < 0.0 {
            self.zoom / SCROLL_ZOOM_FACTOR
        } else {
            self.zoom * SCROLL_ZOOM_FACTOR
        };

        if !is_valid_zoom(new_zoom) {
            return;
        }

        let (centred_x, centred_y) = self.centred_screen_coords(cursor);

        // Move the point under the cursor to the origin, rescale, then move it back.
        let dx = centred_x / self.zoom - self.offset_x;
        let dy = centred_y / self.zoom - self.offset_y;
        self.offset_x = -dx;
        self.offset_y = -dy;

        self.zoom = new_zoom;

        self.offset_x += centred_x / self.zoom;
        self.offset_y += centred_y / self.zoom;
    }

    /// Stores the new framebuffer size. Zero-sized (minimised) windows are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        self.window_width = width;
        self.window_height = height;
        true
    }

    /// The fractal-space point currently drawn under `cursor`.
    #[must_use]
    pub fn fractal_point_at(&self, cursor: ScreenPoint) -> Complex {
        let (centred_x, centred_y) = self.centred_screen_coords(cursor);

        Complex {
            real: centred_x / self.zoom - self.offset_x,
            imag: centred_y / self.zoom - self.offset_y,
        }
    }

    #[must_use]
    pub fn uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            iterations: self.iterations.min(MAX_ITERATIONS) as i32,
            zoom: self.zoom,
            offset: [self.offset_x, self.offset_y],
            screen_size: [
                f64::from(self.window_width),
                f64::from(self.window_height),
            ],
        }
    }

    /// Cursor position relative to the window centre, with `y` flipped to grow upward.
    fn centred_screen_coords(&self, cursor: ScreenPoint) -> (f64, f64) {
        let width = f64::from(self.window_width);
        let height = f64::from(self.window_height);

        (
            cursor.x - width / 2.0,
            height - cursor.y - height / 2.0,
        )
    }

    fn try_set_zoom(&mut self, zoom: f64) -> bool {
        if !is_valid_zoom(zoom) {
            return false;
        }

        self.zoom = zoom;
        true
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= EPSILON * scale,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn view(zoom: f64, offset: (f64, f64), iterations: u32) -> ViewState {
        ViewState::new(zoom, offset, iterations, 800, 600).unwrap()
    }

    #[test]
    fn test_default_view_matches_startup_parameters() {
        let state = ViewState::default();

        assert_eq!(state.zoom(), 100.0);
        assert_eq!(state.offset(), (0.0, 0.0));
        assert_eq!(state.iterations(), 200);
        assert_eq!(state.window_size(), (800, 600));
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        assert_eq!(
            ViewState::new(0.0, (0.0, 0.0), 200, 800, 600),
            Err(ViewStateError::NonPositiveZoom { zoom: 0.0 })
        );
        assert!(ViewState::new(f64::NAN, (0.0, 0.0), 200, 800, 600).is_err());
        assert_eq!(
            ViewState::new(1.0, (0.0, 0.0), 49, 800, 600),
            Err(ViewStateError::IterationsBelowMinimum { iterations: 49 })
        );
        assert_eq!(
            ViewState::new(1.0, (0.0, 0.0), 200, 0, 600),
            Err(ViewStateError::ZeroWindowSize {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn test_pan_moves_one_axis_by_twenty_pixels_worth() {
        for zoom in [0.5, 3.0, 100.0, 123_456.789] {
            let mut state = view(zoom, (1.0, -2.0), 200);
            let step = 20.0 / zoom;

            state.pan(PanDirection::Left);
            assert_eq!(state.offset(), (1.0 + step, -2.0));

            let mut state = view(zoom, (1.0, -2.0), 200);
            state.pan(PanDirection::Right);
            assert_eq!(state.offset(), (1.0 - step, -2.0));

            let mut state = view(zoom, (1.0, -2.0), 200);
            state.pan(PanDirection::Up);
            assert_eq!(state.offset(), (1.0, -2.0 - step));

            let mut state = view(zoom, (1.0, -2.0), 200);
            state.pan(PanDirection::Down);
            assert_eq!(state.offset(), (1.0, -2.0 + step));
        }
    }

    #[test]
    fn test_key_zoom_is_exactly_invertible() {
        for zoom in [100.0, 0.1, 7.3, 1e-200, 1e200] {
            let mut state = view(zoom, (0.0, 0.0), 200);
            state.zoom_in();
            state.zoom_out();
            assert_eq!(state.zoom(), zoom);

            state.zoom_out();
            state.zoom_in();
            assert_eq!(state.zoom(), zoom);
        }
    }

    #[test]
    fn test_key_zoom_does_not_touch_offset() {
        let mut state = view(100.0, (0.3, 0.7), 200);

        state.zoom_in();

        assert_eq!(state.zoom(), 200.0);
        assert_eq!(state.offset(), (0.3, 0.7));
    }

    #[test]
    fn test_zoom_never_reaches_zero_or_infinity() {
        let mut state = view(f64::MIN_POSITIVE, (0.0, 0.0), 200);
        for _ in 0..2000 {
            state.zoom_out();
        }
        assert!(state.zoom() > 0.0);

        let mut state = view(f64::MAX / 4.0, (0.0, 0.0), 200);
        for _ in 0..10 {
            state.zoom_in();
            state.zoom_at(ScreenPoint::new(10.0, 10.0), 1.0);
        }
        assert!(state.zoom().is_finite());
    }

    #[test]
    fn test_decrement_from_one_hundred_lands_on_floor() {
        let mut state = view(100.0, (0.0, 0.0), 100);

        state.decrease_iterations();

        assert_eq!(state.iterations(), 50);
    }

    #[test]
    fn test_decrement_from_one_fifty_steps_by_fifty() {
        let mut state = view(100.0, (0.0, 0.0), 150);

        state.decrease_iterations();

        assert_eq!(state.iterations(), 100);
    }

    #[test]
    fn test_decrement_below_threshold_clamps_to_exactly_fifty() {
        let mut state = view(100.0, (0.0, 0.0), 75);

        state.decrease_iterations();
        assert_eq!(state.iterations(), 50);

        state.decrease_iterations();
        assert_eq!(state.iterations(), 50);
    }

    #[test]
    fn test_increment_adds_fifty_without_a_practical_bound() {
        let mut state = view(100.0, (0.0, 0.0), 200);

        for _ in 0..1000 {
            state.increase_iterations();
        }

        assert_eq!(state.iterations(), 200 + 1000 * 50);
    }

    #[test]
    fn test_increment_saturates_at_shader_limit() {
        let mut state = view(100.0, (0.0, 0.0), MAX_ITERATIONS - 10);

        state.increase_iterations();

        assert_eq!(state.iterations(), MAX_ITERATIONS);
        assert_eq!(state.uniforms().iterations, i32::MAX);
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_window_size() {
        let mut state = ViewState::new(12.5, (3.0, -4.0), 950, 1024, 768).unwrap();

        state.reset();

        assert_eq!(state.zoom(), 100.0);
        assert_eq!(state.offset(), (0.0, 0.0));
        assert_eq!(state.iterations(), 200);
        assert_eq!(state.window_size(), (1024, 768));
    }

    #[test]
    fn test_drag_deltas_scale_by_zoom_and_flip_y() {
        let mut state = view(50.0, (1.0, 1.0), 200);

        state.pan_by_pixels(10.0, 20.0);

        assert_eq!(state.offset(), (1.0 + 10.0 / 50.0, 1.0 - 20.0 / 50.0));
    }

    #[test]
    fn test_scroll_keeps_point_under_cursor_fixed() {
        let cursors = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(123.0, 456.0),
            ScreenPoint::new(799.0, 1.0),
            ScreenPoint::new(400.0, 300.0),
        ];

        for cursor in cursors {
            for delta in [1.0, -1.0, 3.5, -0.25] {
                let mut state = view(137.0, (0.42, -1.3), 200);
                let before = state.fractal_point_at(cursor);

                state.zoom_at(cursor, delta);
                let after = state.fractal_point_at(cursor);

                assert_approx_eq(after.real, before.real);
                assert_approx_eq(after.imag, before.imag);
            }
        }
    }

    #[test]
    fn test_scroll_direction_selects_zoom_factor() {
        let mut state = view(100.0, (0.0, 0.0), 200);
        state.zoom_at(ScreenPoint::new(10.0, 10.0), 2.0);
        assert_eq!(state.zoom(), 100.0 * 1.2);

        let mut state = view(100.0, (0.0, 0.0), 200);
        state.zoom_at(ScreenPoint::new(10.0, 10.0), -2.0);
        assert_eq!(state.zoom(), 100.0 / 1.2);
    }

    #[test]
    fn test_zero_scroll_is_a_no_op() {
        let mut state = view(321.0, (0.1, 0.2), 200);
        let before = state;

        state.zoom_at(ScreenPoint::new(17.0, 599.0), 0.0);

        assert_eq!(state, before);
    }

    #[test]
    fn test_scroll_at_window_centre_leaves_offset_unchanged() {
        let mut state = view(400.0, (0.05, 0.0), 200);

        state.zoom_at(ScreenPoint::new(400.0, 300.0), 1.0);

        assert_eq!(state.zoom(), 480.0);
        assert_eq!(state.offset(), (0.05, 0.0));
    }

    #[test]
    fn test_resize_ignores_zero_dimensions() {
        let mut state = ViewState::default();

        assert!(!state.resize(0, 600));
        assert!(!state.resize(800, 0));
        assert_eq!(state.window_size(), (800, 600));

        assert!(state.resize(1920, 1080));
        assert_eq!(state.window_size(), (1920, 1080));
    }

    #[test]
    fn test_uniforms_mirror_current_state() {
        let state = ViewState::new(250.0, (0.75, -0.5), 350, 1280, 720).unwrap();

        let uniforms = state.uniforms();

        assert_eq!(uniforms.iterations, 350);
        assert_eq!(uniforms.zoom, 250.0);
        assert_eq!(uniforms.offset, [0.75, -0.5]);
        assert_eq!(uniforms.screen_size, [1280.0, 720.0]);
    }

    #[test]
    fn test_cursor_mapping_agrees_with_shader_mapping() {
        let state = ViewState::new(90.0, (0.2, 0.1), 200, 640, 480).unwrap();
        let cursor = ScreenPoint::new(100.0, 50.0);

        let from_cursor = state.fractal_point_at(cursor);
        let from_fragment = state.uniforms().fractal_point_at(100.0, 480.0 - 50.0);

        assert_approx_eq(from_cursor.real, from_fragment.real);
        assert_approx_eq(from_cursor.imag, from_fragment.imag);
    }
}
