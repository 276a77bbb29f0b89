use crate::controllers::view::commands::{PointerButton, ViewCommand};
use crate::core::data::screen_point::ScreenPoint;

/// Receives input events from the windowing layer, one method per event kind.
///
/// Events arrive on the thread that owns the sink, strictly in order and
/// interleaved with frame rendering.
pub trait InputSink {
    /// A bound key was pressed. `repeat` marks OS key-repeat deliveries.
    fn key_pressed(&mut self, command: ViewCommand, repeat: bool);
    fn pointer_pressed(&mut self, button: PointerButton);
    fn pointer_released(&mut self, button: PointerButton);
    fn cursor_moved(&mut self, position: ScreenPoint);
    /// Wheel motion; only the vertical component is used.
    fn scrolled(&mut self, vertical_delta: f64);
    fn resized(&mut self, width: u32, height: u32);
    fn close_requested(&mut self);
}
