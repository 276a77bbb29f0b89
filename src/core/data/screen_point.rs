/// A cursor or pixel position in window coordinates.
///
/// The origin is the top-left corner of the window and `y` grows downward,
/// matching what the windowing system reports.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `other` to `self`, in pixels.
    #[must_use]
    pub fn delta_from(&self, other: ScreenPoint) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}
