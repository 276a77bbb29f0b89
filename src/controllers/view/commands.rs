use crate::core::view::PanDirection;

/// A keyboard action, independent of which physical key triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Quit,
    Reset,
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    IncreaseIterations,
    DecreaseIterations,
    ToggleHud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}
