use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::view::{PointerButton, ViewCommand};
use crate::core::view::PanDirection;

#[must_use]
pub fn command_for_key(key_code: KeyCode) -> Option<ViewCommand> {
    match key_code {
        KeyCode::Escape => Some(ViewCommand::Quit),
        KeyCode::Numpad0 => Some(ViewCommand::Reset),
        KeyCode::KeyW => Some(ViewCommand::Pan(PanDirection::Up)),
        KeyCode::KeyA => Some(ViewCommand::Pan(PanDirection::Left)),
        KeyCode::KeyS => Some(ViewCommand::Pan(PanDirection::Down)),
        KeyCode::KeyD => Some(ViewCommand::Pan(PanDirection::Right)),
        KeyCode::NumpadAdd => Some(ViewCommand::ZoomIn),
        KeyCode::NumpadSubtract => Some(ViewCommand::ZoomOut),
        KeyCode::KeyQ => Some(ViewCommand::IncreaseIterations),
        KeyCode::KeyE => Some(ViewCommand::DecreaseIterations),
        KeyCode::KeyH => Some(ViewCommand::ToggleHud),
        _ => None,
    }
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Vertical wheel motion. Only its sign matters to the controller.
#[must_use]
pub fn vertical_scroll(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

/// Bindings shown in the HUD.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("W A S D", "pan"),
    ("drag", "pan"),
    ("wheel", "zoom at cursor"),
    ("Num + / Num -", "zoom x2 / /2"),
    ("Q / E", "iterations +50 / -50"),
    ("Num 0", "reset"),
    ("H", "toggle this panel"),
    ("Esc", "quit"),
];
