use log::debug;

use crate::config::ViewerConfig;
use crate::controllers::view::commands::{PointerButton, ViewCommand};
use crate::controllers::view::ports::input_sink::InputSink;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::{ViewState, ViewUniforms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub reset_enabled: bool,
    pub key_repeat_enabled: bool,
    pub hud_visible: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            reset_enabled: true,
            key_repeat_enabled: false,
            hud_visible: false,
        }
    }
}

impl From<&ViewerConfig> for ControllerOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            reset_enabled: config.reset_key_enabled,
            key_repeat_enabled: config.key_repeat_enabled,
            hud_visible: config.show_hud,
        }
    }
}

/// Owns the view state and applies input events to it.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    options: ControllerOptions,
    /// `None` until the first cursor event arrives.
    cursor: Option<ScreenPoint>,
    dragging: bool,
    /// Last position seen while dragging; `None` while waiting for the first motion.
    drag_anchor: Option<ScreenPoint>,
    hud_visible: bool,
    quit_requested: bool,
}

impl ViewController {
    #[must_use]
    pub fn new(state: ViewState, options: ControllerOptions) -> Self {
        Self {
            state,
            options,
            cursor: None,
            dragging: false,
            drag_anchor: None,
            hud_visible: options.hud_visible,
            quit_requested: false,
        }
    }

    /// A controller with the default view sized to the given window.
    #[must_use]
    pub fn for_window(width: u32, height: u32, options: ControllerOptions) -> Self {
        let mut state = ViewState::default();
        state.resize(width, height);

        Self::new(state, options)
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The values the renderer needs for the next frame.
    #[must_use]
    pub fn uniforms(&self) -> ViewUniforms {
        self.state.uniforms()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<ScreenPoint> {
        self.cursor
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Quit => self.quit_requested = true,
            ViewCommand::Reset => {
                if !self.options.reset_enabled {
                    return;
                }
                self.state.reset();
            }
            ViewCommand::Pan(direction) => self.state.pan(direction),
            ViewCommand::ZoomIn => self.state.zoom_in(),
            ViewCommand::ZoomOut => self.state.zoom_out(),
            ViewCommand::IncreaseIterations => self.state.increase_iterations(),
            ViewCommand::DecreaseIterations => self.state.decrease_iterations(),
            ViewCommand::ToggleHud => self.hud_visible = !self.hud_visible,
        }

        debug!(
            "{:?}: zoom={} offset={:?} iterations={}",
            command,
            self.state.zoom(),
            self.state.offset(),
            self.state.iterations()
        );
    }
}

impl InputSink for ViewController {
    fn key_pressed(&mut self, command: ViewCommand, repeat: bool) {
        if repeat && !self.options.key_repeat_enabled {
            return;
        }

        self.apply(command);
    }

    fn pointer_pressed(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            // Without a known position the anchor is set by the next motion.
            self.dragging = true;
            self.drag_anchor = self.cursor;
        }
    }

    fn pointer_released(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.dragging = false;
            self.drag_anchor = None;
        }
    }

    fn cursor_moved(&mut self, position: ScreenPoint) {
        self.cursor = Some(position);

        if !self.dragging {
            return;
        }

        if let Some(anchor) = self.drag_anchor {
            let (dx, dy) = position.delta_from(anchor);
            self.state.pan_by_pixels(dx, dy);
        }
        self.drag_anchor = Some(position);
    }

    fn scrolled(&mut self, vertical_delta: f64) {
        if vertical_delta == 0.0 {
            return;
        }

        let Some(cursor) = self.cursor else {
            debug!("scroll {} ignored: cursor position unknown", vertical_delta);
            return;
        };

        self.state.zoom_at(cursor, vertical_delta);

        debug!(
            "scroll {} at ({}, {}): zoom={} offset={:?}",
            vertical_delta,
            cursor.x,
            cursor.y,
            self.state.zoom(),
            self.state.offset()
        );
    }

    fn resized(&mut self, width: u32, height: u32) {
        if self.state.resize(width, height) {
            debug!("window resized to {}x{}", width, height);
        }
    }

    fn close_requested(&mut self) {
        self.quit_requested = true;
    }
}
