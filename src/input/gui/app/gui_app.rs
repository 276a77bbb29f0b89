use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::view::{InputSink, ViewController};
use crate::core::data::screen_point::ScreenPoint;
use crate::errors::ViewerError;
use crate::input::gui::app::hud::{HudSnapshot, show_hud};
use crate::input::gui::app::key_bindings::{command_for_key, pointer_button, vertical_scroll};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: ViewController,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ViewController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            scale_factor,
            presenter,
            controller,
            egui_ctx,
            egui_state,
        }
    }

    /// Publishes the current view to the presenter and draws one frame.
    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), ViewerError> {
        let uniforms = self.controller.uniforms();
        self.presenter.render(&uniforms, egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        self.controller.resized(width, height);
        self.presenter.resize(width, height)
    }

    pub fn backend_name(&self) -> &'static str {
        self.presenter.backend_name()
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let hud = self
            .controller
            .hud_visible()
            .then(|| HudSnapshot::capture(&self.controller, self.presenter.backend_name()));

        self.egui_ctx.run(raw_input, |ctx| {
            if let Some(snapshot) = &hud {
                show_hud(ctx, snapshot);
            }
        })
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Forwards an input event to the controller.
    ///
    /// Presses and wheel motion that egui consumed stay with egui. Releases and
    /// cursor motion always reach the controller so a drag cannot get stuck.
    pub fn dispatch_input(&mut self, event: &WindowEvent, egui_consumed: bool) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat,
                        ..
                    },
                ..
            } if !egui_consumed => {
                if let Some(command) = command_for_key(*key_code) {
                    self.controller.key_pressed(command, *repeat);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } if !egui_consumed => {
                self.controller.pointer_pressed(pointer_button(*button));
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } => {
                self.controller.pointer_released(pointer_button(*button));
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.controller
                    .cursor_moved(ScreenPoint::new(position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                self.controller.scrolled(vertical_scroll(*delta));
            }
            _ => {}
        }
    }
}
