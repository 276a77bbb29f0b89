use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::ViewerConfig;
use crate::controllers::view::{ControllerOptions, InputSink, ViewController};
use crate::errors::ViewerError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::command::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> GuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs the viewer until it is closed.
    ///
    /// Each iteration polls input, applies it to the view, then renders and
    /// presents one frame with the updated view.
    pub fn run(&self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    self.config.initial_width,
                    self.config.initial_height,
                ))
                .with_min_inner_size(LogicalSize::new(
                    self.config.min_width,
                    self.config.min_height,
                ))
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, &self.config)?;
        let size = window.inner_size();
        let controller = ViewController::for_window(
            size.width,
            size.height,
            ControllerOptions::from(&self.config),
        );
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut failure: Option<ViewerError> = None;

        info!(
            "viewer started at {}x{} using {}",
            size.width,
            size.height,
            app.backend_name()
        );

        event_loop.run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    // Forward event to egui first
                    let (egui_consumed, _) = app.handle_window_event(window, event);

                    let outcome = match event {
                        WindowEvent::CloseRequested => {
                            app.controller.close_requested();
                            Ok(())
                        }
                        WindowEvent::RedrawRequested => {
                            let egui_output = app.update_ui(window);

                            app.egui_state
                                .handle_platform_output(window, egui_output.platform_output.clone());

                            app.render(egui_output)
                        }
                        WindowEvent::Resized(size) => app.resize(size.width, size.height),
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            // Get the new physical size after scale factor change
                            let size = window.inner_size();
                            app.resize(size.width, size.height)
                        }
                        _ => {
                            app.dispatch_input(event, egui_consumed);
                            Ok(())
                        }
                    };

                    if let Err(e) = outcome {
                        error!("Render error: {e}");
                        failure = Some(e);
                        elwt.exit();
                    }

                    if app.controller.quit_requested() {
                        elwt.exit();
                    }
                }
                Event::AboutToWait => {
                    // Continuous rendering: the view is republished every frame.
                    window.request_redraw();
                }
                _ => {}
            }
        })?;

        info!("viewer closed");

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
