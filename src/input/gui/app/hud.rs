use crate::controllers::view::ViewController;
use crate::input::gui::app::key_bindings::KEY_HELP;

/// What the HUD shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub zoom: f64,
    pub offset: (f64, f64),
    pub iterations: u32,
    pub window_size: (u32, u32),
    pub backend: &'static str,
}

impl HudSnapshot {
    #[must_use]
    pub fn capture(controller: &ViewController, backend: &'static str) -> Self {
        let state = controller.state();

        Self {
            zoom: state.zoom(),
            offset: state.offset(),
            iterations: state.iterations(),
            window_size: state.window_size(),
            backend,
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Zoom: {:.6e} px/unit", self.zoom),
            format!("Offset: ({:.12}, {:.12})", self.offset.0, self.offset.1),
            format!("Iterations: {}", self.iterations),
            format!("Window size: {}x{}", self.window_size.0, self.window_size.1),
            format!("Renderer: {}", self.backend),
        ]
    }
}

pub fn show_hud(ctx: &egui::Context, snapshot: &HudSnapshot) {
    egui::Window::new("Mandelbrot")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            for line in snapshot.lines() {
                ui.label(line);
            }

            ui.separator();

            egui::Grid::new("key_help").show(ui, |ui| {
                for (keys, action) in KEY_HELP {
                    ui.label(*keys);
                    ui.label(*action);
                    ui.end_row();
                }
            });
        });
}
