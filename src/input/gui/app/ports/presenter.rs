use egui::Context as EguiContext;

use crate::core::view::ViewUniforms;
use crate::errors::ViewerError;

/// The rendering collaborator driven by the GUI loop.
pub trait GuiPresenterPort {
    /// Draws one frame of `uniforms` with the HUD overlay on top.
    fn render(
        &mut self,
        uniforms: &ViewUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), ViewerError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError>;
    fn backend_name(&self) -> &'static str;
}
