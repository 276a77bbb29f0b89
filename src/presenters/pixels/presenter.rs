use crate::config::{RenderBackend, ViewerConfig};
use crate::core::actions::render_frame::{ShadeOptions, render_frame_rayon};
use crate::core::view::ViewUniforms;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::shader::MandelbrotPipeline;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{info, warn};
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

enum Backend {
    Shader(MandelbrotPipeline),
    /// Caches the last rendered view so unchanged frames are not recomputed.
    Software { last_rendered: Option<ViewUniforms> },
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    backend: Backend,
    egui_renderer: EguiRenderer,
    shade_options: ShadeOptions,
    width: u32,
    height: u32,
}

/// Limits requested with `SHADER_F64`: downlevel everywhere except texture
/// size, which has to fit maximised and high-DPI windows.
fn shader_device_limits() -> wgpu::Limits {
    wgpu::Limits::downlevel_defaults().using_resolution(wgpu::Limits::default())
}

/// The shader draws straight to the surface, so its pixel buffer stays 1x1.
fn frame_buffer_size(uses_frame_buffer: bool, width: u32, height: u32) -> (u32, u32) {
    if uses_frame_buffer { (width, height) } else { (1, 1) }
}

fn build_pixels(
    window: &'static Window,
    vsync: bool,
    required_features: Option<wgpu::Features>,
) -> Result<Pixels<'static>, ViewerError> {
    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let (buffer_width, buffer_height) =
        frame_buffer_size(required_features.is_none(), size.width, size.height);
    let mut builder = PixelsBuilder::new(buffer_width, buffer_height, surface_texture).enable_vsync(vsync);

    if let Some(required_features) = required_features {
        builder = builder.device_descriptor(wgpu::DeviceDescriptor {
            label: Some("mandelbrot_viewer device"),
            required_features,
            required_limits: shader_device_limits(),
        });
    }

    builder.build().map_err(ViewerError::Surface)
}

fn build_shader_backend(
    window: &'static Window,
    vsync: bool,
) -> Result<(Pixels<'static>, Backend), ViewerError> {
    let pixels = build_pixels(window, vsync, Some(wgpu::Features::SHADER_F64))?;
    let pipeline = MandelbrotPipeline::new(pixels.device(), pixels.render_texture_format())?;

    Ok((pixels, Backend::Shader(pipeline)))
}

fn build_software_backend(window: &'static Window, vsync: bool) -> Result<(Pixels<'static>, Backend), ViewerError> {
    let pixels = build_pixels(window, vsync, None)?;

    Ok((pixels, Backend::Software { last_rendered: None }))
}

impl PixelsPresenter {
    /// Creates the surface and the fractal backend selected by `config.backend`.
    pub fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, ViewerError> {
        let (pixels, backend) = match config.backend {
            RenderBackend::Shader => build_shader_backend(window, config.vsync)?,
            RenderBackend::Software => build_software_backend(window, config.vsync)?,
            RenderBackend::Auto => match build_shader_backend(window, config.vsync) {
                Ok(built) => built,
                Err(error) => {
                    warn!("double-precision shader unavailable ({}), falling back to software rendering", error);
                    build_software_backend(window, config.vsync)?
                }
            },
        };

        let adapter_info = pixels.adapter().get_info();
        info!(
            "using {} on {} ({:?})",
            backend_display_name(&backend),
            adapter_info.name,
            adapter_info.backend
        );

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let size = window.inner_size();

        Ok(Self {
            pixels,
            backend,
            egui_renderer,
            shade_options: ShadeOptions {
                escape_radius_squared: config.escape_radius_squared,
                legend_strip_width: config.legend_strip_width,
            },
            width: size.width,
            height: size.height,
        })
    }

    fn draw_software_frame(&mut self, uniforms: &ViewUniforms) -> Result<(), ViewerError> {
        let Backend::Software { last_rendered } = &mut self.backend else {
            return Ok(());
        };

        if last_rendered.as_ref() == Some(uniforms) {
            return Ok(());
        }

        render_frame_rayon(self.pixels.frame_mut(), uniforms, &self.shade_options)?;
        *last_rendered = Some(*uniforms);

        Ok(())
    }
}

fn backend_display_name(backend: &Backend) -> &'static str {
    match backend {
        Backend::Shader(_) => RenderBackend::Shader.display_name(),
        Backend::Software { .. } => RenderBackend::Software.display_name(),
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        uniforms: &ViewUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), ViewerError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.draw_software_frame(uniforms)?;

        let shade_options = self.shade_options;
        let backend = &self.backend;
        let egui_renderer = &mut self.egui_renderer;
        let (width, height) = (self.width, self.height);

        self.pixels
            .render_with(|encoder, render_target, context| {
                match backend {
                    Backend::Shader(pipeline) => {
                        pipeline.update(&context.queue, uniforms, &shade_options);
                        pipeline.render(encoder, render_target);
                    }
                    Backend::Software { .. } => {
                        context.scaling_renderer.render(encoder, render_target);
                    }
                }

                let clipped_primitives =
                    egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [width, height],
                    pixels_per_point: egui_ctx.pixels_per_point(),
                };

                let textures_delta = egui_output.textures_delta;

                for (id, delta) in &textures_delta.set {
                    egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
                }

                egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                // The HUD is drawn over the fractal.
                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
                }

                for id in &textures_delta.free {
                    egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(ViewerError::Render)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;

        if let Backend::Software { last_rendered } = &mut self.backend {
            self.pixels.resize_buffer(width, height)?;
            *last_rendered = None;
        }

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        backend_display_name(&self.backend)
    }
}
