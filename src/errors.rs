use std::{error::Error, fmt};

use crate::core::actions::render_frame::RenderFrameError;

/// Failures that stop the viewer.
///
/// Everything except [`ViewerError::Render`] and [`ViewerError::Frame`] can
/// only happen during startup.
#[derive(Debug)]
pub enum ViewerError {
    EventLoop(winit::error::EventLoopError),
    WindowCreation(winit::error::OsError),
    Surface(pixels::Error),
    SurfaceResize(pixels::TextureError),
    ShaderUnsupported,
    ShaderCompilation(String),
    Frame(RenderFrameError),
    Render(pixels::Error),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(error) => write!(f, "event loop failed: {}", error),
            Self::WindowCreation(error) => write!(f, "failed to create the window: {}", error),
            Self::Surface(error) => write!(f, "failed to create the GPU surface: {}", error),
            Self::SurfaceResize(error) => write!(f, "failed to resize the GPU surface: {}", error),
            Self::ShaderUnsupported => {
                write!(f, "GPU device does not support double-precision shaders")
            }
            Self::ShaderCompilation(message) => {
                write!(f, "failed to build the fractal shader pipeline: {}", message)
            }
            Self::Frame(error) => write!(f, "software render failed: {}", error),
            Self::Render(error) => write!(f, "render failed: {}", error),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(error) => Some(error),
            Self::WindowCreation(error) => Some(error),
            Self::Surface(error) | Self::Render(error) => Some(error),
            Self::SurfaceResize(error) => Some(error),
            Self::Frame(error) => Some(error),
            Self::ShaderUnsupported | Self::ShaderCompilation(_) => None,
        }
    }
}

impl From<winit::error::EventLoopError> for ViewerError {
    fn from(error: winit::error::EventLoopError) -> Self {
        Self::EventLoop(error)
    }
}

impl From<winit::error::OsError> for ViewerError {
    fn from(error: winit::error::OsError) -> Self {
        Self::WindowCreation(error)
    }
}

impl From<pixels::TextureError> for ViewerError {
    fn from(error: pixels::TextureError) -> Self {
        Self::SurfaceResize(error)
    }
}

impl From<RenderFrameError> for ViewerError {
    fn from(error: RenderFrameError) -> Self {
        Self::Frame(error)
    }
}
