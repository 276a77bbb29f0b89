pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod errors;
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;

pub use config::{RenderBackend, ViewerConfig};
pub use controllers::view::{InputSink, ViewController};
pub use crate::core::view::{ViewState, ViewUniforms};

#[cfg(feature = "gui")]
pub use errors::ViewerError;
#[cfg(feature = "gui")]
pub use input::gui::GuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::{PixelsPresenter, PixelsPresenterFactory};
