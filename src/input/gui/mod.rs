//! GUI input adapter for the interactive viewer.
//!
//! This module provides a windowed interface using winit for window management
//! and input, pixels for the GPU surface, and egui for the optional HUD.

pub mod app;
pub mod command;

pub use command::gui_command::GuiCommand;
