//! View-state controller.
//!
//! Translates input events into [`ViewState`](crate::core::view::ViewState)
//! transitions and hands out a uniform snapshot once per frame:
//! - **Input**: the [`InputSink`] port, implemented by [`ViewController`]
//! - **Output**: [`ViewUniforms`](crate::core::view::ViewUniforms), read by the presenter

pub mod commands;
mod controller;
pub mod ports;

pub use commands::{PointerButton, ViewCommand};
pub use controller::{ControllerOptions, ViewController};
pub use ports::InputSink;
