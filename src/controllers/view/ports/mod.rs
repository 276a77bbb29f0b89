//! Port definitions for the view controller.

pub mod input_sink;

pub use input_sink::InputSink;
