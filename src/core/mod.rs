//! Domain data and pure view math. Nothing here depends on windowing or the GPU.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod view;
