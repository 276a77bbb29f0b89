pub mod gui_app;
pub mod hud;
pub mod key_bindings;
pub mod ports;
