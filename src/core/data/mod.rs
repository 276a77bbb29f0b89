pub mod colour;
pub mod complex;
pub mod screen_point;
