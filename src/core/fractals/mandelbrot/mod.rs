//! CPU mirror of the escape-time shader.

pub mod colour_ramp;
pub mod escape_time;

pub use colour_ramp::cubic_ramp;
pub use escape_time::{DEFAULT_ESCAPE_RADIUS_SQUARED, escape_fraction};
