pub mod render_frame;
pub mod shade;

pub use render_frame::{RenderFrameError, render_frame, render_frame_rayon};
pub use shade::{ShadeOptions, shade_pixel};
