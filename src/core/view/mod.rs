pub mod uniforms;
pub mod view_state;

pub use uniforms::ViewUniforms;
pub use view_state::{PanDirection, ViewState, ViewStateError};
