mod buffer;
mod program;
mod renderer;

pub use buffer::*;
pub use program::*;
pub use renderer::*;

pub type GL = web_sys::WebGl2RenderingContext;
