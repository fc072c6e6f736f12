mod error;
mod gl;

pub(crate) mod js;

pub mod input;

pub use crate::{
    error::Error,
    gl::{create_attrib_buffer, upload_f32_array, AttribPointer, Renderer, ShaderProgram, GL},
};
