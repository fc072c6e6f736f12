use web_sys::WebGlBuffer;

use crate::{error::Error, gl::GL};

/// Vertex attribute pointer configuration.
///
/// Mirrors the `vertex_attrib_pointer` argument list; the [`Default`] leaves
/// everything but `size` at the GL defaults (float components, not
/// normalized, tightly packed from offset zero).
#[derive(Debug, Clone, Copy)]
pub struct AttribPointer {
    /// Components read per vertex (1 to 4).
    pub size: i32,
    /// Component data type.
    pub type_: u32,
    /// Whether integer data is normalized when fetched.
    pub normalized: bool,
    /// Byte distance between consecutive vertices; 0 means tightly packed.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

impl AttribPointer {
    /// Pointer reading `size` tightly packed float components per vertex.
    pub fn floats(size: i32) -> Self {
        Self { size, ..Self::default() }
    }
}

impl Default for AttribPointer {
    fn default() -> Self {
        Self {
            size: 4,
            type_: GL::FLOAT,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }
}

/// Creates an `ARRAY_BUFFER` and wires the given vertex attribute to it.
///
/// The attribute pointer is configured and the attribute array enabled while
/// the new buffer is bound; the buffer stays bound on return so the caller
/// can upload data right away.
pub fn create_attrib_buffer(
    gl: &GL,
    attrib: u32,
    pointer: &AttribPointer,
) -> Result<WebGlBuffer, Error> {
    let buffer = gl.create_buffer().ok_or(Error::buffer_creation_failed("array"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));

    gl.vertex_attrib_pointer_with_i32(
        attrib,
        pointer.size,
        pointer.type_,
        pointer.normalized,
        pointer.stride,
        pointer.offset,
    );
    gl.enable_vertex_attrib_array(attrib);

    Ok(buffer)
}

/// Uploads a float slice to the buffer bound at `target`.
///
/// # Parameters
/// * `gl` - WebGL context
/// * `target` - Buffer target (e.g., GL::ARRAY_BUFFER)
/// * `data` - Slice to upload
/// * `usage` - Usage hint (e.g., GL::DYNAMIC_DRAW)
///
/// # Safety
/// The `Float32Array` view aliases wasm memory directly and is only valid
/// until the next allocation; it is consumed before this function returns.
pub fn upload_f32_array(gl: &GL, target: u32, data: &[f32], usage: u32) {
    unsafe {
        let view = js_sys::Float32Array::view(data);
        gl.buffer_data_with_array_buffer_view(target, &view, usage);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrib_pointer_defaults() {
        let pointer = AttribPointer::default();

        assert_eq!(pointer.size, 4);
        assert_eq!(pointer.type_, GL::FLOAT);
        assert!(!pointer.normalized);
        assert_eq!(pointer.stride, 0);
        assert_eq!(pointer.offset, 0);
    }

    #[test]
    fn test_floats_overrides_size_only() {
        let pointer = AttribPointer::floats(2);

        assert_eq!(pointer.size, 2);
        assert_eq!(pointer.type_, GL::FLOAT);
    }
}
