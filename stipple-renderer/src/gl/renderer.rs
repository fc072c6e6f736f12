use web_sys::HtmlCanvasElement;

use crate::{error::Error, gl::GL, js};

/// Owns the canvas and its WebGL2 rendering context.
///
/// Covers context acquisition, viewport and clear handling, and accessors.
/// Shader programs, buffers, and draw calls are issued by the caller against
/// [`gl`](Self::gl).
#[derive(Debug)]
pub struct Renderer {
    gl: web_sys::WebGl2RenderingContext,
    canvas: web_sys::HtmlCanvasElement,
}

impl Renderer {
    /// Creates a renderer for the canvas matching a CSS selector
    /// (e.g. `"#canvas"`).
    ///
    /// # Errors
    /// Fails when no matching canvas exists or the WebGL2 context cannot be
    /// created.
    pub fn create(selector: &str) -> Result<Self, Error> {
        let canvas = js::canvas_by_id(selector)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a renderer on a freshly created canvas of the given size.
    ///
    /// The canvas starts detached; retrieve it with [`canvas`](Self::canvas)
    /// and append it to the page.
    pub fn create_with_size(width: u32, height: u32) -> Result<Self, Error> {
        let canvas = js::create_canvas(width, height)?;
        Self::create_with_canvas(canvas)
    }

    /// Creates a renderer from an existing canvas element.
    pub fn create_with_canvas(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        let (width, height) = (canvas.width(), canvas.height());

        // initialize WebGL context
        let gl = js::webgl_context(&canvas)?;

        let mut renderer = Self { gl, canvas };
        renderer.resize(width as _, height as _);
        Ok(renderer)
    }

    /// Resizes the canvas backing store and matches the viewport to it.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.gl.viewport(0, 0, width, height);
    }

    /// Clears the color buffer with the given color.
    pub fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    // Accessor methods
    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Returns the current canvas dimensions as (width, height) in pixels.
    pub fn canvas_size(&self) -> (i32, i32) {
        (self.canvas.width() as i32, self.canvas.height() as i32)
    }
}
