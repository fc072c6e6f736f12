use js_sys::wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::error::Error;

pub(crate) fn document() -> Result<Document, Error> {
    web_sys::window()
        .ok_or(Error::window_not_found())
        .and_then(|w| w.document().ok_or(Error::document_not_found()))
}

pub(crate) fn canvas_by_id(selector: &str) -> Result<HtmlCanvasElement, Error> {
    let document = document()?;
    document
        .query_selector(selector)
        .map_err(|_| Error::canvas_not_found())?
        .ok_or(Error::canvas_not_found())?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| Error::canvas_not_found())
}

pub(crate) fn create_canvas(width: u32, height: u32) -> Result<HtmlCanvasElement, Error> {
    let document = document()?;
    let canvas = document
        .create_element("canvas")
        .map_err(|_| Error::element_creation_failed("canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::element_creation_failed("canvas"))?;

    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

pub(crate) fn webgl_context(
    canvas: &HtmlCanvasElement,
) -> Result<web_sys::WebGl2RenderingContext, Error> {
    canvas
        .get_context("webgl2")
        .map_err(|_| Error::canvas_context_failed())?
        .ok_or(Error::webgl_context_failed())?
        .dyn_into::<web_sys::WebGl2RenderingContext>()
        .map_err(|_| Error::webgl_context_failed())
}
