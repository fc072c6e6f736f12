use std::fmt::Debug;

use wasm_bindgen::{closure::Closure, JsCast};

use crate::error::Error;

/// A click translated to canvas pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Horizontal offset from the canvas left edge, in pixels.
    pub x: f32,
    /// Vertical offset from the canvas top edge, in pixels.
    pub y: f32,
    /// Mouse button pressed (0 = left, 1 = middle, 2 = right).
    pub button: i16,
}

/// Routes `click` events on a canvas to a callback.
///
/// The listener stays attached for the lifetime of the handler and is
/// removed by [`cleanup`](Self::cleanup) or on drop.
pub struct ClickHandler {
    canvas: web_sys::HtmlCanvasElement,
    on_click: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl ClickHandler {
    /// Attaches a `click` listener to the canvas.
    ///
    /// # Errors
    /// Returns an error if the listener cannot be attached.
    pub fn new<F>(canvas: &web_sys::HtmlCanvasElement, mut callback: F) -> Result<Self, Error>
    where
        F: FnMut(ClickEvent) + 'static,
    {
        let on_click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            callback(ClickEvent {
                x: event.offset_x() as f32,
                y: event.offset_y() as f32,
                button: event.button(),
            });
        }) as Box<dyn FnMut(_)>);

        canvas
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|_| Error::listener_attach_failed("click"))?;

        Ok(Self { canvas: canvas.clone(), on_click })
    }

    /// Removes the owned listener from the canvas.
    ///
    /// Called automatically on drop; calling it twice is harmless.
    pub fn cleanup(&self) {
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }

    /// Keeps the listener attached for the remaining lifetime of the page.
    ///
    /// The closure is never reclaimed afterwards.
    pub fn leak(self) {
        std::mem::forget(self);
    }
}

impl Drop for ClickHandler {
    fn drop(&mut self) {
        self.cleanup();
    }
}

impl Debug for ClickHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClickHandler {{ .. }}")
    }
}
