use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] no #{element_id}; click handler not wired");
    }
}

/// Match the canvas backing store to its CSS size * devicePixelRatio.
/// Returns the new size in pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

#[inline]
pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}
