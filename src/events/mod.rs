pub mod keyboard;

pub use keyboard::wire_global_keydown;

use crate::audio::SoundBank;
use crate::constants::*;
use crate::{dom, overlay};
use patatap_core::{AutoPlay, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing size and the field's spawn bounds in step.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    field.borrow_mut().on_resize(w, h);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        field.borrow_mut().on_resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

pub fn wire_menu(document: &web::Document) {
    let doc_toggle = document.clone();
    dom::add_click_listener(document, MENU_BUTTON_ID, move || {
        let open = overlay::is_menu_open(&doc_toggle);
        overlay::set_menu_open(&doc_toggle, !open);
    });
    let doc_close = document.clone();
    dom::add_click_listener(document, MENU_CLOSE_ID, move || {
        overlay::set_menu_open(&doc_close, false);
    });
    for id in DRAWER_LINK_IDS {
        let doc_link = document.clone();
        dom::add_click_listener(document, id, move || {
            overlay::set_menu_open(&doc_link, false);
        });
    }
}

pub fn wire_autoplay_button(
    document: &web::Document,
    autoplay: Rc<RefCell<AutoPlay>>,
    sounds: Rc<RefCell<SoundBank>>,
) {
    let doc = document.clone();
    dom::add_click_listener(document, AUTO_BUTTON_ID, move || {
        sounds.borrow().resume();
        let playing = autoplay.borrow_mut().toggle();
        overlay::set_auto_status(&doc, playing);
    });
}
