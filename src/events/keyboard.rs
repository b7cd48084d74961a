use crate::audio::SoundBank;
use crate::overlay;
use patatap_core::{letter_from_key, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    field: &Rc<RefCell<ParticleField>>,
    sounds: &Rc<RefCell<SoundBank>>,
) {
    // Leave browser shortcuts (copy, reload, ...) alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if key == "Escape" {
        overlay::set_menu_open(document, false);
        return;
    }
    let Some(letter) = letter_from_key(&key) else {
        return;
    };
    sounds.borrow().resume();
    let mut f = field.borrow_mut();
    let spawned = f.spawn(letter, &mut *sounds.borrow_mut()).is_some();
    if spawned {
        overlay::set_now_playing(document, f.now_playing());
        overlay::set_legend_faded(document, false);
    }
}

pub fn wire_global_keydown(
    document: web::Document,
    field: Rc<RefCell<ParticleField>>,
    sounds: Rc<RefCell<SoundBank>>,
) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &document, &field, &sounds);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
