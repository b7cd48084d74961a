use crate::audio::SoundBank;
use crate::constants::*;
use crate::overlay;
use crate::render::Renderer;
use instant::Instant;
use patatap_core::{AutoPlay, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub sounds: Rc<RefCell<SoundBank>>,
    pub autoplay: Rc<RefCell<AutoPlay>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<Renderer>,
    pub last_instant: Instant,
    pub legend_faded: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let letters = self.autoplay.borrow_mut().tick(dt);
        let mut field = self.field.borrow_mut();
        if !letters.is_empty() {
            let mut sounds = self.sounds.borrow_mut();
            for letter in letters {
                field.spawn(letter, &mut *sounds);
            }
            overlay::set_now_playing(&self.document, field.now_playing());
        }

        field.tick();

        if let Some(r) = &mut self.renderer {
            r.resize_if_needed(self.canvas.width(), self.canvas.height());
            r.render(field.particles());
        }

        let faded = field
            .idle_for(now)
            .map(|idle| idle.as_secs_f32() > LEGEND_IDLE_SEC)
            .unwrap_or(false);
        if faded != self.legend_faded {
            self.legend_faded = faded;
            overlay::set_legend_faded(&self.document, faded);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
