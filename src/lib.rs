#![cfg(target_arch = "wasm32")]
use instant::Instant;
use patatap_core::{is_holiday_season, AssetConfig, AutoPlay, Bounds, KeyMap, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::*;

#[inline]
fn random_seed() -> u64 {
    // 53 bits is all Math.random() carries
    (js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Asset base from `<canvas data-asset-base="...">`, else the default.
fn asset_config(canvas: &web::HtmlCanvasElement) -> AssetConfig {
    let base = canvas
        .get_attribute(ASSET_BASE_ATTR)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ASSET_BASE.to_string());
    AssetConfig::new(&base)
}

// Release particles and stop auto-play when the page goes away.
fn wire_teardown(field: Rc<RefCell<ParticleField>>, autoplay: Rc<RefCell<AutoPlay>>) {
    let closure = Closure::wrap(Box::new(move || {
        autoplay.borrow_mut().stop();
        field.borrow_mut().dispose();
        log::info!("[app] disposed");
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("patatap-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let assets = asset_config(&canvas);
    let key_map = KeyMap::with_default_table(&assets)?;
    log::info!("[app] assets from {}", assets.base_path());

    let sounds = Rc::new(RefCell::new(audio::SoundBank::new()?));
    sounds.borrow().preload(key_map.sounds());

    overlay::render_title(&document);
    overlay::render_legend(&document, &key_map);
    overlay::set_now_playing(&document, None);

    let field = Rc::new(RefCell::new(ParticleField::new(
        key_map,
        Bounds::default(),
        random_seed(),
    )));
    events::wire_canvas_resize(&canvas, field.clone());

    // Auto-play is a December feature
    let today = js_sys::Date::new_0();
    let holiday = is_holiday_season(today.get_month(), today.get_date());
    let autoplay = Rc::new(RefCell::new(AutoPlay::new(random_seed())));
    overlay::show_auto_card(&document, holiday);
    overlay::set_auto_status(&document, false);
    if holiday {
        events::wire_autoplay_button(&document, autoplay.clone(), sounds.clone());
    }

    events::wire_menu(&document);
    events::wire_global_keydown(document.clone(), field.clone(), sounds.clone());
    wire_teardown(field.clone(), autoplay.clone());

    let renderer = render::Renderer::new(&canvas).await;
    if renderer.is_none() {
        log::error!("no renderer available; particles will not be drawn");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        sounds,
        autoplay,
        document,
        canvas,
        renderer,
        last_instant: Instant::now(),
        legend_faded: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
