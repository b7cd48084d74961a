use crate::constants::MASTER_GAIN;
use fnv::FnvHashMap;
use patatap_core::{Playback, PlaybackError, SoundRef};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Decoded clips on one AudioContext. Playback starts a fresh buffer source
/// per press so repeated letters layer instead of restarting.
pub struct SoundBank {
    ctx: web::AudioContext,
    master: web::GainNode,
    buffers: Rc<RefCell<FnvHashMap<SoundRef, web::AudioBuffer>>>,
}

impl SoundBank {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err)?;
        let master = web::GainNode::new(&ctx).map_err(js_err)?;
        master.gain().set_value(MASTER_GAIN);
        master
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err)?;
        Ok(Self {
            ctx,
            master,
            buffers: Rc::new(RefCell::new(FnvHashMap::default())),
        })
    }

    /// Fetch and decode every clip in the background. Failures are logged
    /// and leave that clip silent.
    pub fn preload(&self, sounds: Vec<SoundRef>) {
        log::info!("[audio] preloading {} clips", sounds.len());
        for sound in sounds {
            let ctx = self.ctx.clone();
            let buffers = self.buffers.clone();
            spawn_local(async move {
                match fetch_and_decode(&ctx, sound.as_str()).await {
                    Ok(buffer) => {
                        buffers.borrow_mut().insert(sound, buffer);
                    }
                    Err(e) => log::error!("[audio] load {} failed: {:?}", sound, e),
                }
            });
        }
    }

    /// Browsers keep a new context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }
}

impl Playback for SoundBank {
    fn play(&mut self, sound: &SoundRef) -> Result<(), PlaybackError> {
        let buffers = self.buffers.borrow();
        let buffer = buffers
            .get(sound)
            .ok_or_else(|| PlaybackError::NotLoaded(sound.clone()))?;
        let fail = |e: JsValue| PlaybackError::Failed {
            sound: sound.clone(),
            reason: format!("{:?}", e),
        };
        let src = self.ctx.create_buffer_source().map_err(fail)?;
        src.set_buffer(Some(buffer));
        src.connect_with_audio_node(&self.master).map_err(fail)?;
        src.start().map_err(fail)?;
        Ok(())
    }
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(js_err)
}
