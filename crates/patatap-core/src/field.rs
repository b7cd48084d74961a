//! The live particle collection and everything a key press touches.
//!
//! `ParticleField` is the one owned context object of the toy: the front-end
//! holds it behind an `Rc<RefCell<_>>` and calls [`ParticleField::spawn`] from
//! input handlers and [`ParticleField::tick`] from the animation frame. Both
//! run on the UI thread, never concurrently.

use crate::particle::{Bounds, Particle};
use crate::stimulus::{KeyMap, SoundRef};
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("clip {0} is not loaded")]
    NotLoaded(SoundRef),
    #[error("playback of {sound} failed: {reason}")]
    Failed { sound: SoundRef, reason: String },
}

/// Fire-and-forget audio trigger. Implementations must not block.
pub trait Playback {
    fn play(&mut self, sound: &SoundRef) -> Result<(), PlaybackError>;
}

/// Discards every request; for callers without an audio device.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Playback for Silent {
    fn play(&mut self, _sound: &SoundRef) -> Result<(), PlaybackError> {
        Ok(())
    }
}

pub struct ParticleField {
    key_map: KeyMap,
    particles: Vec<Particle>,
    bounds: Bounds,
    rng: StdRng,
    now_playing: Option<char>,
    last_interaction: Option<Instant>,
    disposed: bool,
}

impl ParticleField {
    pub fn new(key_map: KeyMap, bounds: Bounds, seed: u64) -> Self {
        Self {
            key_map,
            particles: Vec::new(),
            bounds,
            rng: StdRng::seed_from_u64(seed),
            now_playing: None,
            last_interaction: None,
            disposed: false,
        }
    }

    /// Resolve `letter`, trigger its clip and add one particle.
    ///
    /// Returns the new particle, or `None` when nothing was spawned
    /// (non-letter input, zero-sized canvas, or a disposed field).
    pub fn spawn<P: Playback + ?Sized>(&mut self, letter: char, audio: &mut P) -> Option<&Particle> {
        if self.disposed {
            log::warn!("[field] spawn({letter:?}) after dispose ignored");
            return None;
        }
        let entry = self.key_map.lookup(letter)?;
        if !self.bounds.is_drawable() {
            log::debug!(
                "[field] skip spawn({letter:?}): canvas is {}x{}",
                self.bounds.width,
                self.bounds.height
            );
            return None;
        }
        if let Err(e) = audio.play(&entry.sound) {
            log::warn!("[audio] {e}");
        }
        let particle = Particle::spawn(&mut self.rng, entry.color, self.bounds);
        // Tiny canvases can produce a circle under MIN_AREA; it lives until the next tick.
        if particle.is_evictable() {
            log::debug!(
                "[field] spawn({letter:?}) on {}x{} is below the visible size",
                self.bounds.width,
                self.bounds.height
            );
        }
        self.particles.push(particle);
        self.now_playing = Some(letter.to_ascii_uppercase());
        self.last_interaction = Some(Instant::now());
        self.particles.last()
    }

    /// `spawn` against an explicit canvas size, which also becomes the
    /// bounds for later spawns.
    pub fn spawn_sized<P: Playback + ?Sized>(
        &mut self,
        letter: char,
        width: u32,
        height: u32,
        audio: &mut P,
    ) -> Option<&Particle> {
        self.on_resize(width, height);
        self.spawn(letter, audio)
    }

    /// Advance every live particle one frame and drop the invisible ones.
    pub fn tick(&mut self) {
        if self.disposed {
            return;
        }
        self.particles.retain_mut(|p| {
            p.advance();
            !p.is_evictable()
        });
    }

    /// Only affects where future particles land.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn dispose(&mut self) {
        self.particles.clear();
        self.particles.shrink_to_fit();
        self.now_playing = None;
        self.disposed = true;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Upper-cased letter of the most recent spawn.
    pub fn now_playing(&self) -> Option<char> {
        self.now_playing
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Time since the last successful spawn, `None` before the first one.
    pub fn idle_for(&self, now: Instant) -> Option<Duration> {
        self.last_interaction.map(|t| {
            if now > t {
                now.duration_since(t)
            } else {
                Duration::ZERO
            }
        })
    }
}
