use crate::constants::AUTO_PLAY_PERIOD_SEC;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

/// Letters the festive auto-play picks from.
pub const HOLIDAY_KEYS: &[char] = &[
    'q', 'w', 'e', 'r', 't', 'y', 'a', 's', 'd', 'f', 'z', 'x', 'c', 'v',
];

/// Auto-play is offered through December. `month0` is zero-based (11 = Dec).
#[inline]
pub fn is_holiday_season(month0: u32, day: u32) -> bool {
    month0 == 11 && day >= 1
}

/// Timer that feeds random holiday letters into the field while running.
pub struct AutoPlay {
    rng: StdRng,
    playing: bool,
    // seconds accumulated toward the next letter
    accum: f64,
    fire_now: bool,
}

impl AutoPlay {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            playing: false,
            accum: 0.0,
            fire_now: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// First letter goes out on the next tick, then one per period.
    pub fn start(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.accum = 0.0;
        self.fire_now = true;
        log::info!("[autoplay] started");
    }

    pub fn stop(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.accum = 0.0;
        self.fire_now = false;
        log::info!("[autoplay] stopped");
    }

    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.stop();
        } else {
            self.start();
        }
        self.playing
    }

    pub fn tick(&mut self, dt: Duration) -> SmallVec<[char; 2]> {
        let mut out = SmallVec::new();
        if !self.playing {
            return out;
        }
        if self.fire_now {
            self.fire_now = false;
            out.push(self.pick());
        } else {
            self.accum += dt.as_secs_f64();
        }
        while self.accum >= AUTO_PLAY_PERIOD_SEC {
            self.accum -= AUTO_PLAY_PERIOD_SEC;
            out.push(self.pick());
        }
        out
    }

    fn pick(&mut self) -> char {
        *HOLIDAY_KEYS.choose(&mut self.rng).unwrap_or(&'q')
    }
}
