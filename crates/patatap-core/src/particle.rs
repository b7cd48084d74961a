use crate::color::{Hsba, Rgb};
use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Drawable area the field spawns into, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Radius before the random factor is applied.
    #[inline]
    pub fn base_radius(&self) -> f32 {
        self.width.max(self.height) as f32 * BASE_RADIUS_FRACTION
    }
}

/// How the renderer composites a particle onto the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// `1 - (1 - src) * (1 - dst)`: overlaps only ever brighten.
    Screen,
}

/// One transient circle. Colors are copies; nothing links back to the key map.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Vec2,
    radius: f32,
    fill: Hsba,
    stroke: Hsba,
    stroke_width: f32,
    fade_rate: f32,
    stroke_grow_rate: f32,
}

impl Particle {
    /// Caller guarantees `bounds.is_drawable()`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, color: Rgb, bounds: Bounds) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * bounds.width as f32,
            rng.gen::<f32>() * bounds.height as f32,
        );
        let radius = bounds.base_radius() * (RADIUS_FACTOR_MIN + rng.gen::<f32>() * RADIUS_FACTOR_SPAN);
        let stroke_width = STROKE_WIDTH_MIN + rng.gen::<f32>() * STROKE_WIDTH_SPAN;
        let fade_rate = FADE_RATE_MIN + rng.gen::<f32>() * FADE_RATE_SPAN;
        let stroke_grow_rate = STROKE_GROW_MIN + rng.gen::<f32>() * STROKE_GROW_SPAN;
        Self {
            position,
            radius,
            fill: Hsba::from_rgb(color, FILL_ALPHA_START),
            stroke: Hsba::from_rgb(color, STROKE_ALPHA_START),
            stroke_width,
            fade_rate,
            stroke_grow_rate,
        }
    }

    /// One frame of decay: hue drift, shrink, stroke growth and fade.
    pub fn advance(&mut self) {
        self.fill.rotate_hue(HUE_STEP_DEG);
        self.stroke.rotate_hue(HUE_STEP_DEG);
        self.radius *= SHRINK_FACTOR;
        self.stroke_width += self.stroke_grow_rate;
        self.fill.fade(self.fade_rate);
        self.stroke.fade(self.fade_rate * STROKE_FADE_RATIO);
    }

    #[inline]
    pub fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius * self.radius
    }

    /// Too small or too faint to see.
    #[inline]
    pub fn is_evictable(&self) -> bool {
        self.area() < MIN_AREA
            || (self.fill.alpha <= ALPHA_EPSILON && self.stroke.alpha <= ALPHA_EPSILON)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
    pub fn fill(&self) -> Hsba {
        self.fill
    }
    pub fn stroke(&self) -> Hsba {
        self.stroke
    }
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
    pub fn fade_rate(&self) -> f32 {
        self.fade_rate
    }
    pub fn stroke_grow_rate(&self) -> f32 {
        self.stroke_grow_rate
    }
    pub fn blend_mode(&self) -> BlendMode {
        BlendMode::Screen
    }
}
