//! Color types used by the stimulus table and by live particles.
//!
//! Base colors are authored as hex strings and parsed into [`Rgb`]. Particles
//! keep their colors as [`Hsba`] so the per-frame hue rotation and alpha fade
//! are plain field updates; renderers convert back with [`Hsba::to_rgb`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// Linear 0..1 RGB triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(hex.to_string()));
        }
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorError::BadLength(hex.to_string())),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb` form, used by the legend swatches.
    pub fn to_hex(self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

/// Hue (degrees), saturation, brightness and alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsba {
    pub fn from_rgb(rgb: Rgb, alpha: f32) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let delta = max - min;
        let hue = if delta <= f32::EPSILON {
            0.0
        } else if max == rgb.r {
            60.0 * ((rgb.g - rgb.b) / delta)
        } else if max == rgb.g {
            60.0 * ((rgb.b - rgb.r) / delta + 2.0)
        } else {
            60.0 * ((rgb.r - rgb.g) / delta + 4.0)
        };
        let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            brightness: max,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let c = self.brightness * self.saturation;
        let hp = self.hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.brightness - c;
        Rgb::new(r + m, g + m, b + m)
    }

    /// Rotate the hue, wrapping into [0, 360).
    #[inline]
    pub fn rotate_hue(&mut self, degrees: f32) {
        self.hue = (self.hue + degrees).rem_euclid(360.0);
    }

    /// Lower alpha by `amount`, never below zero.
    #[inline]
    pub fn fade(&mut self, amount: f32) {
        self.alpha = (self.alpha - amount).max(0.0);
    }

    pub fn to_rgba_array(self) -> [f32; 4] {
        let rgb = self.to_rgb();
        [rgb.r, rgb.g, rgb.b, self.alpha]
    }

    pub fn to_css(self) -> String {
        let rgb = self.to_rgb();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {:.3})",
            byte(rgb.r),
            byte(rgb.g),
            byte(rgb.b),
            self.alpha
        )
    }
}
