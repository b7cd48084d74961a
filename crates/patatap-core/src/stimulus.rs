//! Letter to (sound clip, color) mapping.
//!
//! The map is built once from an ordered base table and is total over `a..=z`:
//! letters missing from the base table borrow the entry at
//! `alphabet_index % base.len()` in the base table's own order.

use crate::color::{ColorError, Rgb};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub const ALPHABET_LEN: usize = 26;

/// Resolved URL of a short audio clip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundRef(Arc<str>);

impl SoundRef {
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the bundled clips are served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetConfig {
    base_path: String,
}

impl AssetConfig {
    pub fn new(base_path: &str) -> Self {
        let mut base_path = base_path.trim().to_string();
        if !base_path.ends_with('/') {
            base_path.push('/');
        }
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `bubbles.mp3` -> `<base>sounds/bubbles.mp3`
    pub fn resolve_sound(&self, file_name: &str) -> SoundRef {
        SoundRef::new(format!("{}sounds/{}", self.base_path, file_name))
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::new("/")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StimulusEntry {
    pub sound: SoundRef,
    pub color: Rgb,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyMapError {
    #[error("base table is empty")]
    EmptyBaseTable,
    #[error("base table key {0:?} is not an ASCII letter")]
    NotALetter(char),
    #[error("base table defines {0:?} more than once")]
    DuplicateLetter(char),
    #[error("base table color for {letter:?}: {source}")]
    Color {
        letter: char,
        #[source]
        source: ColorError,
    },
}

// Clip file and color per letter, in the order the fallback indexes into.
pub const DEFAULT_BASE_TABLE: &[(char, &str, &str)] = &[
    ('q', "bubbles.mp3", "#1abc9c"),
    ('w', "clay.mp3", "#2ecc71"),
    ('e', "confetti.mp3", "#3498db"),
    ('r', "corona.mp3", "#9b59b6"),
    ('t', "dotted-spiral.mp3", "#34495e"),
    ('y', "flash-1.mp3", "#16a085"),
    ('u', "flash-2.mp3", "#27ae60"),
    ('i', "flash-3.mp3", "#2980b9"),
    ('o', "glimmer.mp3", "#8e44ad"),
    ('p', "moon.mp3", "#2c3e50"),
    ('a', "pinwheel.mp3", "#f1c40f"),
    ('s', "piston-1.mp3", "#e67e22"),
    ('d', "piston-2.mp3", "#e74c3c"),
    ('f', "prism-1.mp3", "#95a5a6"),
    ('g', "prism-2.mp3", "#f39c12"),
    ('h', "prism-3.mp3", "#d35400"),
    ('j', "splits.mp3", "#1abc9c"),
    ('k', "squiggle.mp3", "#2ecc71"),
    ('l', "strike.mp3", "#3498db"),
    ('z', "suspension.mp3", "#9b59b6"),
    ('x', "timer.mp3", "#34495e"),
    ('c', "ufo.mp3", "#16a085"),
    ('v', "veil.mp3", "#27ae60"),
    ('b', "wipe.mp3", "#2980b9"),
    ('n', "zig-zag.mp3", "#8e44ad"),
    ('m', "moon.mp3", "#2c3e50"),
];

/// Total, immutable letter -> stimulus table.
#[derive(Clone, Debug)]
pub struct KeyMap {
    entries: Vec<StimulusEntry>,
}

impl KeyMap {
    pub fn build(base: &[(char, StimulusEntry)]) -> Result<Self, KeyMapError> {
        if base.is_empty() {
            return Err(KeyMapError::EmptyBaseTable);
        }
        let mut defined: [Option<usize>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        for (pos, (letter, _)) in base.iter().enumerate() {
            let idx = letter_index(*letter).ok_or(KeyMapError::NotALetter(*letter))?;
            if defined[idx].replace(pos).is_some() {
                return Err(KeyMapError::DuplicateLetter(letter.to_ascii_lowercase()));
            }
        }
        let entries = (0..ALPHABET_LEN)
            .map(|idx| {
                let pos = defined[idx].unwrap_or(idx % base.len());
                base[pos].1.clone()
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn with_default_table(assets: &AssetConfig) -> Result<Self, KeyMapError> {
        let base = DEFAULT_BASE_TABLE
            .iter()
            .map(|&(letter, file, hex)| {
                let color =
                    Rgb::from_hex(hex).map_err(|source| KeyMapError::Color { letter, source })?;
                Ok((
                    letter,
                    StimulusEntry {
                        sound: assets.resolve_sound(file),
                        color,
                    },
                ))
            })
            .collect::<Result<Vec<_>, KeyMapError>>()?;
        Self::build(&base)
    }

    /// Case-insensitive; anything outside `a..=z` has no entry.
    pub fn lookup(&self, letter: char) -> Option<&StimulusEntry> {
        letter_index(letter).map(|idx| &self.entries[idx])
    }

    /// Every distinct clip, in first-use alphabetical order.
    pub fn sounds(&self) -> Vec<SoundRef> {
        let mut out: Vec<SoundRef> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !out.contains(&entry.sound) {
                out.push(entry.sound.clone());
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &StimulusEntry)> {
        ('a'..='z').zip(self.entries.iter())
    }
}

#[inline]
fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}

/// Letter carried by a DOM `KeyboardEvent.key` value, if any.
#[inline]
pub fn letter_from_key(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
