#![warn(clippy::pedantic)]

//! 24-bit RGB to xterm-256 color palette translation.
//!
//! xterm-256 exposes its colors as a 6x6x6 RGB cube (codes 16-231) plus a
//! 24-step grayscale ramp (codes 232-255), on top of the sixteen legacy
//! tty colors. This crate maps an arbitrary 24-bit RGB value onto the
//! nearest code in that palette, and separately exposes a small table of
//! named color slots (`"red"`, `"absolute-cyan"`, `"terminal-default"`,
//! ...) for callers that want to talk about a themeable slot rather than
//! a specific pixel value.
//!
//! The cube and ramp math mirror the quantization rule actual xterm
//! builds use for their default palette: cube channel values step
//! through `0, 0x5f, 0x87, 0xaf, 0xd7, 0xff`, and the ramp steps through
//! `index * 10 + 8` for 24 shades of gray.

use std::sync::Mutex;

pub mod slots;

pub use slots::{Ansi16, PaletteSlot};

/// Midpoint of the first cube step; channel values below this snap to a
/// multiple of it, values at or above it snap to `initial + k*40`.
const DEFAULT_INITIAL: u8 = 0x5f;

/// Which xterm-256 sub-palette a translated candidate was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorKind {
    /// A point in the 6x6x6 RGB cube (codes 16-231).
    Color,
    /// A step on the 24-entry grayscale ramp (codes 232-255).
    Gray,
}

/// One candidate produced while translating an RGB color: its kind and
/// the 24-bit RGB value xterm actually renders for the chosen code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub kind: ColorKind,
    pub rgb: u32,
}

/// Result of [`translate`]: the color-cube and grayscale-ramp candidates
/// for an input RGB value, nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    candidates: [Candidate; 2],
}

impl Translation {
    /// The candidates in nearest-first order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate; 2] {
        &self.candidates
    }

    /// The 24-bit RGB value xterm renders for the chosen candidate.
    #[must_use]
    pub fn color(&self) -> u32 {
        self.candidates[0].rgb
    }

    /// The xterm-256 palette index (16-231 for a cube hit, 232-255 for a
    /// gray hit) for the chosen candidate.
    #[must_use]
    pub fn code(&self) -> u16 {
        let chosen = self.candidates[0];
        match chosen.kind {
            ColorKind::Gray => gray_code(truncate_channel(chosen.rgb)),
            ColorKind::Color => color_code(chosen.rgb),
        }
    }

    /// The chosen code as a decimal ASCII string, suitable for splicing
    /// directly into a `38;5;<code>` / `48;5;<code>` SGR sequence.
    ///
    /// Results for recently requested codes are cached, since a given
    /// code is typically requested for both a foreground and a
    /// background write in quick succession.
    #[must_use]
    pub fn code_string(&self) -> String {
        code_string(self.code())
    }
}

fn truncate_channel(rgb: u32) -> u8 {
    (rgb & 0xFF) as u8
}

/// Bounded, observationally-transparent cache from xterm-256 code to its
/// decimal ASCII rendering. Recency-ordered, capacity 64.
static CODE_STRING_CACHE: Mutex<Vec<(u16, String)>> = Mutex::new(Vec::new());

const CODE_STRING_CACHE_CAPACITY: usize = 64;

fn code_string(code: u16) -> String {
    let mut cache = CODE_STRING_CACHE.lock().expect("cache mutex poisoned");
    if let Some(pos) = cache.iter().position(|(c, _)| *c == code) {
        let entry = cache.remove(pos);
        cache.push(entry.clone());
        return entry.1;
    }

    let mut buf = itoa::Buffer::new();
    let rendered = buf.format(code).to_owned();

    if cache.len() >= CODE_STRING_CACHE_CAPACITY {
        let evicted = cache.remove(0);
        tracing::trace!(code = evicted.0, "code_string cache eviction");
    }
    cache.push((code, rendered.clone()));
    rendered
}

/// Snap each channel of `(r, g, b)` onto the xterm-256 cube's value
/// ladder, using `initial` as the first non-zero step (xterm's default
/// is `0x5f`). Values below `initial` snap to the nearest multiple of
/// it; values at or above it snap to `initial + k*40`.
///
/// This rule is a coarse approximation away from exact cube values: it
/// is accurate for colors that already lie close to a cube step, and a
/// best-effort guess otherwise.
#[must_use]
pub fn scale_color_with_initial(r: u8, g: u8, b: u8, initial: u8) -> u32 {
    let mut color: u32 = 0;
    for x in [r, g, b] {
        color <<= 8;
        let scaled = if x < initial {
            round_div(u32::from(x), u32::from(initial)) * u32::from(initial)
        } else {
            u32::from(initial)
                + round_div(u32::from(x) - u32::from(initial), 40) * 40
        };
        color |= scaled & 0xFF;
    }
    color
}

/// [`scale_color_with_initial`] with xterm's default `initial = 0x5f`.
#[must_use]
pub fn scale_color(r: u8, g: u8, b: u8) -> u32 {
    scale_color_with_initial(r, g, b, DEFAULT_INITIAL)
}

/// Round-to-nearest integer division (ties away from zero), matching
/// Python's `round()` used by the reference quantizer.
fn round_div(n: u32, d: u32) -> u32 {
    if d == 0 {
        return 0;
    }
    (2 * n + d) / (2 * d)
}

/// One step on the 24-entry grayscale ramp. `index` is clamped to
/// `0..=23`. Returns the step's 24-bit RGB value and its xterm-256 code
/// (232-255).
#[must_use]
pub fn gray_palette(index: i32) -> (u32, u16) {
    let index = index.clamp(0, 23);
    let base = (index * 10 + 8) as u32;
    let rgb = (base << 16) | (base << 8) | base;
    (rgb, (index + 232) as u16)
}

/// Nearest grayscale ramp code for an 8-bit intensity. May not be a
/// reasonable substitute if `component` is not already close to a ramp
/// step.
#[must_use]
pub fn gray_code(component: u8) -> u16 {
    let step = (i32::from(component) - 8).div_euclid(10);
    (step + 232).clamp(232, 255) as u16
}

/// Nearest grayscale ramp RGB value for an 8-bit intensity.
#[must_use]
pub fn scale_gray(component: u8) -> u32 {
    let code = gray_code(component);
    gray_palette(i32::from(code) - 232).0
}

/// Construct a 6x6x6 cube candidate from per-channel cube indices
/// (`0..=5` each). Returns the candidate's 24-bit RGB value and its
/// xterm-256 code (16-231).
#[must_use]
pub fn color_palette(r: u8, g: u8, b: u8) -> (u32, u16) {
    let code = 16 + u16::from(r) * 36 + u16::from(g) * 6 + u16::from(b);
    let channel = |v: u8| if v == 0 { 0u32 } else { u32::from(v) * 40 + 55 };
    let rgb = (channel(r) << 16) | (channel(g) << 8) | channel(b);
    (rgb, code)
}

/// Nearest cube code for a 24-bit RGB value. May not be a reasonable
/// substitute if `color` does not already lie on a cube step.
#[must_use]
pub fn color_code(color: u32) -> u16 {
    let channel_index = |shift: u32| {
        let value = i32::from(((color >> shift) & 0xFF) as u8);
        ((value - 55) / 40).max(0) as u16
    };
    16 + channel_index(16) * 36 + channel_index(8) * 6 + channel_index(0)
}

/// Translate a 24-bit RGB value into the closest color-cube and
/// grayscale-ramp candidates, nearest-first.
///
/// Distance is measured between the candidate's rendered RGB and the
/// input RGB, both treated as unsigned 24-bit integers; exact matches
/// dominate in practice, so this crude metric rarely matters.
#[must_use]
pub fn translate(rgb: u32) -> Translation {
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;

    let average = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;

    let mut candidates = [
        Candidate {
            kind: ColorKind::Color,
            rgb: scale_color(r, g, b),
        },
        Candidate {
            kind: ColorKind::Gray,
            rgb: scale_gray(average as u8),
        },
    ];
    candidates.sort_by_key(|c| i64::from(c.rgb).abs_diff(i64::from(rgb)));

    tracing::trace!(
        rgb,
        chosen = ?candidates[0].kind,
        "translate fell back to nearest candidate"
    );

    Translation { candidates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn translate_pure_red_hits_the_cube() {
        let t = translate(0xff_0000);
        assert_eq!(t.candidates()[0].kind, ColorKind::Color);
        assert_eq!(t.code(), 196);
    }

    #[test]
    fn translate_is_idempotent_on_cube_hits() {
        let t1 = translate(0x00_ff00);
        if t1.candidates()[0].kind == ColorKind::Color {
            let t2 = translate(scale_color(0, 255, 0));
            assert_eq!(t1.code(), t2.code());
        }
    }

    #[test]
    fn gray_palette_endpoints() {
        assert_eq!(gray_palette(0).1, 232);
        assert_eq!(gray_palette(23).1, 255);
        assert_eq!(gray_palette(-5).1, 232);
        assert_eq!(gray_palette(99).1, 255);
    }

    #[test]
    fn color_palette_round_trips_through_code() {
        let (rgb, code) = color_palette(5, 0, 0);
        assert_eq!(code, 196);
        assert_eq!(color_code(rgb), 196);
    }

    #[test]
    fn code_string_matches_code() {
        let t = translate(0xff_0000);
        assert_eq!(t.code_string(), "196");
    }

    #[test]
    fn scale_color_snaps_to_cube_ladder() {
        let rgb = scale_color(0x10, 0x70, 0xff);
        let r = (rgb >> 16) & 0xFF;
        let g = (rgb >> 8) & 0xFF;
        let b = rgb & 0xFF;
        for channel in [r, g, b] {
            assert!(
                [0, 0x5f, 0x87, 0xaf, 0xd7, 0xff].contains(&channel),
                "channel {channel:#x} not on cube ladder"
            );
        }
    }
}
