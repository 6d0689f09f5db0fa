//! Terminal color values: either a 24-bit RGB literal or a reference into
//! a named palette slot.

pub use xtermcolor::{Ansi16, PaletteSlot};

/// A color usable with [`style`](crate::encoder::style) and friends.
///
/// Positive (RGB) and negative (slot) identifiers in the original design
/// are modeled here as an explicit two-variant enum rather than a signed
/// integer, so callers cannot accidentally treat one as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// A 24-bit truecolor literal.
    Rgb(u8, u8, u8),
    /// A named, themeable palette slot.
    Slot(PaletteSlot),
}

impl Color {
    /// Look up a named slot (e.g. `"blue"`, `"absolute-cyan"`). Returns
    /// `None` for unrecognized names.
    #[must_use]
    pub fn named(name: &str) -> Option<Color> {
        xtermcolor::slots::named(name).map(Color::Slot)
    }

    /// The 24-bit RGB value, packed as `0x00RRGGBB`.
    #[must_use]
    pub const fn rgb_u32(self) -> Option<u32> {
        match self {
            Color::Rgb(r, g, b) => {
                Some((r as u32) << 16 | (g as u32) << 8 | b as u32)
            }
            Color::Slot(_) => None,
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl From<PaletteSlot> for Color {
    fn from(slot: PaletteSlot) -> Self {
        Color::Slot(slot)
    }
}
