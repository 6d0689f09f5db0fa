//! Symbolic color slot table.
//!
//! Terminal applications rarely want to hand-pick a precise RGB value for
//! every piece of chrome; they want "the foreground color" or "a border
//! that stands out a little from the background" and let the terminal's
//! own theme supply the actual pixels. [`PaletteSlot`] is that
//! indirection: a small closed set of named references into either the
//! tty-16 palette or a handful of fixed xterm-256 extension indices.

use std::fmt;

/// One of the eight base colors shared by the relative (normal-intensity)
/// and absolute (bright) halves of the tty-16 palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Ansi16 {
    /// SGR foreground parameter in the normal-intensity range (30-37).
    #[must_use]
    pub const fn relative_foreground(self) -> u8 {
        30 + self as u8
    }

    /// SGR foreground parameter in the bright range (90-97).
    #[must_use]
    pub const fn absolute_foreground(self) -> u8 {
        90 + self as u8
    }

    /// SGR background parameter in the normal-intensity range (40-47).
    #[must_use]
    pub const fn relative_background(self) -> u8 {
        40 + self as u8
    }

    /// SGR background parameter in the bright range (100-107).
    #[must_use]
    pub const fn absolute_background(self) -> u8 {
        100 + self as u8
    }
}

/// A color slot addressable by name: either a reference into the tty-16
/// palette (relative/absolute), a fixed xterm-256 extension index, or the
/// terminal's own ambient default.
///
/// Non-negative RGB literals are represented separately (see `vtio`'s
/// `Color` type, which wraps either a raw RGB triple or a `PaletteSlot`);
/// this type only models the named-slot half of that dual encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaletteSlot {
    /// The terminal's own configured default; emits no explicit SGR color
    /// parameter (SGR 39 foreground / 49 background).
    TerminalDefault,
    /// Normal-intensity tty-16 slot.
    Relative(Ansi16),
    /// Bright tty-16 slot.
    Absolute(Ansi16),
    /// A fixed xterm-256 palette index (16-255), used for slots bound to
    /// a specific extension color rather than a tty-16 theme slot.
    Extension(u8),
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteSlot::TerminalDefault => write!(f, "terminal-default"),
            PaletteSlot::Relative(c) => write!(f, "relative-{c:?}"),
            PaletteSlot::Absolute(c) => write!(f, "absolute-{c:?}"),
            PaletteSlot::Extension(code) => write!(f, "extension-{code}"),
        }
    }
}

/// Named color slots, including the project's own remapping of `cyan`,
/// `magenta`, `white`, and `black` onto fixed xterm-256 extension indices
/// so their hue stays stable across themes, and the aliasing of
/// `violet`/`teal`/`pink`/`orange` onto tty-16 slots.
static NAMED_SLOTS: phf::Map<&'static str, PaletteSlot> = phf::phf_map! {
    "terminal-default" => PaletteSlot::TerminalDefault,
    "application-border" => PaletteSlot::Absolute(Ansi16::Black),

    "black" => PaletteSlot::Extension(16),
    "red" => PaletteSlot::Relative(Ansi16::Red),
    "green" => PaletteSlot::Relative(Ansi16::Green),
    "yellow" => PaletteSlot::Relative(Ansi16::Yellow),
    "blue" => PaletteSlot::Relative(Ansi16::Blue),
    "magenta" => PaletteSlot::Extension(201),
    "cyan" => PaletteSlot::Extension(51),
    "white" => PaletteSlot::Extension(231),

    "gray" => PaletteSlot::Extension(248),
    "violet" => PaletteSlot::Relative(Ansi16::Magenta),
    "teal" => PaletteSlot::Relative(Ansi16::Cyan),
    "pink" => PaletteSlot::Absolute(Ansi16::Magenta),
    "orange" => PaletteSlot::Absolute(Ansi16::Cyan),
    "purple" => PaletteSlot::Extension(54),
    "chartreuse" => PaletteSlot::Extension(119),
    "olive" => PaletteSlot::Extension(101),
    "indigo" => PaletteSlot::Extension(55),
    "maroon" => PaletteSlot::Extension(89),
    "coral" => PaletteSlot::Extension(210),
    "beige" => PaletteSlot::Extension(231),
    "tan" => PaletteSlot::Extension(182),

    "background-limit" => PaletteSlot::Relative(Ansi16::Black),
    "relative-red" => PaletteSlot::Relative(Ansi16::Red),
    "relative-green" => PaletteSlot::Relative(Ansi16::Green),
    "relative-yellow" => PaletteSlot::Relative(Ansi16::Yellow),
    "relative-blue" => PaletteSlot::Relative(Ansi16::Blue),
    "relative-magenta" => PaletteSlot::Relative(Ansi16::Magenta),
    "relative-cyan" => PaletteSlot::Relative(Ansi16::Cyan),
    "foreground-adjacent" => PaletteSlot::Relative(Ansi16::White),
    "background-adjacent" => PaletteSlot::Absolute(Ansi16::Black),

    "absolute-red" => PaletteSlot::Absolute(Ansi16::Red),
    "absolute-green" => PaletteSlot::Absolute(Ansi16::Green),
    "absolute-yellow" => PaletteSlot::Absolute(Ansi16::Yellow),
    "absolute-blue" => PaletteSlot::Absolute(Ansi16::Blue),
    "absolute-magenta" => PaletteSlot::Absolute(Ansi16::Magenta),
    "absolute-cyan" => PaletteSlot::Absolute(Ansi16::Cyan),
    "foreground-limit" => PaletteSlot::Absolute(Ansi16::White),
};

/// Resolve a slot name (e.g. `"blue"`, `"absolute-cyan"`) to its
/// [`PaletteSlot`]. Unrecognized names return `None`; callers that want a
/// raw RGB value instead should use `Color::Rgb` directly.
#[must_use]
pub fn named(name: &str) -> Option<PaletteSlot> {
    NAMED_SLOTS.get(name).copied()
}
