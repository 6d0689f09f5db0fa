//! SGR text styling: style flags, truecolor/palette color selection, and
//! the control-picture translation applied to printed text.

use crate::color::{Color, PaletteSlot};

bitflags::bitflags! {
    /// The ten SGR text attributes this encoder knows how to toggle.
    #[derive(Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StyleFlags: u16 {
        const BOLD             = 0b0000_0000_0001;
        const FEINT             = 0b0000_0000_0010;
        const ITALIC            = 0b0000_0000_0100;
        const UNDERLINE         = 0b0000_0000_1000;
        const DOUBLE_UNDERLINE  = 0b0000_0001_0000;
        const BLINK             = 0b0000_0010_0000;
        const RAPID             = 0b0000_0100_0000;
        const REVERSE           = 0b0000_1000_0000;
        const INVISIBLE         = 0b0001_0000_0000;
        const CROSS             = 0b0010_0000_0000;
    }
}

/// `(flag, initiate code, terminate code)`, in the order they should be
/// emitted when several are set at once.
const STYLE_CODES: [(StyleFlags, &str, &str); 10] = [
    (StyleFlags::BOLD, "1", "22"),
    (StyleFlags::FEINT, "2", "22"),
    (StyleFlags::ITALIC, "3", "23"),
    (StyleFlags::UNDERLINE, "4", "24"),
    (StyleFlags::DOUBLE_UNDERLINE, "21", "24"),
    (StyleFlags::BLINK, "5", "25"),
    (StyleFlags::RAPID, "6", "25"),
    (StyleFlags::REVERSE, "7", "27"),
    (StyleFlags::INVISIBLE, "8", "28"),
    (StyleFlags::CROSS, "9", "29"),
];

/// Which SGR color slot (foreground `38;*` or background `48;*`) a
/// [`color_string`] call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ground {
    Foreground,
    Background,
}

/// Resolve one [`Color`] into the SGR parameter(s) for `ground`, without
/// the leading `CSI`/trailing `m` — e.g. `"38;2;255;0;0"` or `"94"`.
#[must_use]
pub fn color_string(color: Color, ground: Ground) -> String {
    match color {
        Color::Rgb(r, g, b) => {
            let select = match ground {
                Ground::Foreground => "38;2",
                Ground::Background => "48;2",
            };
            format!("{select};{r};{g};{b}")
        }
        Color::Slot(PaletteSlot::TerminalDefault) => match ground {
            Ground::Foreground => "39".to_string(),
            Ground::Background => "49".to_string(),
        },
        Color::Slot(PaletteSlot::Relative(ansi)) => match ground {
            Ground::Foreground => ansi.relative_foreground().to_string(),
            Ground::Background => ansi.relative_background().to_string(),
        },
        Color::Slot(PaletteSlot::Absolute(ansi)) => match ground {
            Ground::Foreground => ansi.absolute_foreground().to_string(),
            Ground::Background => ansi.absolute_background().to_string(),
        },
        Color::Slot(PaletteSlot::Extension(code)) => {
            let select = match ground {
                Ground::Foreground => "38;5",
                Ground::Background => "48;5",
            };
            format!("{select};{code}")
        }
    }
}

/// `color_string(color, Ground::Foreground)`.
#[must_use]
pub fn foreground(color: Color) -> String {
    color_string(color, Ground::Foreground)
}

/// `color_string(color, Ground::Background)`.
#[must_use]
pub fn background(color: Color) -> String {
    color_string(color, Ground::Background)
}

/// Replace each C0 control byte (`U+0000`..`U+001F`) in `text` with its
/// Unicode control-picture glyph (`U+2400` + the byte value), so raw
/// control bytes never reach the terminal as literal text.
fn translate_control_pictures(text: &str) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code < 0x20 {
                char::from_u32(0x2400 + code).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Render parameters for one [`style`] call: the colors to apply, which
/// style flags to toggle, and whether the trailing reset should re-emit
/// this render's own foreground/background afterward (for spans that
/// share an ambient ground color with their neighbors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Render {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub styles: StyleFlags,
    pub reset_foreground: bool,
    pub reset_background: bool,
}

/// Style `text` per `render`: an SGR prefix (style flags, then
/// foreground, then background), the text itself (control bytes
/// translated to picture glyphs), an SGR reset, and — when requested —
/// a trailing re-selection of `render`'s own ground colors.
#[must_use]
pub fn style(text: &str, render: &Render) -> Vec<u8> {
    let mut prefix_parts: Vec<String> = Vec::new();
    for (flag, initiate, _) in STYLE_CODES {
        if render.styles.contains(flag) {
            prefix_parts.push(initiate.to_string());
        }
    }
    if let Some(fg) = render.foreground {
        prefix_parts.push(foreground(fg));
    }
    if let Some(bg) = render.background {
        prefix_parts.push(background(bg));
    }

    let mut out = Vec::new();
    if !prefix_parts.is_empty() {
        let refs: Vec<&str> = prefix_parts.iter().map(String::as_str).collect();
        out.extend(super::escape("m", &refs));
    }

    out.extend(translate_control_pictures(text).into_bytes());

    let mut suffix_parts = vec!["0".to_string()];
    if render.reset_foreground {
        if let Some(fg) = render.foreground {
            suffix_parts.push(foreground(fg));
        }
    }
    if render.reset_background {
        if let Some(bg) = render.background {
            suffix_parts.push(background(bg));
        }
    }
    let refs: Vec<&str> = suffix_parts.iter().map(String::as_str).collect();
    out.extend(super::escape("m", &refs));

    out
}

/// Style each `(text, render)` pair in `spans` and concatenate the
/// results.
#[must_use]
pub fn renderline(spans: &[(&str, Render)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (text, render) in spans {
        out.extend(style(text, render));
    }
    out
}

/// Seek to each `offset` (relative to the caret, cumulative) and write
/// the paired styled text — used to overwrite specific columns of
/// already-rendered output.
#[must_use]
pub fn overwrite(spans: &[(i32, &str, Render)]) -> Vec<u8> {
    let mut out = Vec::new();
    for (offset, text, render) in spans {
        out.extend(super::seek_horizontal_relative(*offset));
        out.extend(style(text, render));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Ansi16;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_style_resets_to_zero() {
        let render = Render::default();
        assert_eq!(style("hi", &render), b"hi\x1b[0m");
    }

    #[test]
    fn bold_prefixes_and_resets() {
        let render = Render {
            styles: StyleFlags::BOLD,
            ..Default::default()
        };
        assert_eq!(style("x", &render), b"\x1b[1mx\x1b[0m");
    }

    #[test]
    fn truecolor_foreground_uses_38_2() {
        let render = Render {
            foreground: Some(Color::Rgb(255, 0, 0)),
            ..Default::default()
        };
        assert_eq!(style("x", &render), b"\x1b[38;2;255;0;0mx\x1b[0m");
    }

    #[test]
    fn reset_foreground_reselects_after_reset() {
        let render = Render {
            foreground: Some(Color::Slot(PaletteSlot::Relative(Ansi16::Blue))),
            reset_foreground: true,
            ..Default::default()
        };
        assert_eq!(style("x", &render), b"\x1b[34mx\x1b[0;34m");
    }

    #[test]
    fn control_bytes_become_picture_glyphs() {
        let render = Render::default();
        let out = style("\x01", &render);
        let text_bytes = &out[..out.len() - 4]; // strip trailing "\x1b[0m"
        assert_eq!(std::str::from_utf8(text_bytes).unwrap(), "\u{2401}");
    }

    #[test]
    fn terminal_default_slot_uses_39_49() {
        assert_eq!(foreground(Color::Slot(PaletteSlot::TerminalDefault)), "39");
        assert_eq!(background(Color::Slot(PaletteSlot::TerminalDefault)), "49");
    }
}
