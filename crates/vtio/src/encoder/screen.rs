//! Whole-screen operations: clearing, alt-screen save/restore, line wrap,
//! and mouse tracking mode.

use super::{escape, escape_int};

/// Clear the entire screen and home the caret (`CSI H` then `CSI 2J`).
#[must_use]
pub fn clear() -> Vec<u8> {
    let mut out = escape("H", &[]);
    out.extend(escape("2J", &[]));
    out
}

/// Seek to line `lineno` and clear it.
#[must_use]
pub fn clear_line(lineno: i32) -> Vec<u8> {
    let mut out = super::seek_line(lineno);
    out.extend(clear_current_line());
    out
}

/// Clear `n` lines relative to the caret (`CSI nJ`).
#[must_use]
pub fn clear_to_line(n: i32) -> Vec<u8> {
    escape_int("J", n)
}

/// Clear from the caret to the end of the screen (`CSI J`).
#[must_use]
pub fn clear_to_bottom() -> Vec<u8> {
    escape("J", &[])
}

/// Clear from the start of the line to the caret (`CSI 1K`).
#[must_use]
pub fn clear_before_caret() -> Vec<u8> {
    escape("1K", &[])
}

/// Clear from the caret to the end of the line (`CSI K`).
#[must_use]
pub fn clear_after_caret() -> Vec<u8> {
    escape("K", &[])
}

/// Clear the entire current line without moving the caret.
#[must_use]
pub fn clear_current_line() -> Vec<u8> {
    let mut out = clear_before_caret();
    out.extend(clear_after_caret());
    out
}

/// Enable automatic line wrap (DECAWM set, `CSI ?7h`).
#[must_use]
pub fn enable_line_wrap() -> Vec<u8> {
    escape("?7h", &[])
}

/// Disable automatic line wrap (DECAWM reset, `CSI ?7l`).
#[must_use]
pub fn disable_line_wrap() -> Vec<u8> {
    escape("?7l", &[])
}

/// Switch to the alternate screen buffer (`CSI ?1049h`).
#[must_use]
pub fn save_screen() -> Vec<u8> {
    escape("?1049h", &[])
}

/// Switch back to the primary screen buffer (`CSI ?1049l`).
#[must_use]
pub fn restore_screen() -> Vec<u8> {
    escape("?1049l", &[])
}

/// Enable button-event and SGR extended mouse reporting (DECSET 1002 +
/// 1006).
#[must_use]
pub fn enable_mouse() -> Vec<u8> {
    let mut out = escape("?1002h", &[]);
    out.extend(escape("?1006h", &[]));
    out
}

/// Disable mouse reporting (DECRST 1002 + 1006).
#[must_use]
pub fn disable_mouse() -> Vec<u8> {
    let mut out = escape("?1002l", &[]);
    out.extend(escape("?1006l", &[]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clear_homes_then_wipes() {
        assert_eq!(clear(), b"\x1b[H\x1b[2J");
    }

    #[test]
    fn current_line_clears_both_halves() {
        assert_eq!(clear_current_line(), b"\x1b[1K\x1b[K");
    }

    #[test]
    fn alt_screen_pair() {
        assert_eq!(save_screen(), b"\x1b[?1049h");
        assert_eq!(restore_screen(), b"\x1b[?1049l");
    }

    #[test]
    fn mouse_pair_sets_both_modes() {
        assert_eq!(enable_mouse(), b"\x1b[?1002h\x1b[?1006h");
        assert_eq!(disable_mouse(), b"\x1b[?1002l\x1b[?1006l");
    }
}
