//! Caret visibility, positioning, and the DEC save/restore cursor pair.

use super::{escape, escape_int};

/// Hide the caret (DECTCEM reset, `CSI ?25l`).
#[must_use]
pub fn caret_hide() -> Vec<u8> {
    escape("?25l", &[])
}

/// Show the caret.
///
/// Emitted as two separate sequences, `CSI ?12l` (stop blinking) then
/// `CSI ?25h` (DECTCEM set) — each with its own single `ESC [` prefix.
#[must_use]
pub fn caret_show() -> Vec<u8> {
    let mut out = escape("?12l", &[]);
    out.extend(escape("?25h", &[]));
    out
}

/// Move the caret to an absolute, 0-based `(column, row)` location. Wire
/// form is 1-based: `CSI <row+1> ; <col+1> H`.
#[must_use]
pub fn seek(x: i32, y: i32) -> Vec<u8> {
    let mut row = itoa::Buffer::new();
    let mut col = itoa::Buffer::new();
    escape("H", &[row.format(y + 1), col.format(x + 1)])
}

/// Seek to the beginning of line `lineno` (0-based).
#[must_use]
pub fn seek_line(lineno: i32) -> Vec<u8> {
    seek(0, lineno)
}

/// Return the caret to the start of the current line (plain `\r`, no
/// escape sequence involved).
#[must_use]
pub fn seek_start_of_line() -> Vec<u8> {
    vec![b'\r']
}

/// Move the caret horizontally by `n` columns: negative left (`CSI nD`),
/// positive right (`CSI nC`), zero emits nothing.
#[must_use]
pub fn seek_horizontal_relative(n: i32) -> Vec<u8> {
    match n.cmp(&0) {
        std::cmp::Ordering::Less => escape_int("D", -n),
        std::cmp::Ordering::Greater => escape_int("C", n),
        std::cmp::Ordering::Equal => Vec::new(),
    }
}

/// Move the caret vertically by `n` rows: negative up (`CSI nA`),
/// positive down (`CSI nB`), zero emits nothing.
#[must_use]
pub fn seek_vertical_relative(n: i32) -> Vec<u8> {
    match n.cmp(&0) {
        std::cmp::Ordering::Less => escape_int("A", -n),
        std::cmp::Ordering::Greater => escape_int("B", n),
        std::cmp::Ordering::Equal => Vec::new(),
    }
}

/// Move the caret by `(dx, dy)`, horizontal then vertical.
#[must_use]
pub fn seek_relative(dx: i32, dy: i32) -> Vec<u8> {
    let mut out = seek_horizontal_relative(dx);
    out.extend(seek_vertical_relative(dy));
    out
}

/// Move down one line, preserving column.
#[must_use]
pub fn seek_next_line() -> Vec<u8> {
    seek_vertical_relative(1)
}

/// Move to the start of the next line.
#[must_use]
pub fn seek_start_of_next_line() -> Vec<u8> {
    let mut out = seek_next_line();
    out.extend(seek_start_of_line());
    out
}

/// Save the caret position (DEC `ESC 7`).
#[must_use]
pub fn store_caret_position() -> Vec<u8> {
    vec![super::ESC, b'7']
}

/// Restore the caret position previously saved with
/// [`store_caret_position`] (DEC `ESC 8`).
#[must_use]
pub fn restore_caret_position() -> Vec<u8> {
    vec![super::ESC, b'8']
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hide_and_show_use_one_bracket_each() {
        assert_eq!(caret_hide(), b"\x1b[?25l");
        assert_eq!(caret_show(), b"\x1b[?12l\x1b[?25h");
    }

    #[test]
    fn seek_translates_to_one_based() {
        assert_eq!(seek(0, 0), b"\x1b[1;1H");
        assert_eq!(seek(9, 4), b"\x1b[5;10H");
    }

    #[test]
    fn horizontal_relative_picks_direction() {
        assert_eq!(seek_horizontal_relative(-3), b"\x1b[3D");
        assert_eq!(seek_horizontal_relative(3), b"\x1b[3C");
        assert_eq!(seek_horizontal_relative(0), b"");
    }

    #[test]
    fn store_and_restore_use_bare_escape() {
        assert_eq!(store_caret_position(), b"\x1b7");
        assert_eq!(restore_caret_position(), b"\x1b8");
    }
}
