//! Byte-sequence synthesis for cursor movement, styled text, screen
//! control, and local region edits.
//!
//! Every function here is a pure value-to-bytes mapping with no internal
//! state; callers own the file descriptor and are responsible for
//! writing the returned bytes.

mod cursor;
mod region;
mod screen;
mod style;

pub use cursor::*;
pub use region::*;
pub use screen::*;
pub use style::{
    background, color_string, foreground, overwrite, renderline, style, Ground, Render,
    StyleFlags,
};

const ESC: u8 = 0x1b;

/// Build a CSI sequence: ESC `[`, the parts joined by `;`, then
/// `terminator`.
pub(crate) fn escape(terminator: &str, parts: &[&str]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + parts.iter().map(|p| p.len() + 1).sum::<usize>() + terminator.len());
    out.push(ESC);
    out.push(b'[');
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(b';');
        }
        out.extend_from_slice(part.as_bytes());
    }
    out.extend_from_slice(terminator.as_bytes());
    out
}

pub(crate) fn escape_int(terminator: &str, n: impl itoa::Integer) -> Vec<u8> {
    let mut buf = itoa::Buffer::new();
    escape(terminator, &[buf.format(n)])
}
