//! Single-chunk decode algorithm plus the re-entrant buffer that lets it
//! tolerate escape sequences split across read boundaries.

use crate::error::DecodeError;
use crate::input::event::Character;
use crate::input::mouse;
use crate::input::tables::{CONTROL_CHARACTERS, ESCAPE_CODES};
use crate::modifiers::Modifiers;

const ESC: char = '\x1b';

/// Decode a single standalone chunk with no carry-over state. Prefer
/// [`Parser::decode`] for a live input stream, since a lone ESC (or an
/// escape sequence cut off by a read boundary) at the end of `chunk`
/// cannot be resolved without seeing what follows.
///
/// # Errors
///
/// Returns [`DecodeError`] if `chunk` is not valid UTF-8.
pub fn decode(chunk: &[u8]) -> Result<Vec<Character>, DecodeError> {
    let mut parser = Parser::new();
    parser.decode(chunk)
}

/// Resolve a literal character (outside any C0/escape table entry) into
/// its `literal` event: identity is the lowercased form, with `shift`
/// set whenever that differs from the source character.
fn literal(c: char) -> Character {
    let identity = c.to_lowercase().next().unwrap_or(c);
    let modifiers = if identity != c { Modifiers::SHIFT } else { Modifiers::empty() };
    Character::Literal { source: c, identity, modifiers }
}

fn literal_events(data: &str) -> impl Iterator<Item = Character> + '_ {
    data.chars().map(|c| {
        CONTROL_CHARACTERS.get(&c).cloned().unwrap_or_else(|| literal(c))
    })
}

/// Resolve the body of bytes following one (or more, for meta-escape
/// runs) leading ESC into its event: a table hit, a mouse report, or a
/// generic `escaped` event carrying the raw body.
pub(crate) fn escaped_events(body: &str) -> Character {
    if let Some(event) = ESCAPE_CODES.get(body) {
        return event.clone();
    }
    if body.starts_with("[<") {
        if let Some(event) = mouse::decode(body) {
            return event;
        }
    }
    Character::Escaped { source: body.into() }
}

/// Whether `body` (the non-empty piece following some run of ESC bytes)
/// looks like a complete sequence rather than one truncated by a read
/// boundary.
///
/// This is a heuristic, not a full CSI/SS3 grammar: a body is complete
/// if it already matches a known table entry, if it is a terminated
/// SGR-1006 mouse report, or if its last byte falls in the intermediate/
/// final byte range (`0x40..=0x7e`) conventional ANSI sequences end on.
/// Anything else (bare `[`/`O` prefixes, parameter digits with no final
/// byte yet) is treated as still arriving.
fn looks_complete(body: &str) -> bool {
    if ESCAPE_CODES.contains_key(body) {
        return true;
    }
    if let Some(stripped) = body.strip_prefix("[<") {
        let _ = stripped;
        return body.ends_with('M') || body.ends_with('m');
    }
    matches!(body.chars().last(), Some(c) if matches!(c as u32, 0x40..=0x7e))
}

/// Incremental decoder that tolerates escape sequences split across
/// [`decode`](Parser::decode) calls by holding back an unterminated tail
/// until either a later call completes it or [`flush`](Parser::flush)
/// is asked to resolve it unconditionally.
#[derive(Debug, Default)]
pub struct Parser {
    pending: String,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self { pending: String::new() }
    }

    /// Whether a prior call left an unterminated escape sequence
    /// buffered, waiting for more bytes.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Decode one chunk of input, carrying forward any escape sequence
    /// left incomplete by a prior call.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `chunk` (combined with any buffered
    /// bytes) is not valid UTF-8.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<Vec<Character>, DecodeError> {
        let text = std::str::from_utf8(chunk).map_err(|source| DecodeError { source })?;

        let mut data = std::mem::take(&mut self.pending);
        data.push_str(text);

        if data.is_empty() {
            return Ok(Vec::new());
        }

        let Some(first) = data.find(ESC) else {
            return Ok(literal_events(&data).collect());
        };

        let mut events = Vec::new();
        if first > 0 {
            // Matches the reference decoder: a non-empty run of plain
            // text preceding the first ESC in a chunk is folded into a
            // single escaped-style lookup rather than split into
            // per-character literals.
            events.push(escaped_events(&data[..first]));
        }

        let tail = &data[first..];
        let mut pieces = tail.split(ESC).peekable();
        pieces.next(); // the piece before tail's leading ESC is always empty

        let mut escape_level: u32 = 0;
        while let Some(piece) = pieces.next() {
            if piece.is_empty() {
                escape_level += 1;
                continue;
            }

            let is_last = pieces.peek().is_none();
            if is_last && !looks_complete(piece) {
                let mut buffered = String::with_capacity(piece.len() + escape_level as usize + 1);
                for _ in 0..=escape_level {
                    buffered.push(ESC);
                }
                buffered.push_str(piece);
                self.pending = buffered;
                tracing::debug!(bytes = self.pending.len(), "buffering incomplete escape sequence");
                return Ok(events);
            }

            let mut body = String::with_capacity(piece.len() + escape_level as usize);
            for _ in 0..escape_level {
                body.push(ESC);
            }
            body.push_str(piece);
            events.push(escaped_events(&body));
            escape_level = 0;
        }

        if escape_level > 0 {
            // A run of bare ESCs with nothing following in this chunk:
            // may be `escape_level + 1` standalone Escape presses, or a
            // sequence about to continue in the next chunk. We cannot
            // tell, so we buffer rather than guess (see flush()).
            let mut buffered = String::with_capacity(escape_level as usize + 1);
            for _ in 0..=escape_level {
                buffered.push(ESC);
            }
            self.pending = buffered;
            tracing::debug!(bytes = self.pending.len(), "buffering trailing escape run");
        }

        Ok(events)
    }

    /// Force-resolve any buffered, unterminated escape sequence into an
    /// event, for use when the caller knows no more bytes are coming
    /// (stream EOF). Returns `None` if nothing is pending.
    pub fn flush(&mut self) -> Option<Character> {
        if self.pending.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.pending);
        let body = raw.strip_prefix(ESC).unwrap_or(&raw);
        Some(escaped_events(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::{Character, NavigationName, Point};
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_round_trip() {
        let events = decode(b"A").unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Character::Literal { source, identity, modifiers } => {
                assert_eq!(*source, 'A');
                assert_eq!(*identity, 'a');
                assert_eq!(*modifiers, Modifiers::SHIFT);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn plain_up_arrow() {
        let events = decode(b"\x1b[A").unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Character::Navigation { identity, modifiers, .. } => {
                assert_eq!(*identity, NavigationName::Up);
                assert_eq!(*modifiers, Modifiers::empty());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn control_up_arrow_from_ladder() {
        let events = decode(b"\x1b[1;5A").unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Character::Navigation { identity, modifiers, .. } => {
                assert_eq!(*identity, NavigationName::Up);
                assert_eq!(*modifiers, Modifiers::CONTROL);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn mouse_press_scenario() {
        let events = decode(b"\x1b[<0;10;20M").unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Character::Mouse { payload, modifiers, .. } => {
                assert_eq!(payload.point, Point { x: 10, y: 20 });
                assert_eq!(payload.action, 1);
                assert_eq!(*modifiers, Modifiers::empty());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn split_read_is_buffered_then_completed() {
        let mut parser = Parser::new();
        let first = parser.decode(b"\x1b[1;5").unwrap();
        assert!(first.is_empty());
        assert!(parser.has_pending());

        let second = parser.decode(b"A").unwrap();
        assert_eq!(second.len(), 1);
        match &second[0] {
            Character::Navigation { identity, modifiers, .. } => {
                assert_eq!(*identity, NavigationName::Up);
                assert_eq!(*modifiers, Modifiers::CONTROL);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!parser.has_pending());
    }

    #[test]
    fn flush_resolves_a_lone_trailing_escape() {
        let mut parser = Parser::new();
        let events = parser.decode(b"\x1b").unwrap();
        assert!(events.is_empty());
        assert!(parser.has_pending());

        let flushed = parser.flush().expect("pending escape resolves");
        match flushed {
            Character::Control { identity, .. } => {
                assert_eq!(identity, crate::input::event::ControlName::Escape);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(!parser.has_pending());
    }

    #[test]
    fn control_byte_maps_to_letter() {
        let events = decode(b"\x01").unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            Character::Control { identity, modifiers, .. } => {
                assert_eq!(*identity, crate::input::event::ControlName::Letter('a'));
                assert_eq!(*modifiers, Modifiers::CONTROL);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
