//! SGR-1006 mouse report decoding.

use crate::input::event::{Character, Point, PointerEvent};
use crate::modifiers::Modifiers;

/// Decode an SGR-1006 mouse report body (everything after the leading
/// ESC, i.e. starting with `[<`) into a `mouse`/`drag`/`scroll` event.
///
/// `body` must start with `[<` and end with the press/release
/// terminator (`M` or `m`); callers dispatch here only after confirming
/// that prefix via [`escaped_events`](super::parser::escaped_events).
pub fn decode(body: &str) -> Option<Character> {
    let terminator = body.as_bytes().last().copied()?;
    if terminator != b'M' && terminator != b'm' {
        return None;
    }

    let params = body.get(2..body.len() - 1)?;
    let mut parts = params.split(';');
    let raw_button: i64 = parts.next()?.parse().ok()?;
    let x: i32 = parts.next()?.parse().ok()?;
    let y: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let (kind_is_scroll, offset, action) = if raw_button < 32 {
        let action = if terminator == b'M' { 1 } else { -1 };
        (false, 0, action)
    } else if raw_button < 64 {
        (false, 32, 0)
    } else {
        let offset = if raw_button % 2 != 0 { 65 } else { 64 };
        let action = if raw_button % 2 != 0 { 1 } else { -1 };
        (true, offset, action)
    };

    let mods_raw = raw_button - offset;
    let mut modifiers = Modifiers::empty();
    if mods_raw & 4 != 0 {
        modifiers |= Modifiers::SHIFT;
    }
    if mods_raw & 8 != 0 {
        modifiers |= Modifiers::META;
    }
    if mods_raw & 16 != 0 {
        modifiers |= Modifiers::CONTROL;
    }

    let payload = PointerEvent {
        point: Point { x, y },
        action,
        button_mask: (mods_raw & 0b11) as u8,
    };

    let source: Box<str> = body.into();
    Some(if raw_button < 32 {
        Character::Mouse { source, payload, modifiers }
    } else if raw_button < 64 {
        Character::Drag { source, payload, modifiers }
    } else {
        debug_assert!(kind_is_scroll);
        Character::Scroll { source, payload, modifiers }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn press_event() {
        let event = decode("[<0;10;20M").expect("decodes");
        match event {
            Character::Mouse { payload, modifiers, .. } => {
                assert_eq!(payload.point, Point { x: 10, y: 20 });
                assert_eq!(payload.action, 1);
                assert_eq!(payload.button_mask, 0);
                assert_eq!(modifiers, Modifiers::empty());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn drag_event_with_button_mask() {
        let event = decode("[<35;5;7M").expect("decodes");
        match event {
            Character::Drag { payload, modifiers, .. } => {
                assert_eq!(payload.point, Point { x: 5, y: 7 });
                assert_eq!(payload.action, 0);
                assert_eq!(payload.button_mask, 3);
                assert_eq!(modifiers, Modifiers::empty());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn scroll_up_on_odd_button() {
        let event = decode("[<65;1;1M").expect("decodes");
        match event {
            Character::Scroll { payload, .. } => {
                assert_eq!(payload.action, 1);
                assert_eq!(payload.button_mask, 0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn scroll_down_on_even_button() {
        let event = decode("[<64;1;1M").expect("decodes");
        match event {
            Character::Scroll { payload, .. } => {
                assert_eq!(payload.action, -1);
                assert_eq!(payload.button_mask, 0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn release_event_uses_lowercase_terminator() {
        let event = decode("[<0;1;1m").expect("decodes");
        match event {
            Character::Mouse { payload, .. } => assert_eq!(payload.action, -1),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
