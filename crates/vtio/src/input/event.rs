//! The `Character` event type: the atomic output of [`decode`](super::decode).

use std::fmt;

use crate::modifiers::Modifiers;
use crate::traits::TerseDisplay;

/// A 0-based screen coordinate, as reported by a mouse sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Symbolic identity of a `control`-type event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlName {
    Escape,
    Space,
    Tab,
    Return,
    Newline,
    Backspace,
    Delete,
    Nul,
    Bracket,
    Backslash,
    Underscore,
    /// `a`..`z`, for the C0 bytes without a dedicated name.
    Letter(char),
}

impl fmt::Display for ControlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlName::Escape => write!(f, "escape"),
            ControlName::Space => write!(f, "space"),
            ControlName::Tab => write!(f, "tab"),
            ControlName::Return => write!(f, "return"),
            ControlName::Newline => write!(f, "newline"),
            ControlName::Backspace => write!(f, "backspace"),
            ControlName::Delete => write!(f, "delete"),
            ControlName::Nul => write!(f, "nul"),
            ControlName::Bracket => write!(f, "bracket"),
            ControlName::Backslash => write!(f, "backslash"),
            ControlName::Underscore => write!(f, "underscore"),
            ControlName::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// Symbolic identity of a `navigation`-type event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationName {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for NavigationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NavigationName::Up => "up",
            NavigationName::Down => "down",
            NavigationName::Left => "left",
            NavigationName::Right => "right",
            NavigationName::Home => "home",
            NavigationName::End => "end",
            NavigationName::PageUp => "pageup",
            NavigationName::PageDown => "pagedown",
        };
        write!(f, "{s}")
    }
}

/// Symbolic identity of a `function`-type event: F1-F12, or one of the
/// two named media keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionKey {
    Numbered(u8),
    Applications,
    Windows,
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKey::Numbered(n) => write!(f, "f{n}"),
            FunctionKey::Applications => write!(f, "applications"),
            FunctionKey::Windows => write!(f, "windows"),
        }
    }
}

/// Symbolic identity of a `delta`-type event: keys that edit rather than
/// navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaKind {
    Insert,
    Delete,
    Backspace,
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeltaKind::Insert => "insert",
            DeltaKind::Delete => "delete",
            DeltaKind::Backspace => "backspace",
        };
        write!(f, "{s}")
    }
}

/// Which edge of a bracketed-paste span a `paste`-type event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PasteEdge {
    Start,
    Stop,
}

impl fmt::Display for PasteEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PasteEdge::Start => "start",
            PasteEdge::Stop => "stop",
        };
        write!(f, "{s}")
    }
}

/// Payload shared by `mouse`, `drag`, and `scroll` events.
///
/// `button_mask` is the low two bits of the raw SGR-1006 button field
/// (`(button - offset) & 0b11`); it is distinct from `modifiers`, which
/// carries the correctly-extracted shift/meta/control bits. Keeping them
/// as separate fields, rather than folding `button_mask` into
/// `modifiers`, avoids conflating "which button" with "which modifier
/// keys were held".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub point: Point,
    /// `+1` press/scroll-up, `-1` release/scroll-down, `0` drag-motion.
    pub action: i8,
    pub button_mask: u8,
}

/// The atomic output of the input parser.
///
/// Every variant carries `source`: the exact input that produced it (the
/// original bytes, minus the leading ESC for escape-derived events), so
/// callers can round-trip or log the raw sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Character {
    Literal {
        source: char,
        identity: char,
        modifiers: Modifiers,
    },
    Control {
        source: Box<str>,
        identity: ControlName,
        modifiers: Modifiers,
    },
    Delta {
        source: Box<str>,
        identity: DeltaKind,
        modifiers: Modifiers,
    },
    Navigation {
        source: Box<str>,
        identity: NavigationName,
        modifiers: Modifiers,
    },
    Function {
        source: Box<str>,
        identity: FunctionKey,
        modifiers: Modifiers,
    },
    Paste {
        source: Box<str>,
        identity: PasteEdge,
    },
    Mouse {
        source: Box<str>,
        payload: PointerEvent,
        modifiers: Modifiers,
    },
    Drag {
        source: Box<str>,
        payload: PointerEvent,
        modifiers: Modifiers,
    },
    Scroll {
        source: Box<str>,
        payload: PointerEvent,
        modifiers: Modifiers,
    },
    /// An escape sequence that matched no known pattern. Carries the raw
    /// bytes after ESC so higher layers retain full audit information.
    Escaped {
        source: Box<str>,
    },
}

impl TerseDisplay for Character {
    fn terse_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Character::Literal { identity, modifiers, .. } => {
                write!(f, "literal({identity:?}, {modifiers})")
            }
            Character::Control { identity, modifiers, .. } => {
                write!(f, "control({identity}, {modifiers})")
            }
            Character::Delta { identity, modifiers, .. } => {
                write!(f, "delta({identity}, {modifiers})")
            }
            Character::Navigation { identity, modifiers, .. } => {
                write!(f, "navigation({identity}, {modifiers})")
            }
            Character::Function { identity, modifiers, .. } => {
                write!(f, "function({identity}, {modifiers})")
            }
            Character::Paste { identity, .. } => write!(f, "paste({identity})"),
            Character::Mouse { payload, modifiers, .. } => {
                write!(
                    f,
                    "mouse(({}, {}), {}, {})",
                    payload.point.x, payload.point.y, payload.action, modifiers
                )
            }
            Character::Drag { payload, modifiers, .. } => {
                write!(
                    f,
                    "drag(({}, {}), {})",
                    payload.point.x, payload.point.y, modifiers
                )
            }
            Character::Scroll { payload, modifiers, .. } => {
                write!(
                    f,
                    "scroll(({}, {}), {}, {})",
                    payload.point.x, payload.point.y, payload.action, modifiers
                )
            }
            Character::Escaped { source } => write!(f, "escaped({source:?})"),
        }
    }
}
