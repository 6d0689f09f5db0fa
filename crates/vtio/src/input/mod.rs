//! Decoding raw terminal input into structured [`Character`] events.

mod event;
mod mouse;
mod parser;
mod tables;

pub use event::{
    Character, ControlName, DeltaKind, FunctionKey, NavigationName, PasteEdge, Point,
    PointerEvent,
};
pub use parser::{decode, Parser};
