//! Static lookup tables for the input decoder: C0 control characters and
//! the full escape-code table (base entries plus the modifier-ladder
//! expansion for navigation/function/delta keys).
//!
//! Both tables are built once, at first use, into a plain `HashMap`
//! rather than recomputed per read — the set of keys is small and fixed,
//! so a `HashMap` built once behind a `LazyLock` gives the same
//! "build it once at initialization" property the escape table calls
//! for without needing a build-time code generator for entries that are
//! themselves generated by a small loop rather than read from a static
//! list.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::input::event::{
    Character, ControlName, DeltaKind, FunctionKey, NavigationName, PasteEdge,
};
use crate::modifiers::Modifiers;

/// The five-element xterm modifier ladder used throughout the escape
/// table: CSI parameter value paired with the modifier set it encodes,
/// built from [`Modifiers::from_xterm_param`] rather than hand-duplicated.
fn modifier_ladder() -> [(u8, Modifiers); 5] {
    [2, 3, 5, 6, 7].map(|param| (param, Modifiers::from_xterm_param(param)))
}

pub static CONTROL_CHARACTERS: LazyLock<HashMap<char, Character>> =
    LazyLock::new(build_control_characters);

pub static ESCAPE_CODES: LazyLock<HashMap<Box<str>, Character>> =
    LazyLock::new(build_escape_codes);

fn build_control_characters() -> HashMap<char, Character> {
    let mut map = HashMap::new();

    // C0 bytes 0x01-0x1a default to their corresponding letter, a-z, with
    // control=true. Specific bytes are overridden below with human names.
    for (i, letter) in ('a'..='z').enumerate() {
        let byte = (i + 1) as u8;
        let source = char::from(byte);
        map.insert(
            source,
            Character::Control {
                source: source.to_string().into_boxed_str(),
                identity: ControlName::Letter(letter),
                modifiers: Modifiers::CONTROL,
            },
        );
    }

    let mut control = |byte: u8, identity: ControlName, modifiers: Modifiers| {
        let source = char::from(byte);
        map.insert(
            source,
            Character::Control {
                source: source.to_string().into_boxed_str(),
                identity,
                modifiers,
            },
        );
    };
    control(0x00, ControlName::Nul, Modifiers::empty());
    control(b' ', ControlName::Space, Modifiers::empty());
    control(b'\t', ControlName::Tab, Modifiers::empty());
    control(b'\r', ControlName::Return, Modifiers::empty());
    control(b'\n', ControlName::Newline, Modifiers::empty());
    control(0x1c, ControlName::Bracket, Modifiers::CONTROL);
    control(0x1d, ControlName::Backslash, Modifiers::CONTROL);
    control(0x1f, ControlName::Underscore, Modifiers::CONTROL);

    let mut delta_control = |byte: u8, identity: DeltaKind| {
        let source = char::from(byte);
        map.insert(
            source,
            Character::Delta {
                source: source.to_string().into_boxed_str(),
                identity,
                modifiers: Modifiers::empty(),
            },
        );
    };
    delta_control(0x7f, DeltaKind::Delete);
    delta_control(0x08, DeltaKind::Backspace);

    map
}

fn control(source: &str, identity: ControlName, modifiers: Modifiers) -> Character {
    Character::Control {
        source: source.into(),
        identity,
        modifiers,
    }
}

fn delta(source: String, identity: DeltaKind, modifiers: Modifiers) -> Character {
    Character::Delta {
        source: source.into_boxed_str(),
        identity,
        modifiers,
    }
}

fn navigation(source: String, identity: NavigationName, modifiers: Modifiers) -> Character {
    Character::Navigation {
        source: source.into_boxed_str(),
        identity,
        modifiers,
    }
}

fn function(source: String, identity: FunctionKey, modifiers: Modifiers) -> Character {
    Character::Function {
        source: source.into_boxed_str(),
        identity,
        modifiers,
    }
}

fn build_escape_codes() -> HashMap<Box<str>, Character> {
    let mut map = HashMap::new();

    map.insert(
        "".into(),
        control("", ControlName::Escape, Modifiers::empty()),
    );
    map.insert(
        " ".into(),
        control(" ", ControlName::Space, Modifiers::META),
    );
    map.insert(
        "\t".into(),
        control("\t", ControlName::Tab, Modifiers::META),
    );
    // The source has a duplicate `[Z` entry (shift, then shift+meta); the
    // second silently wins there. We keep only the shift variant.
    map.insert(
        "[Z".into(),
        control("[Z", ControlName::Tab, Modifiers::SHIFT),
    );
    map.insert(
        "OM".into(),
        control("OM", ControlName::Return, Modifiers::empty()),
    );

    map.insert(
        "\x7f".into(),
        delta("\x7f".into(), DeltaKind::Delete, Modifiers::META),
    );
    map.insert(
        "\x08".into(),
        delta("\x08".into(), DeltaKind::Backspace, Modifiers::META),
    );

    map.insert(
        "[2~".into(),
        delta("[2~".into(), DeltaKind::Insert, Modifiers::empty()),
    );
    map.insert(
        "[3~".into(),
        delta("[3~".into(), DeltaKind::Delete, Modifiers::empty()),
    );

    for (code, name) in [
        ('A', NavigationName::Up),
        ('B', NavigationName::Down),
        ('C', NavigationName::Right),
        ('D', NavigationName::Left),
    ] {
        map.insert(
            format!("[{code}").into(),
            navigation(format!("[{code}"), name, Modifiers::empty()),
        );
        map.insert(
            format!("O{code}").into(),
            navigation(format!("O{code}"), name, Modifiers::empty()),
        );
    }
    map.insert(
        "[H".into(),
        navigation("[H".into(), NavigationName::Home, Modifiers::empty()),
    );
    map.insert(
        "[F".into(),
        navigation("[F".into(), NavigationName::End, Modifiers::empty()),
    );
    map.insert(
        "[5~".into(),
        navigation("[5~".into(), NavigationName::PageUp, Modifiers::empty()),
    );
    map.insert(
        "[6~".into(),
        navigation("[6~".into(), NavigationName::PageDown, Modifiers::empty()),
    );

    for (code, n) in [('P', 1u8), ('Q', 2), ('R', 3), ('S', 4)] {
        let source = format!("O{code}");
        map.insert(
            source.clone().into(),
            function(source, FunctionKey::Numbered(n), Modifiers::empty()),
        );
    }
    for (kid, n) in [
        (15, 5u8),
        (17, 6),
        (18, 7),
        (19, 8),
        (20, 9),
        (21, 10),
        (23, 11),
        (24, 12),
    ] {
        let source = format!("[{kid}~");
        map.insert(
            source.clone().into(),
            function(source, FunctionKey::Numbered(n), Modifiers::empty()),
        );
    }
    map.insert(
        "[29~".into(),
        function("[29~".into(), FunctionKey::Applications, Modifiers::empty()),
    );
    map.insert(
        "[34~".into(),
        function("[34~".into(), FunctionKey::Windows, Modifiers::empty()),
    );

    map.insert(
        "[200~".into(),
        Character::Paste {
            source: "[200~".into(),
            identity: PasteEdge::Start,
        },
    );
    map.insert(
        "[201~".into(),
        Character::Paste {
            source: "[201~".into(),
            identity: PasteEdge::Stop,
        },
    );

    // --- modifier-ladder expansion ---

    for (formatting_prefix, identity) in
        [("[2;", DeltaKind::Insert), ("[3;", DeltaKind::Delete)]
    {
        for (param, mods) in modifier_ladder() {
            let source = format!("{formatting_prefix}{param}~");
            map.insert(source.clone().into(), delta(source, identity, mods));
        }
    }

    for (num, name) in [("5", NavigationName::PageUp), ("6", NavigationName::PageDown)] {
        for (param, mods) in modifier_ladder() {
            let source = format!("[{num};{param}~");
            map.insert(source.clone().into(), navigation(source, name, mods));
        }
    }

    for (final_byte, name) in [
        ('A', NavigationName::Up),
        ('B', NavigationName::Down),
        ('C', NavigationName::Right),
        ('D', NavigationName::Left),
        ('H', NavigationName::Home),
        ('F', NavigationName::End),
    ] {
        for (param, mods) in modifier_ladder() {
            let source = format!("[1;{param}{final_byte}");
            map.insert(source.clone().into(), navigation(source, name, mods));
        }
    }

    for (final_byte, n) in [('P', 1u8), ('Q', 2), ('R', 3), ('S', 4)] {
        for (param, mods) in modifier_ladder() {
            let source = format!("[1;{param}{final_byte}");
            map.insert(
                source.clone().into(),
                function(source, FunctionKey::Numbered(n), mods),
            );
        }
    }

    // F5-F12. The source carries a "media keys" block here that is a
    // byte-for-byte copy of this one and adds nothing; it is omitted.
    for (kid, n) in [
        (15, 5u8),
        (17, 6),
        (18, 7),
        (19, 8),
        (20, 9),
        (21, 10),
        (23, 11),
        (24, 12),
    ] {
        for (param, mods) in modifier_ladder() {
            let source = format!("[{kid};{param}~");
            map.insert(
                source.clone().into(),
                function(source, FunctionKey::Numbered(n), mods),
            );
        }
    }

    for (kid, key) in [(29, FunctionKey::Applications), (34, FunctionKey::Windows)] {
        for (param, mods) in modifier_ladder() {
            let source = format!("[{kid};{param}~");
            map.insert(source.clone().into(), function(source, key, mods));
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shift_tab_has_only_one_entry() {
        let event = ESCAPE_CODES.get("[Z").expect("[Z present");
        match event {
            Character::Control { modifiers, .. } => {
                assert_eq!(*modifiers, Modifiers::SHIFT);
            }
            other => panic!("unexpected event for [Z: {other:?}"),
        }
    }

    #[test]
    fn modifier_ladder_covers_up_arrow() {
        for (param, mods) in modifier_ladder() {
            let key = format!("[1;{param}A");
            let event = ESCAPE_CODES.get(key.as_str()).expect("ladder entry present");
            match event {
                Character::Navigation { identity, modifiers, .. } => {
                    assert_eq!(*identity, NavigationName::Up);
                    assert_eq!(*modifiers, mods);
                }
                other => panic!("unexpected event for {key}: {other:?}"),
            }
        }
    }

    #[test]
    fn control_characters_cover_letters() {
        let event = CONTROL_CHARACTERS.get(&'\u{1}').expect("0x01 maps to control+a");
        match event {
            Character::Control { identity, modifiers, .. } => {
                assert_eq!(*identity, ControlName::Letter('a'));
                assert_eq!(*modifiers, Modifiers::CONTROL);
            }
            other => panic!("unexpected event for 0x01: {other:?}"),
        }
    }

    #[test]
    fn overrides_win_over_letter_mapping() {
        let event = CONTROL_CHARACTERS.get(&'\t').expect("tab present");
        match event {
            Character::Control { identity, modifiers, .. } => {
                assert_eq!(*identity, ControlName::Tab);
                assert_eq!(*modifiers, Modifiers::empty());
            }
            other => panic!("unexpected event for tab: {other:?}"),
        }
    }
}
