//! Keyboard/mouse modifier bit set.

use std::fmt;

bitflags::bitflags! {
    /// The shift/meta/control modifier set carried by recognized escape
    /// sequences and mouse reports.
    ///
    /// The full xterm modifier ladder (2=shift, 3=meta, 5=ctrl,
    /// 6=shift+ctrl, 7=ctrl+meta) is captured by these three bits; a
    /// single byte is sufficient.
    #[derive(Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0000_0001;
        const META    = 0b0000_0010;
        const CONTROL = 0b0000_0100;
    }
}

impl Modifiers {
    /// Decode the xterm CSI modifier parameter (`2..=7`, as used in
    /// `CSI 1 ; <m> A`-style sequences) into a modifier set.
    ///
    /// Parameter values outside `2..=7` (including `1`, meaning "no
    /// modifiers") yield an empty set.
    #[must_use]
    pub const fn from_xterm_param(param: u8) -> Modifiers {
        match param {
            2 => Modifiers::SHIFT,
            3 => Modifiers::META,
            5 => Modifiers::CONTROL,
            6 => Modifiers::SHIFT.union(Modifiers::CONTROL),
            7 => Modifiers::CONTROL.union(Modifiers::META),
            _ => Modifiers::empty(),
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in [
            ("control", Modifiers::CONTROL),
            ("meta", Modifiers::META),
            ("shift", Modifiers::SHIFT),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn xterm_ladder_decodes() {
        assert_eq!(Modifiers::from_xterm_param(2), Modifiers::SHIFT);
        assert_eq!(Modifiers::from_xterm_param(3), Modifiers::META);
        assert_eq!(Modifiers::from_xterm_param(5), Modifiers::CONTROL);
        assert_eq!(
            Modifiers::from_xterm_param(6),
            Modifiers::SHIFT | Modifiers::CONTROL
        );
        assert_eq!(
            Modifiers::from_xterm_param(7),
            Modifiers::CONTROL | Modifiers::META
        );
        assert_eq!(Modifiers::from_xterm_param(1), Modifiers::empty());
    }

    #[test]
    fn display_lists_active_flags() {
        assert_eq!((Modifiers::SHIFT | Modifiers::CONTROL).to_string(), "control+shift");
        assert_eq!(Modifiers::empty().to_string(), "none");
    }
}
