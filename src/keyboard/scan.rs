//! Decoding of the combined virtual-key / modifier value

use std::fmt;

/// Value the layout reports when no single keystroke produces a character
pub const NO_MAPPING: i16 = -1;

/// Modifier keys that must be held to produce a character.
///
/// Bit layout follows the platform: bit 0 Shift, bit 1 Ctrl, bit 2 Alt,
/// bit 3 Hankaku. Bits 4 and 5 are reserved and carried through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierState(u8);

impl ModifierState {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(0x01);
    pub const CTRL: Self = Self(0x02);
    pub const ALT: Self = Self(0x04);
    pub const HANKAKU: Self = Self(0x08);

    const NAMED: [(ModifierState, &'static str); 4] = [
        (Self::SHIFT, "Shift"),
        (Self::CTRL, "Ctrl"),
        (Self::ALT, "Alt"),
        (Self::HANKAKU, "Hankaku"),
    ];

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every bit in `other` is also set here
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the held modifiers, lowest bit first.
    ///
    /// Reserved bits have no name and are omitted.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::ops::BitOr for ModifierState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

/// A virtual key plus the modifiers needed to produce a character with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyScan {
    /// Virtual key code (low byte of the raw value)
    pub vk: u8,
    /// Required modifiers (high byte of the raw value)
    pub mods: ModifierState,
}

impl KeyScan {
    pub const fn new(vk: u8, mods: ModifierState) -> Self {
        Self { vk, mods }
    }

    /// Decode a raw layout answer.
    ///
    /// Returns `None` for [`NO_MAPPING`]. Any other value is read as an
    /// unsigned 16-bit word and split into `(word % 256, word / 256)`.
    pub fn from_raw(raw: i16) -> Option<Self> {
        if raw == NO_MAPPING {
            return None;
        }
        let word = raw as u16;
        Some(Self {
            vk: (word & 0xFF) as u8,
            mods: ModifierState((word >> 8) as u8),
        })
    }

    /// Re-encode as the combined 16-bit value
    pub fn to_raw(&self) -> u16 {
        (u16::from(self.mods.bits()) << 8) | u16::from(self.vk)
    }

    /// Whether Shift has to be held alongside the key
    pub fn needs_shift(&self) -> bool {
        self.mods.contains(ModifierState::SHIFT)
    }
}
