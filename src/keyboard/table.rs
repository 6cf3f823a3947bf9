//! Table-backed translator
//!
//! Answers lookups from a fixed in-memory table instead of the OS. Useful
//! where the system layout facility is missing, and as a known-good
//! reference to compare a live layout against.

use super::translator::{CharacterKeyTranslator, TranslateError};
use super::KeyScan;
use std::collections::HashMap;

/// Shifted punctuation on a US keyboard: (char, vk)
const US_SHIFTED: [(char, u8); 21] = [
    ('!', 0x31),
    ('@', 0x32),
    ('#', 0x33),
    ('$', 0x34),
    ('%', 0x35),
    ('^', 0x36),
    ('&', 0x37),
    ('*', 0x38),
    ('(', 0x39),
    (')', 0x30),
    ('_', 0xBD),
    ('+', 0xBB),
    ('{', 0xDB),
    ('}', 0xDD),
    ('|', 0xDC),
    (':', 0xBA),
    ('"', 0xDE),
    ('<', 0xBC),
    ('>', 0xBE),
    ('?', 0xBF),
    ('~', 0xC0),
];

/// Unshifted punctuation and whitespace on a US keyboard: (char, vk)
const US_PLAIN: [(char, u8); 14] = [
    ('-', 0xBD),
    ('=', 0xBB),
    ('[', 0xDB),
    (']', 0xDD),
    ('\\', 0xDC),
    (';', 0xBA),
    ('\'', 0xDE),
    (',', 0xBC),
    ('.', 0xBE),
    ('/', 0xBF),
    ('`', 0xC0),
    (' ', 0x20),
    ('\t', 0x09),
    ('\r', 0x0D),
];

/// Translator answering from a fixed table of raw layout values
#[derive(Debug, Clone, Default)]
pub struct TableTranslator {
    entries: HashMap<char, i16>,
}

impl TableTranslator {
    /// Create an empty table; every lookup answers "no mapping"
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the raw value for a character
    pub fn with(mut self, c: char, raw: i16) -> Self {
        self.entries.insert(c, raw);
        self
    }

    /// Build from (char, raw) pairs; later pairs replace earlier ones
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, i16)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Standard US QWERTY layout.
    ///
    /// Newline maps to Ctrl+Enter as Windows reports it. Vertical tab and
    /// form feed are left unmapped.
    pub fn us_qwerty() -> Self {
        const SHIFT: i16 = 0x0100;
        const CTRL: i16 = 0x0200;

        let mut table = Self::new();
        for c in '0'..='9' {
            table.entries.insert(c, c as i16);
        }
        for c in 'a'..='z' {
            let vk = c.to_ascii_uppercase() as i16;
            table.entries.insert(c, vk);
            table.entries.insert(c.to_ascii_uppercase(), SHIFT | vk);
        }
        for (c, vk) in US_PLAIN {
            table.entries.insert(c, i16::from(vk));
        }
        for (c, vk) in US_SHIFTED {
            table.entries.insert(c, SHIFT | i16::from(vk));
        }
        table.entries.insert('\n', CTRL | 0x0D);
        table
    }

    /// Number of characters with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CharacterKeyTranslator for TableTranslator {
    fn translate(&self, c: char) -> Result<Option<KeyScan>, TranslateError> {
        Ok(self.entries.get(&c).copied().and_then(KeyScan::from_raw))
    }
}
