//! Character to key mapping built from a translator

use crate::keyboard::{
    printable_chars, translate_char, CharacterKeyTranslator, KeyScan, TranslateError,
};

/// Ordered character to key mapping.
///
/// Holds at most one entry per character, in the order the characters were
/// probed. Characters without a key are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMapping {
    entries: Vec<(char, KeyScan)>,
}

impl KeyMapping {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key for `c`, if it was mapped
    pub fn get(&self, c: char) -> Option<KeyScan> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == c)
            .map(|(_, scan)| *scan)
    }

    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyScan)> + '_ {
        self.entries.iter().copied()
    }

    /// Mapped characters in insertion order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    /// Characters from `probed` that ended up without an entry
    pub fn unmapped<I>(&self, probed: I) -> Vec<char>
    where
        I: IntoIterator<Item = char>,
    {
        probed.into_iter().filter(|&c| !self.contains(c)).collect()
    }
}

/// Probe every printable ASCII character in order
pub fn build_mapping<T>(translator: &T) -> Result<KeyMapping, TranslateError>
where
    T: CharacterKeyTranslator + ?Sized,
{
    build_mapping_from(translator, printable_chars())
}

/// Probe `chars` in order, keeping the first answer for repeated characters.
///
/// Stops at the first translator failure.
pub fn build_mapping_from<T, I>(translator: &T, chars: I) -> Result<KeyMapping, TranslateError>
where
    T: CharacterKeyTranslator + ?Sized,
    I: IntoIterator<Item = char>,
{
    let mut mapping = KeyMapping::default();
    for c in chars {
        if mapping.contains(c) {
            continue;
        }
        if let Some(scan) = translate_char(translator, c)? {
            mapping.entries.push((c, scan));
        }
    }
    Ok(mapping)
}
