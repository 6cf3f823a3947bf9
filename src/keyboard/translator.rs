//! Character to key translation through the host keyboard layout
//!
//! [`CharacterKeyTranslator`] is the seam between the reporter and the
//! platform. [`SystemTranslator`] asks the active Windows layout via
//! `VkKeyScanW`; on other targets it fails on the first lookup.

use super::KeyScan;
use thiserror::Error;

/// Failure of the translation facility itself.
///
/// A character that simply has no key is not an error; translators
/// report that as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The keyboard layout facility does not exist on this platform
    #[error("keyboard layout translation is not available on {platform}")]
    Unavailable { platform: &'static str },
    /// The character cannot be passed to the layout as one UTF-16 unit
    #[error("character {0:?} is not a single UTF-16 code unit")]
    NotSingleCodeUnit(char),
}

/// Something that can answer "which key produces this character?"
pub trait CharacterKeyTranslator {
    /// Look up the key and modifiers that produce `c`.
    ///
    /// Returns `Ok(None)` when no single keystroke produces it.
    fn translate(&self, c: char) -> Result<Option<KeyScan>, TranslateError>;
}

impl<T: CharacterKeyTranslator + ?Sized> CharacterKeyTranslator for &T {
    fn translate(&self, c: char) -> Result<Option<KeyScan>, TranslateError> {
        (**self).translate(c)
    }
}

/// Translate one character, logging the answer
pub fn translate_char<T: CharacterKeyTranslator + ?Sized>(
    translator: &T,
    c: char,
) -> Result<Option<KeyScan>, TranslateError> {
    let result = translator.translate(c)?;
    match result {
        Some(scan) => log::trace!(
            "{:?} -> vk={:#04x} mods={}",
            c,
            scan.vk,
            scan.mods
        ),
        None => log::trace!("{:?} -> no mapping", c),
    }
    Ok(result)
}

/// Convert a character to the single UTF-16 unit the layout API takes
pub fn to_code_unit(c: char) -> Result<u16, TranslateError> {
    u16::try_from(u32::from(c)).map_err(|_| TranslateError::NotSingleCodeUnit(c))
}

/// Translator backed by the operating system's active keyboard layout
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTranslator;

impl SystemTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Language identifier of the layout active on the calling thread.
    ///
    /// `None` where the platform has no such notion.
    pub fn active_layout(&self) -> Option<u32> {
        platform::active_layout()
    }
}

impl CharacterKeyTranslator for SystemTranslator {
    fn translate(&self, c: char) -> Result<Option<KeyScan>, TranslateError> {
        let unit = to_code_unit(c)?;
        platform::key_scan(unit).map(KeyScan::from_raw)
    }
}

#[cfg(target_os = "windows")]
mod platform {
    use super::TranslateError;
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{GetKeyboardLayout, VkKeyScanW};

    pub(super) fn key_scan(unit: u16) -> Result<i16, TranslateError> {
        // SAFETY: VkKeyScanW takes a plain UTF-16 unit and only reads layout state
        Ok(unsafe { VkKeyScanW(unit) })
    }

    pub(super) fn active_layout() -> Option<u32> {
        // SAFETY: thread id 0 queries the current thread's layout
        let hkl = unsafe { GetKeyboardLayout(0) } as usize;
        Some((hkl & 0xFFFF) as u32)
    }
}

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::TranslateError;

    pub(super) fn key_scan(_unit: u16) -> Result<i16, TranslateError> {
        Err(TranslateError::Unavailable {
            platform: std::env::consts::OS,
        })
    }

    pub(super) fn active_layout() -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::ModifierState;

    struct Constant(i16);

    impl CharacterKeyTranslator for Constant {
        fn translate(&self, _c: char) -> Result<Option<KeyScan>, TranslateError> {
            Ok(KeyScan::from_raw(self.0))
        }
    }

    #[test]
    fn code_unit_for_ascii() {
        assert_eq!(to_code_unit('a'), Ok(0x61));
        assert_eq!(to_code_unit('\t'), Ok(0x09));
    }

    #[test]
    fn code_unit_rejects_astral_chars() {
        assert_eq!(
            to_code_unit('\u{1F600}'),
            Err(TranslateError::NotSingleCodeUnit('\u{1F600}'))
        );
    }

    #[test]
    fn translate_char_passes_answer_through() {
        let scan = translate_char(&Constant(0x0131), '!').unwrap();
        assert_eq!(scan, Some(KeyScan::new(0x31, ModifierState::SHIFT)));
    }

    #[test]
    fn translate_char_passes_absence_through() {
        assert_eq!(translate_char(&Constant(-1), '\x0b'), Ok(None));
    }

    #[test]
    fn reference_translator_delegates() {
        let inner = Constant(0x0041);
        let by_ref = &inner;
        assert_eq!(
            <&Constant as CharacterKeyTranslator>::translate(&by_ref, 'a'),
            Ok(Some(KeyScan::new(0x41, ModifierState::NONE)))
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = TranslateError::Unavailable { platform: "linux" };
        assert!(err.to_string().contains("linux"));
        let err = TranslateError::NotSingleCodeUnit('x');
        assert!(err.to_string().contains("'x'"));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn system_translator_unavailable_off_windows() {
        let result = SystemTranslator::new().translate('a');
        assert!(matches!(result, Err(TranslateError::Unavailable { .. })));
        assert_eq!(SystemTranslator::new().active_layout(), None);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn system_translator_answers_every_printable_char() {
        let translator = SystemTranslator::new();
        for c in crate::keyboard::printable_chars() {
            // Range is enforced by the u8 fields; the call must not fail
            assert!(translator.translate(c).is_ok(), "lookup failed for {:?}", c);
        }
    }
}
