//! Keyboard layout queries: the probed character set, the decoded
//! key/modifier pair, and the translators that produce it

mod charset;
mod scan;
pub mod table;
pub mod translator;

pub use charset::{printable_chars, PRINTABLE, PRINTABLE_LEN};
pub use scan::{KeyScan, ModifierState, NO_MAPPING};
pub use table::TableTranslator;
pub use translator::{
    translate_char, CharacterKeyTranslator, SystemTranslator, TranslateError,
};
