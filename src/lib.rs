//! Keymap Probe - reports how the active keyboard layout types ASCII
//!
//! For every printable ASCII character, asks the host keyboard layout which
//! virtual key and modifier combination produces it, and prints the answer.

pub mod config;
pub mod keyboard;
pub mod mapping;
pub mod report;

pub use config::Config;
pub use keyboard::{CharacterKeyTranslator, KeyScan, ModifierState, SystemTranslator};
pub use mapping::{build_mapping, KeyMapping};
