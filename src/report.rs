//! Text report and JSON snapshot of a key mapping

use crate::keyboard::KeyScan;
use crate::mapping::KeyMapping;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

/// Render a character for the report.
///
/// Control whitespace is escaped so each entry stays on one line; every
/// other character, space included, is printed as is.
fn display_char(c: char) -> String {
    if c.is_control() {
        c.escape_default().to_string()
    } else {
        c.to_string()
    }
}

/// Format one report line: `'<char>': VK=<vk>, mods=<mods>`
///
/// Control whitespace (`\t`, `\n`, `\r`, vertical tab, form feed) is written
/// as its Rust escape, e.g. `'\n'` or `'\u{b}'`, rather than the raw
/// character, so a line never spans more than one row of output.
pub fn format_line(c: char, scan: KeyScan) -> String {
    format!(
        "'{}': VK={}, mods={}",
        display_char(c),
        scan.vk,
        scan.mods.bits()
    )
}

/// One line per mapping entry, in insertion order
pub fn report(mapping: &KeyMapping) -> Vec<String> {
    mapping.iter().map(|(c, scan)| format_line(c, scan)).collect()
}

/// Write the report lines to `out`
pub fn write_report<W: Write>(mapping: &KeyMapping, mut out: W) -> io::Result<()> {
    for line in report(mapping) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Machine-readable snapshot of a probe run, emitted to the debug log
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Mapped characters in probe order
    pub entries: Vec<MappingEntry>,
    /// Probed characters with no key
    pub unmapped: Vec<String>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Language identifier of the layout observed before probing
    pub layout_id: Option<u32>,
}

/// Single mapped character
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MappingEntry {
    pub character: String,
    pub vk: u8,
    pub mods: u8,
    pub modifiers: Vec<String>,
}

impl From<(char, KeyScan)> for MappingEntry {
    fn from((c, scan): (char, KeyScan)) -> Self {
        Self {
            character: c.to_string(),
            vk: scan.vk,
            mods: scan.mods.bits(),
            modifiers: scan.mods.names().into_iter().map(String::from).collect(),
        }
    }
}

impl MappingReport {
    /// Create a snapshot of `mapping`; `probed` is the character set it was built from
    pub fn new<I>(mapping: &KeyMapping, probed: I, layout_id: Option<u32>) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let now: DateTime<Utc> = Utc::now();
        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                layout_id,
            },
            entries: mapping.iter().map(MappingEntry::from).collect(),
            unmapped: mapping
                .unmapped(probed)
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
