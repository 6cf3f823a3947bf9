//! Keymap Probe - prints the virtual key and modifiers for each printable
//! ASCII character under the active keyboard layout.

use anyhow::{Context, Result};
use std::io::stdout;

use keymap_probe::{
    build_mapping,
    config::Config,
    keyboard::{printable_chars, SystemTranslator},
    report::{write_report, MappingReport},
};

fn main() -> Result<()> {
    let (config, config_err) = Config::load_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Some(e) = config_err {
        log::warn!("{}; using default settings", e);
    }

    let translator = SystemTranslator::new();
    let layout_id = translator.active_layout();
    match layout_id {
        Some(id) => log::debug!("active keyboard layout {:#06x}", id),
        None => log::debug!("active keyboard layout unknown"),
    }

    let mapping = build_mapping(&translator).context("keyboard layout query failed")?;
    log::info!("{} of {} characters mapped", mapping.len(), printable_chars().count());

    let unmapped = mapping.unmapped(printable_chars());
    if !unmapped.is_empty() {
        log::debug!("no key for {:?}", unmapped);
    }

    write_report(&mapping, stdout().lock()).context("failed to write report")?;

    if log::log_enabled!(log::Level::Debug) {
        match MappingReport::new(&mapping, printable_chars(), layout_id).to_json() {
            Ok(json) => log::debug!("mapping snapshot:\n{}", json),
            Err(e) => log::debug!("mapping snapshot unavailable: {}", e),
        }
    }

    Ok(())
}
