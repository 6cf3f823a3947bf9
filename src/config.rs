//! Configuration for Keymap Probe
//!
//! Settings are read from a platform-specific config file. They cover only
//! the ambient behaviour of the tool (the log filter); the probed character
//! set and stdout format are fixed. A missing or unreadable file never stops
//! a run: [`Config::load_or_default`] falls back to the defaults and hands the
//! error back for logging.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/keymap-probe/config.toml` |
//! | macOS | `~/Library/Application Support/keymap-probe/config.toml` |
//! | Windows | `%APPDATA%\keymap-probe\config.toml` |
//!
//! ## Example
//!
//! ```toml
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "keymap-probe";

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// The platform has no per-user config directory
    NoConfigDir,
    /// The config file could not be read or written
    Io(io::Error),
    /// The config file is not valid TOML for [`Config`]
    Parse(toml::de::Error),
    /// [`Config`] could not be rendered as TOML
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => {
                write!(f, "no per-user config directory for {}", APP_DIR)
            }
            ConfigError::Io(e) => write!(f, "cannot access {} config: {}", APP_DIR, e),
            ConfigError::Parse(e) => write!(f, "invalid {} config: {}", APP_DIR, e),
            ConfigError::Serialize(e) => write!(f, "cannot render {} config: {}", APP_DIR, e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoConfigDir => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Returns the path to the config file.
///
/// Does not touch the filesystem; the file may not exist.
///
/// # Platform-specific paths
///
/// - Linux: `~/.config/keymap-probe/config.toml`
/// - macOS: `~/Library/Application Support/keymap-probe/config.toml`
/// - Windows: `%APPDATA%\keymap-probe\config.toml`
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `env_logger` filter; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the default config file, falling back to defaults on any error.
    ///
    /// The error, if any, is returned alongside so the caller can report it
    /// once logging is up.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        Self::or_default(Self::load())
    }

    /// Like [`Config::load_or_default`] for a specific path.
    ///
    /// Unlike [`Config::load`], a missing file here is reported as an error.
    pub fn load_from_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        Self::or_default(Self::load_from(path))
    }

    fn or_default(result: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match result {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path() -> PathBuf {
        env::temp_dir().join(format!("keymap-probe-test-{}.toml", std::process::id()))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn config_save_and_load_roundtrip() {
        let path = temp_config_path();

        let mut config = Config::default();
        config.logging.level = "debug".to_string();

        config.save_to(&path).expect("Failed to save config");
        let loaded = Config::load_from(&path).expect("Failed to load config");
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_is_io_error() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").expect("Failed to deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_unknown_sections_are_ignored() {
        // Older files carried a [report] section with an export path
        let toml_str = r#"
[report]
json_path = "mapping.json"
"#;
        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_malformed_file_is_parse_error() {
        let path = env::temp_dir().join(format!(
            "keymap-probe-bad-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[logging\nlevel = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_malformed_file_falls_back_to_defaults() {
        let path = env::temp_dir().join(format!(
            "keymap-probe-fallback-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[logging").unwrap();

        let (config, err) = Config::load_from_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let (config, err) = Config::load_from_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::Io(_))));
    }

    #[test]
    fn config_valid_file_loads_without_error() {
        let path = env::temp_dir().join(format!(
            "keymap-probe-valid-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[logging]\nlevel = \"trace\"\n").unwrap();

        let (config, err) = Config::load_from_or_default(&path);
        assert_eq!(config.logging.level, "trace");
        assert!(err.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_no_dir_falls_back_to_defaults() {
        let (config, err) = Config::or_default(Err(ConfigError::NoConfigDir));
        assert_eq!(config, Config::default());
        assert!(matches!(err, Some(ConfigError::NoConfigDir)));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "no per-user config directory for keymap-probe");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert_eq!(
            io_err.to_string(),
            "cannot access keymap-probe config: file not found"
        );
    }

    #[test]
    fn config_path_names_the_app() {
        // Only meaningful where the platform has a config dir
        if let Ok(path) = config_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
