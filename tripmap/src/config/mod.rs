//! Configuration file handling
//!
//! Settings live in an INI file under the platform configuration directory
//! (`~/.config/tripmap/config.ini` on Linux):
//!
//! ```ini
//! [provider]
//! access_token = pk.example
//! base_url = https://api.mapbox.com
//! timeout_secs = 30
//! profile = driving
//! ```
//!
//! A missing file loads as defaults; a malformed file is an error. The CLI
//! exposes these settings through `tripmap config get/set/list/path`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;

use crate::provider::{DEFAULT_BASE_URL, DEFAULT_PROFILE};

/// Default provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from loading, saving, or addressing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but could not be parsed, or a value is invalid.
    #[error("Malformed configuration: {0}")]
    Parse(String),

    /// The platform has no configuration directory.
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    /// A `section.key` name does not address a known setting.
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Provider settings from the `[provider]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// API access token. Empty when unset.
    pub access_token: String,

    /// API root URL.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Routing profile (driving, walking, cycling).
    pub profile: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            profile: DEFAULT_PROFILE.to_string(),
        }
    }
}

/// Loaded configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Mapping provider settings.
    pub provider: ProviderSettings,
}

/// Path of the configuration file.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("tripmap").join("config.ini"))
        .ok_or(ConfigError::NoConfigDir)
}

impl ConfigFile {
    /// Loads from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path()?)
    }

    /// Loads from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("provider")) {
            if let Some(value) = section.get("access_token") {
                config.provider.access_token = value.to_string();
            }
            if let Some(value) = section.get("base_url") {
                config.provider.base_url = value.to_string();
            }
            if let Some(value) = section.get("timeout_secs") {
                config.provider.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Parse(format!("timeout_secs must be an integer, got '{}'", value))
                })?;
            }
            if let Some(value) = section.get("profile") {
                config.provider.profile = value.to_string();
            }
        }

        Ok(config)
    }

    /// Saves to the default path, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path()?)
    }

    /// Saves to a specific path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut ini = Ini::new();
        ini.with_section(Some("provider"))
            .set("access_token", self.provider.access_token.as_str())
            .set("base_url", self.provider.base_url.as_str())
            .set("timeout_secs", self.provider.timeout_secs.to_string())
            .set("profile", self.provider.profile.as_str());
        ini.write_to_file(path)?;
        Ok(())
    }
}

/// Addressable configuration keys in `section.key` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ProviderAccessToken,
    ProviderBaseUrl,
    ProviderTimeoutSecs,
    ProviderProfile,
}

impl ConfigKey {
    /// All known keys, in `config list` order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ProviderAccessToken,
            ConfigKey::ProviderBaseUrl,
            ConfigKey::ProviderTimeoutSecs,
            ConfigKey::ProviderProfile,
        ]
    }

    /// The `section.key` name of this key.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ProviderAccessToken => "provider.access_token",
            ConfigKey::ProviderBaseUrl => "provider.base_url",
            ConfigKey::ProviderTimeoutSecs => "provider.timeout_secs",
            ConfigKey::ProviderProfile => "provider.profile",
        }
    }

    /// Reads the current value from a config.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ProviderAccessToken => config.provider.access_token.clone(),
            ConfigKey::ProviderBaseUrl => config.provider.base_url.clone(),
            ConfigKey::ProviderTimeoutSecs => config.provider.timeout_secs.to_string(),
            ConfigKey::ProviderProfile => config.provider.profile.clone(),
        }
    }

    /// Sets the value, validating where applicable.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        match self {
            ConfigKey::ProviderAccessToken => config.provider.access_token = value.to_string(),
            ConfigKey::ProviderBaseUrl => config.provider.base_url = value.to_string(),
            ConfigKey::ProviderTimeoutSecs => {
                config.provider.timeout_secs = value.parse().map_err(|_| {
                    ConfigError::Parse(format!("timeout_secs must be an integer, got '{}'", value))
                })?;
            }
            ConfigKey::ProviderProfile => config.provider.profile = value.to_string(),
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .find(|key| key.name() == s)
            .copied()
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.provider.access_token = "pk.test".to_string();
        config.provider.timeout_secs = 10;
        config.provider.profile = "walking".to_string();
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.ini");
        ConfigFile::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[provider]\naccess_token = pk.partial\n").unwrap();

        let config = ConfigFile::load_from(&path).unwrap();
        assert_eq!(config.provider.access_token, "pk.partial");
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.profile, DEFAULT_PROFILE);
    }

    #[test]
    fn test_bad_timeout_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[provider]\ntimeout_secs = soon\n").unwrap();

        let result = ConfigFile::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_key_parse() {
        let key: ConfigKey = "provider.base_url".parse().unwrap();
        assert_eq!(key, ConfigKey::ProviderBaseUrl);

        assert!(matches!(
            "provider.nope".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_config_key_get_set() {
        let mut config = ConfigFile::default();
        ConfigKey::ProviderAccessToken
            .set(&mut config, "pk.abc")
            .unwrap();
        assert_eq!(ConfigKey::ProviderAccessToken.get(&config), "pk.abc");

        ConfigKey::ProviderTimeoutSecs.set(&mut config, "5").unwrap();
        assert_eq!(config.provider.timeout_secs, 5);

        let result = ConfigKey::ProviderTimeoutSecs.set(&mut config, "soon");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_key_names_are_unique() {
        let mut names: Vec<_> = ConfigKey::all().iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ConfigKey::all().len());
    }
}
