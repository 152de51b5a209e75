//! Application configuration for the composition root.

use crate::config::{ConfigFile, ProviderSettings};

/// Runtime configuration passed to [`MapServices::start`].
///
/// [`MapServices::start`]: crate::app::MapServices::start
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Mapping provider settings.
    pub provider: ProviderSettings,
}

impl AppConfig {
    /// Builds application config from a loaded configuration file.
    ///
    /// Keeps the translation in one place rather than scattered in CLI code.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            provider: config.provider.clone(),
        }
    }

    /// Minimal config: the given access token, defaults everywhere else.
    pub fn with_access_token(access_token: impl Into<String>) -> Self {
        Self {
            provider: ProviderSettings {
                access_token: access_token.into(),
                ..ProviderSettings::default()
            },
        }
    }
}
