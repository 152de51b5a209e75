//! CLI error types.

use std::fmt;

use tripmap::app::AppError;
use tripmap::config::ConfigError;
use tripmap::provider::ProviderError;

/// Errors surfaced to the CLI user.
#[derive(Debug)]
pub enum CliError {
    /// Configuration problem (bad key, unreadable file).
    Config(String),

    /// Application bootstrap failed.
    App(AppError),

    /// A provider lookup failed.
    Provider(ProviderError),

    /// The itinerary file could not be read or parsed.
    Itinerary(String),

    /// A command-line argument was invalid.
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::App(e) => write!(f, "{}", e),
            CliError::Provider(e) => write!(f, "Lookup failed: {}", e),
            CliError::Itinerary(msg) => write!(f, "{}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::App(e) => Some(e),
            CliError::Provider(e) => Some(e),
            CliError::Config(_) | CliError::Itinerary(_) | CliError::InvalidArgument(_) => None,
        }
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}

impl From<ProviderError> for CliError {
    fn from(e: ProviderError) -> Self {
        CliError::Provider(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CliError::Config("missing token".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing token"));
    }

    #[test]
    fn test_provider_error_converts() {
        let err: CliError = ProviderError::Http("down".to_string()).into();
        assert!(matches!(err, CliError::Provider(_)));
    }
}
