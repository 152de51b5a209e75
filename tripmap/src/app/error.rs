//! Application error types.

use thiserror::Error;

use crate::config::ConfigError;
use crate::provider::ProviderError;

/// Errors that can occur during application bootstrap.
#[derive(Debug, Error)]
pub enum AppError {
    /// No provider access token configured.
    #[error("No provider access token configured; set provider.access_token")]
    MissingAccessToken,

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(ProviderError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
