/*!
 * Error types for the cascadeanime application.
 *
 * This module contains custom error types for the translation providers,
 * the catalog client and the application as a whole, using the thiserror
 * crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation provider
///
/// Every variant is retryable from the translator's point of view.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when building or sending an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The response decoded but carried no translated text
    #[error("Response did not contain a translation")]
    MissingTranslation,
}

/// Errors that can occur while fetching catalog data from Jikan
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// Non-success HTTP status
    #[error("Catalog API responded with status {status_code}")]
    Status {
        /// HTTP status code
        status_code: u16,
    },

    /// Body could not be decoded
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),

    /// The catalog has no entry for this id
    #[error("Anime {0} not found")]
    NotFound(u64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the catalog client
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
