//! Error types for the Foodboard plugin.
//!
//! This module defines the centralized error type [`FoodboardError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Foodboard plugin operations.
///
/// The table logic itself cannot fail; errors only arise at the configuration
/// edges (loading a custom food list, loading a theme file). Callers are
/// expected to degrade to built-in defaults rather than abort the pane.
///
/// # Examples
///
/// ```
/// use foodboard::domain::FoodboardError;
///
/// fn validate_config() -> Result<(), FoodboardError> {
///     Err(FoodboardError::Config("page_size must be positive".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FoodboardError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured food list file could not be parsed.
    ///
    /// Wraps `serde_json` errors raised while reading a custom record list.
    #[error("Food data error: {0}")]
    Data(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Foodboard operations.
///
/// This is a type alias for `std::result::Result<T, FoodboardError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, FoodboardError>;
