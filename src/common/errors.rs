//! Error types for the pricing engine

use thiserror::Error;

/// Result type alias using our PricingError
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for engine start-up and data loading
///
/// Recommendations themselves never fail: lookup misses and malformed
/// request fields fall back to defaults. Everything here is fatal at
/// initialization time.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Regression fit attempted with no samples
    #[error("Training set is empty")]
    EmptyTrainingSet,

    /// Feature and price vectors have different lengths
    #[error("Training data mismatch: {features} features vs {prices} prices")]
    MismatchedTrainingData { features: usize, prices: usize },

    /// Reference catalog is malformed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system errors while loading catalog or config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<config::ConfigError> for PricingError {
    fn from(err: config::ConfigError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}
