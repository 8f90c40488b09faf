//! Error type shared by the field builder, the frame evaluator and the
//! parameter-file loader.

use thiserror::Error;

/// Result type for hexwave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or evaluating a wave field.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed build-time geometry (degenerate edge sampling, non-positive spacing, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Non-finite time or parameter value at evaluation time
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parameter file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter file is not valid JSON for the expected shape
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject NaN and infinities, naming the offending value.
pub(crate) fn ensure_finite(name: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} is not finite ({})",
            name, value
        )))
    }
}
