use serde::{Deserialize, Serialize};

/// Forecast Engine Result
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Forecast Engine Errors
///
/// Every operation is total over its documented domain. These variants only surface
/// programming errors on the caller's side.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, thiserror::Error)]
pub enum ForecastError {
    /// An argument is outside the documented domain (negative amount, out-of-range percentage, ...)
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
    /// Encoding a value to JSON failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub fn invalid_argument<N: AsRef<str>, R: AsRef<str>>(name: N, reason: R) -> ForecastError {
    ForecastError::InvalidArgument {
        name: name.as_ref().to_string(),
        reason: reason.as_ref().to_string(),
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(value: serde_json::Error) -> Self {
        ForecastError::Serialization(value.to_string())
    }
}
