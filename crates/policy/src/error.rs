use thiserror::Error;

/// Errors raised by threshold configuration updates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} threshold {value} is outside [0, 100]")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("warning threshold {warning} must be strictly below danger threshold {danger}")]
    InvertedPair { warning: f64, danger: f64 },
}
