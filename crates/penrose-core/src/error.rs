use thiserror::Error;

/// Reasons a configuration is rejected before any geometry is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLength { field: &'static str, value: f64 },
    #[error("{field} must be at least 1 (got {value})")]
    NonPositiveCount { field: &'static str, value: i64 },
    #[error("{field} must be at most {max} (got {value})")]
    CountTooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },
    #[error("{field} requires at least {expected} elements (got {found})")]
    TooFewElements {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{field} contains an empty color at index {index}")]
    EmptyColor { field: &'static str, index: usize },
}
