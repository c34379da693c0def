use thiserror::Error;

use crate::forecast::ForecastError;
use crate::warehouse::{CategoryId, OperationId};

/// Error type that captures warehouse loading and query failures.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Category {0} is part of a parent cycle")]
    CategoryCycle(CategoryId),
    #[error("Operation {0} has a non-positive quantity")]
    InvalidQuantity(OperationId),
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid {field} filter value `{value}`{}", suggestion_hint(.suggestion))]
    InvalidFilterValue {
        field: &'static str,
        value: String,
        suggestion: Option<String>,
    },
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

pub type Result<T> = std::result::Result<T, WarehouseError>;

/// Failures while reading or writing the analysis configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean `{}`?)", candidate),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_error_mentions_suggestion() {
        let err = WarehouseError::InvalidFilterValue {
            field: "size",
            value: "XXL".into(),
            suggestion: Some("XL".into()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid size filter value `XXL` (did you mean `XL`?)"
        );
    }

    #[test]
    fn filter_error_without_suggestion() {
        let err = WarehouseError::InvalidFilterValue {
            field: "category",
            value: "Socks".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Invalid category filter value `Socks`");
    }

    #[test]
    fn config_error_wraps_serde_failures() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ConfigError::from(serde_err);
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
