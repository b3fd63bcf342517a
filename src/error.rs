//! Custom error types for Cashbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashbook operations
#[derive(Error, Debug)]
pub enum CashbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File read/write/delete errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV structure (not row-level rejections, which are skipped)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Store read or write failures
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A sum left the representable amount range
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// The import was persisted but the source file could not be removed
    #[error("Cleanup error: {0}")]
    Cleanup(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl CashbookError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create the persistence error raised when a category title is already taken
    pub fn duplicate_category(title: &str) -> Self {
        Self::Persistence(format!("Category already exists: {}", title))
    }

    /// Create the persistence error raised for a transaction id collision
    pub fn duplicate_transaction(identifier: impl std::fmt::Display) -> Self {
        Self::Persistence(format!("Transaction already exists: {}", identifier))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Check if this is an amount overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Check if this is a cleanup error
    pub fn is_cleanup(&self) -> bool {
        matches!(self, Self::Cleanup(_))
    }
}

impl From<std::io::Error> for CashbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<csv::Error> for CashbookError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Parse(err.to_string())
        }
    }
}

/// Result type alias for Cashbook operations
pub type CashbookResult<T> = Result<T, CashbookError>;
