//! Error types for the SignBot plugin
//!
//! Matching never fails. Every error here is raised while building an
//! engine from a catalog, so a bad catalog is rejected before any input is
//! matched against it.

use thiserror::Error;

/// Result type alias for SignBot operations
pub type Result<T> = std::result::Result<T, SignBotError>;

/// Catalog and configuration errors
#[derive(Debug, Error)]
pub enum SignBotError {
    /// The catalog declares no response categories
    #[error("Invalid catalog: no response categories defined")]
    EmptyCatalog,

    /// A category has no response variants
    #[error("Invalid catalog: category '{0}' has no responses")]
    EmptyCategory(String),

    /// The same category key is declared twice
    #[error("Invalid catalog: duplicate category '{0}'")]
    DuplicateCategory(String),

    /// A pattern points at a category that does not exist
    #[error("Invalid catalog: pattern #{pattern} references unknown category '{category}'")]
    UnknownCategory {
        /// Position of the pattern in declaration order
        pattern: usize,
        /// The missing category key
        category: String,
    },

    /// A pattern weight is outside (0, 1]
    #[error("Invalid catalog: weight {weight} for category '{category}' must be in (0, 1]")]
    InvalidWeight {
        /// Category the pattern selects
        category: String,
        /// The rejected weight
        weight: f64,
    },

    /// Similarity threshold is outside [0, 1]
    #[error("Invalid catalog: similarity threshold {0} must be in [0, 1]")]
    InvalidThreshold(f64),

    /// A pattern has no keywords to match
    #[error("Invalid catalog: pattern for category '{0}' has no keywords")]
    EmptyPattern(String),

    /// A keyword alternation failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Catalog JSON could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SignBotError {
    /// Whether the error comes from the catalog contents rather than from
    /// reading or parsing it.
    pub fn is_catalog_error(&self) -> bool {
        !matches!(
            self,
            SignBotError::Serialization(_) | SignBotError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignBotError::UnknownCategory {
            pattern: 3,
            category: "weather".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("weather"));
        assert!(msg.contains("#3"));
    }

    #[test]
    fn test_catalog_error_kind() {
        assert!(SignBotError::EmptyCatalog.is_catalog_error());
        assert!(SignBotError::InvalidThreshold(1.5).is_catalog_error());

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!SignBotError::from(parse).is_catalog_error());
    }
}
