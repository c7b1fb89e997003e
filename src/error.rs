//! Error types for catalog generation

use thiserror::Error;

/// Errors reported by the catalog pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// The host supplied product data the pipeline cannot use
    /// (malformed JSON, or a JSON value that is not an array).
    #[error("invalid product input: {0}")]
    InvalidInput(String),
    /// Planner options describe an impossible layout (zero page density).
    #[error("invalid planner options: {0}")]
    InvalidOptions(String),
    /// The categories and page map handed to the assembler were not
    /// derived from the same source. Fatal: continuing would emit a
    /// document with wrong page numbers.
    #[error("categories and page map disagree: {0}")]
    Inconsistent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Inconsistent("category \"Rings\" has no placement".to_string());
        assert!(err.to_string().contains("Rings"));
    }
}
