use std::path::PathBuf;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Invalid mask: {0}")]
    InvalidMask(String),
    #[error("Unknown algorithm id {0}: expected 0 (naive), 1 (Boyer-Moore) or 2 (Horspool)")]
    UnknownAlgorithm(u8),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Both preparatory steps (mask expansion, line loading) run to
    /// completion before either failure surfaces, so a run can carry
    /// more than one independent problem.
    #[error("{}", join_messages(.0))]
    Preparation(Vec<SearchError>),
}

fn join_messages(errors: &[SearchError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl SearchError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn invalid_mask(msg: impl Into<String>) -> Self {
        Self::InvalidMask(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Collapses a list of preparation failures; a single failure is
    /// returned as itself rather than wrapped.
    pub fn preparation(mut errors: Vec<SearchError>) -> Self {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            Self::Preparation(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("test.txt");
        let err = SearchError::file_not_found(path);
        assert!(matches!(err, SearchError::FileNotFound(_)));

        let err = SearchError::permission_denied(path);
        assert!(matches!(err, SearchError::PermissionDenied(_)));

        let err = SearchError::invalid_mask("too many wildcards");
        assert!(matches!(err, SearchError::InvalidMask(_)));

        let err = SearchError::config_error("missing field");
        assert!(matches!(err, SearchError::ConfigError(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = SearchError::file_not_found("test.txt");
        assert_eq!(err.to_string(), "File not found: test.txt");

        let err = SearchError::invalid_mask("mask is empty");
        assert_eq!(err.to_string(), "Invalid mask: mask is empty");

        let err = SearchError::UnknownAlgorithm(7);
        assert_eq!(
            err.to_string(),
            "Unknown algorithm id 7: expected 0 (naive), 1 (Boyer-Moore) or 2 (Horspool)"
        );
    }

    #[test]
    fn test_preparation_joins_messages() {
        let err = SearchError::preparation(vec![
            SearchError::invalid_mask("mask is empty"),
            SearchError::file_not_found("input.txt"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid mask: mask is empty; File not found: input.txt"
        );
    }

    #[test]
    fn test_preparation_single_error_unwrapped() {
        let err = SearchError::preparation(vec![SearchError::file_not_found("input.txt")]);
        assert!(matches!(err, SearchError::FileNotFound(_)));
    }
}
