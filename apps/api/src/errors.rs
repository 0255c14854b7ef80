use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the job dataset at startup.
/// Any of these stops the process before the listener is bound.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Outcomes of a recommendation request that are reported to the caller
/// as `{"status": "error", "message": ...}`.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("No matching jobs found.")]
    NoMatches,

    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_message_is_stable() {
        assert_eq!(RecommendError::NoMatches.to_string(), "No matching jobs found.");
    }

    #[test]
    fn test_internal_message_is_passed_through() {
        let err = RecommendError::Internal("ranking task panicked".to_string());
        assert_eq!(err.to_string(), "ranking task panicked");
    }

    #[test]
    fn test_unsupported_format_names_extension() {
        let err = CatalogError::UnsupportedFormat("pkl".to_string());
        assert!(err.to_string().contains("'pkl'"));
    }
}
