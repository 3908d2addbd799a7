//! Error types for the input boundary and the archive store.
//!
//! The engine itself never fails: unparseable lines are skipped and queries
//! over validated data are total. Errors only arise where user text is turned
//! into typed input, or where the archive touches the filesystem.

use crate::archive::ArchiveError;
use thiserror::Error;

/// Errors surfaced by the public API.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter name outside the closed vocabulary.
    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    /// A mode switch name other than `repeat-mode` / `adjacency-mode`.
    #[error("unknown mode switch '{0}'")]
    UnknownModeSwitch(String),

    /// A mode value other than `include` / `exclude`.
    #[error("invalid mode '{0}' (expected include or exclude)")]
    InvalidMode(String),

    /// Digit-sum target outside `0..=36`.
    #[error("sum target {0} is out of range (0..=36)")]
    SumOutOfRange(i64),

    /// Archive storage failure; in-memory state is left as it was.
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(Error::UnknownFilter("dragons".into()).to_string(), "unknown filter 'dragons'");
        assert_eq!(Error::SumOutOfRange(37).to_string(), "sum target 37 is out of range (0..=36)");
        assert_eq!(
            Error::InvalidMode("maybe".into()).to_string(),
            "invalid mode 'maybe' (expected include or exclude)"
        );
    }

    #[test]
    fn archive_errors_convert() {
        let err: Error = ArchiveError::NotFound { key: "2024".into() }.into();
        assert!(matches!(err, Error::Archive(ArchiveError::NotFound { .. })));
        assert_eq!(err.to_string(), "archive '2024' not found");
    }
}
