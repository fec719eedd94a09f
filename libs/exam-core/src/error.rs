//! Error types for exam-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ExamError.
pub type Result<T> = std::result::Result<T, ExamError>;

/// Errors surfaced by the exam store.
///
/// Parsing itself never fails: malformed input degrades to fewer extracted
/// questions (logged), so the only hard error is an unreadable source
/// document. A failed load leaves the cache slot empty and a later request
/// retries the read.
#[derive(Debug, Error)]
pub enum ExamError {
    #[error("exam document {} unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
