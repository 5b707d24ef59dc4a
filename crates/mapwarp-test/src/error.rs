//! Error types for mapwarp-test

use thiserror::Error;

/// Errors raised by the regression harness itself
#[derive(Debug, Error)]
pub enum TestError {
    /// Golden file could not be read or written
    #[error("golden file error for {path}: {message}")]
    GoldenFile { path: String, message: String },

    /// Recorded value count differs from the golden file
    #[error("golden mismatch: {expected} recorded values, golden has {actual}")]
    GoldenShape { expected: usize, actual: usize },
}

/// Result type for test harness operations
pub type TestResult<T> = std::result::Result<T, TestError>;
