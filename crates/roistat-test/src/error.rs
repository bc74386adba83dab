//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture geometry rejected by the core
    #[error("invalid fixture: {0}")]
    Fixture(#[from] roistat_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
