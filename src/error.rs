//! Error handling module for fibprime
//!
//! Provides centralized error handling with proper error types using thiserror.
//! The engine, renderers and report output all report through these types.
//! Config loading uses `anyhow` directly, so it has no variant here.

use thiserror::Error;

/// Main error type for fibprime
#[derive(Error, Debug)]
pub enum FibPrimeError {
    /// IO errors (output directory, image files, stdin)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested more terms than a `u64` sequence can hold
    #[error("Overflow: {requested} terms requested, at most {max} fit in 64-bit integers")]
    Overflow { requested: i64, max: usize },

    /// Renderer failures (image encoding, chart drawing)
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization errors (report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fibprime operations
pub type Result<T> = std::result::Result<T, FibPrimeError>;

// Convenient error constructors
impl FibPrimeError {
    /// Create an overflow error for a term count
    pub fn overflow(requested: i64, max: usize) -> Self {
        Self::Overflow { requested, max }
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
