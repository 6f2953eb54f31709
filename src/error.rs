//! Error types for the dictionary cleaning pipeline.
//!
//! Two layers:
//!
//! - [`ParseError`] - loading/decoding the raw dump
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Malformed input lines and entries filtered out during cleaning are
//! NOT errors: they are counted in the run summary and processing
//! continues.

use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while loading the raw dictionary dump.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input file could not be read.
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::pipeline::clean_dictionary`].
/// It wraps all lower-level errors and adds output-side variants.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading the input dump failed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing an output file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
