//! # Sozluk - Turkish dictionary cleaning and sorting
//!
//! Sozluk normalizes raw TDK-style dictionary dumps (one JSON object per
//! line) into a clean, Turkish-alphabet-sorted JSON array and a matching
//! CSV table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON lines │────▶│   Parser    │────▶│  Normalize  │────▶│ Sort + Emit │
//! │   (dump)    │     │ (auto-enc)  │     │ (►, I-IV)   │     │ (JSON, CSV) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sozluk::clean_dictionary;
//! use std::path::Path;
//!
//! let summary = clean_dictionary(
//!     Path::new("gts.jsonl"),
//!     Path::new("sozluk.json"),
//!     Path::new("sozluk.csv"),
//! )?;
//! println!("{} entries", summary.entry_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`models`] - Raw and clean entry shapes
//! - [`parser`] - JSON-lines loading with encoding auto-detection
//! - [`normalize`] - Marker stripping and homograph suffixes
//! - [`collate`] - Turkish-alphabet ordering
//! - [`writer`] - JSON and CSV artifacts
//! - [`pipeline`] - End-to-end orchestration

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod parser;

// Cleaning and ordering
pub mod collate;
pub mod normalize;

// Output
pub mod writer;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ParseError, ParseResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CleanEntry, RawEntry, RawSense};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_bytes, detect_encoding, load_file, parse_lines, LoadResult};

// =============================================================================
// Re-exports - Cleaning and ordering
// =============================================================================

pub use collate::{collation_key, sort_entries, TURKISH_ALPHABET};
pub use normalize::{normalize_entry, SENSE_MARKER};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use writer::{write_csv, write_json, SENSE_SEPARATOR};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{clean_dictionary, RunSummary};
