//! Core library for abstract-gate.
//!
//! Word-limit classification for conference abstracts, plus the submission
//! gate and review listing built on top of it. Every classifier function is
//! total: missing text counts as zero words and unknown presentation types
//! fall back to a 250-word limit.
//!
//! # Modules
//!
//! - [`words`] - Word counting and previews
//! - [`limits`] - Presentation-type word limits
//! - [`validation`] - Validation results for a text and type
//! - [`status`] - Status bands, progress colours and counters
//! - [`feedback`] - Messages, suggestions and length heuristics
//! - [`presentation`] - Presentation type catalogue
//! - [`submission`] - Submission and edit gate
//! - [`listing`] - Review listing and statistics
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use abstract_gate_core::{StatusBand, get_word_count_status, validate_word_count};
//!
//! let result = validate_word_count("Outcomes of pediatric HSCT", "Poster");
//! assert_eq!(result.word_count, 4);
//! assert_eq!(result.limit, 250);
//! assert!(result.is_valid);
//!
//! let band = get_word_count_status(result.word_count, result.limit);
//! assert_eq!(band, StatusBand::Good);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod feedback;
pub mod limits;
pub mod listing;
pub mod presentation;
pub mod status;
pub mod submission;
pub mod validation;
pub mod words;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5_242_880;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    ConfigError, ConfigResult, LimitError, LimitResult, ListingError, ListingResult,
    SubmissionError, SubmissionResult,
};
pub use feedback::{
    get_suggestion, get_word_count_message, has_minimum_content, is_optimal_length,
    word_count_milestones,
};
pub use limits::{DEFAULT_WORD_LIMIT, LimitTable, get_word_limit};
pub use status::{StatusBand, get_word_count_status, try_word_count_status};
pub use validation::{ValidationResult, validate_word_count};
pub use words::count_words;
