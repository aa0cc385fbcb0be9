//! Error types for abstract-gate-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured word limit could not be used.
    #[error(transparent)]
    Limit(#[from] LimitError),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the hardened limit paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// A limit of zero was supplied where a positive limit is required.
    #[error("word limit must be positive (got 0)")]
    Zero,

    /// A configured presentation type carries a zero limit.
    #[error("word limit for presentation type {presentation_type:?} must be positive")]
    NonPositive {
        /// The offending presentation type label.
        presentation_type: String,
    },
}

/// Result type alias using [`LimitError`].
pub type LimitResult<T> = Result<T, LimitError>;

/// Reasons a submission or an edit is rejected by the gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// One or more required fields are empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The content exceeds the flat submission cap.
    #[error("Abstract exceeds word limit. {words} words (max {cap})")]
    OverSubmissionCap {
        /// Word count of the content.
        words: usize,
        /// The flat cap in force.
        cap: usize,
    },

    /// The content exceeds the limit for its presentation type.
    #[error("{presentation_type} abstract has {words} words (limit {limit})")]
    OverTypeLimit {
        /// Word count of the content.
        words: usize,
        /// Resolved limit for the presentation type.
        limit: usize,
        /// The presentation type label as submitted.
        presentation_type: String,
    },

    /// The category is not one of the configured categories.
    #[error("Invalid category. Must be one of: {}", .allowed.join(", "))]
    InvalidCategory {
        /// The category as submitted.
        category: String,
        /// Categories accepted by the gate.
        allowed: Vec<String>,
    },

    /// Only pending submissions can be edited.
    #[error("cannot edit a submission that is already {status}")]
    AlreadyReviewed {
        /// Current review status of the submission.
        status: String,
    },

    /// Only pending submissions can be deleted.
    #[error("cannot delete a submission that is already {status}")]
    NotDeletable {
        /// Current review status of the submission.
        status: String,
    },

    /// Bulk edits are not accepted through the single-submission path.
    #[error("bulk edits must go through the bulk update path")]
    BulkEdit,
}

/// Result type alias using [`SubmissionError`].
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Errors that can occur while listing submissions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The status filter names no known review status.
    #[error("unknown status filter: {0}. Use: all, pending, approved, rejected, final_submitted")]
    UnknownStatus(String),
}

/// Result type alias using [`ListingError`].
pub type ListingResult<T> = Result<T, ListingError>;
