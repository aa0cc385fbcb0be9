//! Word-count validation against presentation-type limits.
//!
//! Everything here is recomputed from its inputs on every call. Nothing is
//! cached, so calling once per keystroke from an editor is fine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::feedback;
use crate::limits::{self, LimitTable};
use crate::status::{self, BandStyle, StatusBand};
use crate::words::count_words;

/// Upper bound on [`ValidationResult::percentage`], leaving room to show overflow.
pub const MAX_DISPLAY_PERCENTAGE: f64 = 150.0;

/// Outcome of checking a text against a word limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Resolved limit for the presentation type.
    pub limit: usize,
    /// Whether `word_count <= limit`.
    pub is_valid: bool,
    /// `limit - word_count`; negative when over the limit.
    pub remaining: i64,
    /// Percentage of the limit used, capped at [`MAX_DISPLAY_PERCENTAGE`].
    /// Zero when the limit is zero.
    pub percentage: f64,
}

impl ValidationResult {
    /// Build a result from an already-counted text and a resolved limit.
    pub fn from_counts(word_count: usize, limit: usize) -> Self {
        let percentage = if limit > 0 {
            status::usage_percentage(word_count, limit).min(MAX_DISPLAY_PERCENTAGE)
        } else {
            0.0
        };
        Self {
            word_count,
            limit,
            is_valid: word_count <= limit,
            remaining: limit as i64 - word_count as i64,
            percentage,
        }
    }
}

/// Validate `text` against the built-in limit for `presentation_type`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn validate_word_count(text: &str, presentation_type: &str) -> ValidationResult {
    ValidationResult::from_counts(count_words(text), limits::get_word_limit(presentation_type))
}

impl LimitTable {
    /// Validate `text` against this table's limit for `presentation_type`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn validate(&self, text: &str, presentation_type: &str) -> ValidationResult {
        ValidationResult::from_counts(count_words(text), self.limit(presentation_type))
    }
}

/// Validation plus everything an editor needs to render live feedback.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DetailedValidation {
    /// The underlying validation result.
    #[serde(flatten)]
    pub validation: ValidationResult,
    /// Status band for the uncapped percentage.
    pub status: StatusBand,
    /// Presentation classes for `status`.
    #[serde(flatten)]
    pub style: BandStyle,
    /// Advice for the presenter.
    pub suggestion: String,
    /// Non-empty and within the limit.
    pub can_submit: bool,
    /// The presentation type the text was checked against.
    pub presentation_type: String,
}

/// Validate `text` and attach band, suggestion and submit-readiness.
pub fn detailed_validation(text: &str, presentation_type: &str) -> DetailedValidation {
    detail(validate_word_count(text, presentation_type), presentation_type)
}

impl LimitTable {
    /// Detailed validation against this table.
    pub fn detailed_validation(&self, text: &str, presentation_type: &str) -> DetailedValidation {
        detail(self.validate(text, presentation_type), presentation_type)
    }
}

fn detail(validation: ValidationResult, presentation_type: &str) -> DetailedValidation {
    let band = status::get_word_count_status(validation.word_count, validation.limit);
    DetailedValidation {
        status: band,
        style: band.style(),
        suggestion: feedback::get_suggestion(&validation, presentation_type),
        can_submit: validation.is_valid && validation.word_count > 0,
        presentation_type: presentation_type.to_string(),
        validation,
    }
}
