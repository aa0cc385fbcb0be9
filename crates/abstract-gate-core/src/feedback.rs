//! Presenter-facing messages and length heuristics.
//!
//! Award Papers get their own wording and thresholds since their limit is
//! four times the standard one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::limits::{self, AWARD_PAPER};
use crate::status::usage_percentage;
use crate::validation::ValidationResult;

/// One-line status for a live word counter.
pub fn get_word_count_message(word_count: usize, limit: usize, presentation_type: &str) -> String {
    let remaining = limit as i64 - word_count as i64;

    if word_count == 0 {
        return format!("Start typing your {presentation_type} abstract ({limit} words maximum)");
    }

    match remaining {
        r if r > 0 => {
            if presentation_type == AWARD_PAPER && word_count < 500 {
                format!(
                    "{word_count} of {limit} words used. For Award Papers, consider expanding for comprehensive coverage."
                )
            } else {
                format!("{word_count} of {limit} words used ({remaining} remaining)")
            }
        }
        0 => format!("Perfect! Exactly {limit} words used for {presentation_type}"),
        r => format!(
            "Over limit by {} words. Please reduce to {limit} words maximum for {presentation_type}.",
            r.unsigned_abs()
        ),
    }
}

/// Tiered writing advice for a validation result.
#[allow(clippy::manual_range_contains)]
pub fn get_suggestion(validation: &ValidationResult, presentation_type: &str) -> String {
    let ValidationResult {
        word_count,
        limit,
        is_valid,
        remaining,
        percentage,
    } = *validation;
    let is_award = presentation_type == AWARD_PAPER;

    if word_count == 0 {
        if is_award {
            return format!(
                "Please enter your award paper abstract. You have {limit} words available for comprehensive research presentation."
            );
        }
        return format!(
            "Please enter your {presentation_type} abstract. You have {limit} words available."
        );
    }

    if !is_valid {
        return format!(
            "Please reduce by {} words to meet the {limit}-word limit for {presentation_type}.",
            remaining.unsigned_abs()
        );
    }

    if is_award {
        if percentage < 30.0 {
            return format!(
                "You have {remaining} words remaining. Consider expanding methodology, detailed results, and clinical implications."
            );
        }
        if percentage >= 85.0 {
            return format!(
                "Excellent use of extended word limit! {remaining} words remaining for final refinements."
            );
        }
        if percentage >= 50.0 && percentage < 85.0 {
            return format!(
                "Good progress with {word_count} words. You have {remaining} more words to provide comprehensive details."
            );
        }
    }

    if percentage >= 85.0 {
        return format!(
            "You're close to the limit with {remaining} words remaining. Consider reviewing for conciseness."
        );
    }
    if percentage >= 50.0 && percentage < 85.0 {
        return format!("Good length! {word_count} words used. Well-balanced for comprehensive review.");
    }
    if percentage < 50.0 {
        return format!(
            "You have {remaining} more words available. Consider adding more detail to methodology or results."
        );
    }

    // Only reachable with a NaN percentage.
    format!("{word_count} words used out of {limit} available for {presentation_type}.")
}

/// Whether `word_count` sits in the sweet spot for `presentation_type`.
///
/// Award Papers: 60–95% of the limit. Everything else: 50–90%.
pub fn is_optimal_length(word_count: usize, presentation_type: &str) -> bool {
    is_optimal_for_limit(word_count, limits::get_word_limit(presentation_type), presentation_type)
}

/// [`is_optimal_length`] with an already-resolved limit.
pub fn is_optimal_for_limit(word_count: usize, limit: usize, presentation_type: &str) -> bool {
    let percentage = usage_percentage(word_count, limit);
    if presentation_type == AWARD_PAPER {
        (60.0..=95.0).contains(&percentage)
    } else {
        (50.0..=90.0).contains(&percentage)
    }
}

/// Whether `word_count` reaches the minimum floor for `presentation_type`.
pub fn has_minimum_content(word_count: usize, presentation_type: &str) -> bool {
    word_count >= limits::minimum_words(presentation_type)
}

/// A progress checkpoint on the way to the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Milestone {
    /// Word count at which the milestone is reached.
    pub words: usize,
    /// Short label for the checkpoint.
    pub label: String,
    /// Nominal percentage of the limit.
    pub percentage: u8,
}

impl Milestone {
    fn new(words: usize, label: &str, percentage: u8) -> Self {
        Self {
            words,
            label: label.to_string(),
            percentage,
        }
    }
}

/// Progress checkpoints for the built-in limit of `presentation_type`.
pub fn word_count_milestones(presentation_type: &str) -> Vec<Milestone> {
    milestones_for_limit(limits::get_word_limit(presentation_type), presentation_type)
}

/// [`word_count_milestones`] with an already-resolved limit.
pub fn milestones_for_limit(limit: usize, presentation_type: &str) -> Vec<Milestone> {
    if presentation_type == AWARD_PAPER {
        return vec![
            Milestone::new(250, "Getting Started", 25),
            Milestone::new(500, "Good Progress", 50),
            Milestone::new(750, "Almost Complete", 75),
            Milestone::new(1000, "At Limit", 100),
        ];
    }

    let at = |fraction: f64| (limit as f64 * fraction).round() as usize;
    vec![
        Milestone::new(at(0.3), "Started", 30),
        Milestone::new(at(0.6), "Good Progress", 60),
        Milestone::new(at(0.9), "Almost Complete", 90),
        Milestone::new(limit, "At Limit", 100),
    ]
}
