//! Presentation-type word limits.
//!
//! Every presentation type label maps to exactly one word limit. Lookup is an
//! exact, case-sensitive match on the label; anything not in the table
//! (including an empty label or a trailing-space variant like `"Poster "`)
//! resolves to [`DEFAULT_WORD_LIMIT`]. Lookup never fails.

use std::collections::HashMap;

use crate::error::{LimitError, LimitResult};

/// Limit applied to any label not present in the table.
pub const DEFAULT_WORD_LIMIT: usize = 250;

/// Label for the extended-format award category.
///
/// Several messages and thresholds special-case this label.
pub const AWARD_PAPER: &str = "Award Paper";

/// Built-in presentation types and their word limits, in display order.
pub const WORD_LIMITS: &[(&str, usize)] = &[
    (AWARD_PAPER, 1000),
    ("Free Paper", 250),
    ("Poster", 250),
    ("Oral", 250),
    ("E-Poster", 250),
    ("Poster Presentation", 250),
    ("Oral Presentation", 250),
    ("Case Report", 250),
    ("Free Paper Presentation", 250),
];

/// Minimum word floor for a label not listed in [`MINIMUM_WORDS`].
pub const DEFAULT_MINIMUM_WORDS: usize = 80;

/// Minimum word counts an abstract should reach to have substance.
pub const MINIMUM_WORDS: &[(&str, usize)] = &[
    (AWARD_PAPER, 200),
    ("Free Paper", 100),
    ("Poster", 80),
    ("Oral", 100),
];

/// Resolve the word limit for a presentation type label.
pub fn get_word_limit(presentation_type: &str) -> usize {
    lookup(WORD_LIMITS, presentation_type).unwrap_or(DEFAULT_WORD_LIMIT)
}

/// Returns the built-in limit table.
pub const fn all_limits() -> &'static [(&'static str, usize)] {
    WORD_LIMITS
}

/// Returns `true` if `presentation_type` is a key of the built-in table.
pub fn is_valid_presentation_type(presentation_type: &str) -> bool {
    lookup(WORD_LIMITS, presentation_type).is_some()
}

/// Resolve the minimum word floor for a presentation type label.
pub fn minimum_words(presentation_type: &str) -> usize {
    lookup(MINIMUM_WORDS, presentation_type).unwrap_or(DEFAULT_MINIMUM_WORDS)
}

fn lookup(table: &[(&str, usize)], label: &str) -> Option<usize> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|&(_, limit)| limit)
}

/// An immutable limit table: the built-ins plus configured overrides.
///
/// Overrides replace a built-in entry with the same label or append a new
/// label after the built-ins. Lookup semantics match [`get_word_limit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitTable {
    entries: Vec<(String, usize)>,
}

impl Default for LimitTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LimitTable {
    /// The built-in table with no overrides.
    pub fn builtin() -> Self {
        Self {
            entries: WORD_LIMITS
                .iter()
                .map(|&(name, limit)| (name.to_string(), limit))
                .collect(),
        }
    }

    /// Layer `overrides` on top of the built-in table.
    ///
    /// New labels are appended in sorted order. A zero limit is rejected,
    /// since every classification divides by the limit.
    pub fn with_overrides(overrides: &HashMap<String, usize>) -> LimitResult<Self> {
        let mut table = Self::builtin();
        let mut labels: Vec<&String> = overrides.keys().collect();
        labels.sort();

        for label in labels {
            let limit = overrides[label];
            if limit == 0 {
                return Err(LimitError::NonPositive {
                    presentation_type: label.clone(),
                });
            }
            match table.entries.iter_mut().find(|(name, _)| name == label) {
                Some(entry) => entry.1 = limit,
                None => table.entries.push((label.clone(), limit)),
            }
        }

        tracing::debug!(entries = table.entries.len(), "limit table built");
        Ok(table)
    }

    /// Resolve the word limit for a label, defaulting to [`DEFAULT_WORD_LIMIT`].
    pub fn limit(&self, presentation_type: &str) -> usize {
        self.entries
            .iter()
            .find(|(name, _)| name == presentation_type)
            .map_or(DEFAULT_WORD_LIMIT, |&(_, limit)| limit)
    }

    /// Returns `true` if the label is a key of this table.
    pub fn contains(&self, presentation_type: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == presentation_type)
    }

    /// Iterate `(label, limit)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, limit)| (name.as_str(), *limit))
    }

    /// Number of labels in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a table built from the built-ins.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
