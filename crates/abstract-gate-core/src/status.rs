//! Status bands, progress colours and display formatting.
//!
//! Bands classify the *uncapped* percentage of the limit used:
//!
//! | band         | percentage      |
//! |--------------|-----------------|
//! | `good`       | ≤ 70            |
//! | `warning`    | ≤ 90            |
//! | `near-limit` | ≤ 100           |
//! | `over-limit` | > 100           |
//!
//! This percentage can differ from [`ValidationResult::percentage`], which is
//! capped at 150 for overflow display. Both values are kept:
//! render band colours from this module and the progress bar from the
//! validation result.
//!
//! [`ValidationResult::percentage`]: crate::validation::ValidationResult::percentage

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LimitError, LimitResult};

/// Ordered classification of how much of the word limit is used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBand {
    /// At most 70% of the limit.
    Good,
    /// More than 70%, at most 90%.
    Warning,
    /// More than 90%, at most 100%.
    NearLimit,
    /// Over the limit.
    OverLimit,
}

/// Text, background and border classes for rendering a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct BandStyle {
    /// Text colour class.
    pub color: &'static str,
    /// Background colour class.
    pub bg_color: &'static str,
    /// Border colour class.
    pub border_color: &'static str,
}

impl StatusBand {
    /// Classify a percentage of the limit. `NaN` lands in [`StatusBand::OverLimit`].
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 70.0 {
            Self::Good
        } else if percentage <= 90.0 {
            Self::Warning
        } else if percentage <= 100.0 {
            Self::NearLimit
        } else {
            Self::OverLimit
        }
    }

    /// Returns the band name as used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::NearLimit => "near-limit",
            Self::OverLimit => "over-limit",
        }
    }

    /// Presentation classes for this band.
    pub const fn style(&self) -> BandStyle {
        match self {
            Self::Good => BandStyle {
                color: "text-green-600",
                bg_color: "bg-green-100",
                border_color: "border-green-300",
            },
            Self::Warning => BandStyle {
                color: "text-yellow-600",
                bg_color: "bg-yellow-100",
                border_color: "border-yellow-300",
            },
            Self::NearLimit => BandStyle {
                color: "text-orange-600",
                bg_color: "bg-orange-100",
                border_color: "border-orange-300",
            },
            Self::OverLimit => BandStyle {
                color: "text-red-600",
                bg_color: "bg-red-100",
                border_color: "border-red-300",
            },
        }
    }
}

impl std::fmt::Display for StatusBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uncapped percentage of `limit` used by `word_count`.
pub fn usage_percentage(word_count: usize, limit: usize) -> f64 {
    word_count as f64 / limit as f64 * 100.0
}

/// Classify `word_count` against `limit`.
///
/// Callers must pass a positive limit. A zero limit is not guarded: the
/// percentage becomes infinite (or `NaN` for zero words) and the result is
/// [`StatusBand::OverLimit`]. Use [`try_word_count_status`] to reject it instead.
pub fn get_word_count_status(word_count: usize, limit: usize) -> StatusBand {
    StatusBand::from_percentage(usage_percentage(word_count, limit))
}

/// Like [`get_word_count_status`], but rejects a zero limit.
pub fn try_word_count_status(word_count: usize, limit: usize) -> LimitResult<StatusBand> {
    if limit == 0 {
        return Err(LimitError::Zero);
    }
    Ok(get_word_count_status(word_count, limit))
}

/// Progress bar colour class for a percentage of the limit.
pub fn progress_color(percentage: f64) -> &'static str {
    if percentage <= 50.0 {
        "bg-blue-500"
    } else if percentage <= 70.0 {
        "bg-green-500"
    } else if percentage <= 90.0 {
        "bg-yellow-500"
    } else if percentage <= 100.0 {
        "bg-orange-500"
    } else {
        "bg-red-500"
    }
}

/// Compact counter display, e.g. `180/250` and `72%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCountDisplay {
    /// `"{words}/{limit}"`.
    pub display: String,
    /// Rounded percentage with a `%` suffix.
    pub percentage: String,
    /// Words left before the limit (negative when over).
    pub remaining: i64,
    /// `"valid"` or `"invalid"`.
    pub status: String,
}

/// Format a word count against its limit for compact display.
///
/// A zero limit shows `0%` rather than an undefined percentage.
pub fn format_word_count(word_count: usize, limit: usize) -> WordCountDisplay {
    let percentage = if limit > 0 {
        usage_percentage(word_count, limit).round()
    } else {
        0.0
    };
    WordCountDisplay {
        display: format!("{word_count}/{limit}"),
        percentage: format!("{percentage}%"),
        remaining: limit as i64 - word_count as i64,
        status: if word_count <= limit { "valid" } else { "invalid" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventy_percent_is_still_good() {
        assert_eq!(get_word_count_status(175, 250), StatusBand::Good);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(get_word_count_status(176, 250), StatusBand::Warning);
        assert_eq!(get_word_count_status(225, 250), StatusBand::Warning);
        assert_eq!(get_word_count_status(226, 250), StatusBand::NearLimit);
        assert_eq!(get_word_count_status(250, 250), StatusBand::NearLimit);
        assert_eq!(get_word_count_status(251, 250), StatusBand::OverLimit);
        assert_eq!(get_word_count_status(300, 250), StatusBand::OverLimit);
    }

    #[test]
    fn status_is_uncapped() {
        // 400% of the limit is still just over-limit, no clamping involved.
        assert_eq!(get_word_count_status(1000, 250), StatusBand::OverLimit);
        assert!((usage_percentage(1000, 250) - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_limit_is_over_limit_without_panicking() {
        assert_eq!(get_word_count_status(10, 0), StatusBand::OverLimit);
        assert_eq!(get_word_count_status(0, 0), StatusBand::OverLimit);
    }

    #[test]
    fn hardened_status_rejects_zero_limit() {
        assert_eq!(try_word_count_status(10, 0), Err(LimitError::Zero));
        assert_eq!(try_word_count_status(10, 250), Ok(StatusBand::Good));
    }

    #[test]
    fn bands_are_ordered() {
        assert!(StatusBand::Good < StatusBand::Warning);
        assert!(StatusBand::NearLimit < StatusBand::OverLimit);
    }

    #[test]
    fn band_serializes_kebab_case() {
        let json = serde_json::to_string(&StatusBand::NearLimit).unwrap();
        assert_eq!(json, "\"near-limit\"");
        assert_eq!(StatusBand::OverLimit.to_string(), "over-limit");
    }

    #[test]
    fn band_styles() {
        assert_eq!(StatusBand::Good.style().color, "text-green-600");
        assert_eq!(StatusBand::OverLimit.style().border_color, "border-red-300");
    }

    #[test]
    fn progress_colors() {
        assert_eq!(progress_color(0.0), "bg-blue-500");
        assert_eq!(progress_color(50.0), "bg-blue-500");
        assert_eq!(progress_color(60.0), "bg-green-500");
        assert_eq!(progress_color(90.0), "bg-yellow-500");
        assert_eq!(progress_color(100.0), "bg-orange-500");
        assert_eq!(progress_color(150.0), "bg-red-500");
    }

    #[test]
    fn formats_counter() {
        let display = format_word_count(180, 250);
        assert_eq!(display.display, "180/250");
        assert_eq!(display.percentage, "72%");
        assert_eq!(display.remaining, 70);
        assert_eq!(display.status, "valid");

        let over = format_word_count(260, 250);
        assert_eq!(over.percentage, "104%");
        assert_eq!(over.remaining, -10);
        assert_eq!(over.status, "invalid");
    }

    #[test]
    fn formats_zero_limit() {
        assert_eq!(format_word_count(3, 0).percentage, "0%");
    }
}
