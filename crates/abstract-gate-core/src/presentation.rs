//! Presentation type catalogue.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::limits::{self, AWARD_PAPER, LimitTable};

/// Broad grouping of a presentation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Extended award format.
    Award,
    /// Standard research paper.
    Standard,
    /// Poster formats.
    Visual,
    /// Spoken presentation.
    Presentation,
}

/// Descriptive information about a presentation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PresentationTypeInfo {
    /// The label this info was requested for.
    pub presentation_type: String,
    /// Resolved word limit for the label.
    pub limit: usize,
    /// Broad grouping.
    pub category: TypeCategory,
    /// One-line description.
    pub description: String,
    /// Talk slot, e.g. `6+2 minutes`.
    pub time_allocation: String,
    /// Accent colour name.
    pub color: String,
    /// Icon name.
    pub icon: String,
}

struct Descriptor {
    category: TypeCategory,
    description: &'static str,
    time_allocation: &'static str,
    color: &'static str,
    icon: &'static str,
}

const FREE_PAPER: Descriptor = Descriptor {
    category: TypeCategory::Standard,
    description: "Standard research paper presentation",
    time_allocation: "6+2 minutes",
    color: "blue",
    icon: "file-text",
};

fn descriptor(presentation_type: &str) -> Descriptor {
    match presentation_type {
        AWARD_PAPER => Descriptor {
            category: TypeCategory::Award,
            description: "Extended format for comprehensive research presentation",
            time_allocation: "8+2 minutes",
            color: "purple",
            icon: "award",
        },
        "Poster" => Descriptor {
            category: TypeCategory::Visual,
            description: "Visual poster presentation",
            time_allocation: "5+2 minutes",
            color: "green",
            icon: "image",
        },
        "Oral" => Descriptor {
            category: TypeCategory::Presentation,
            description: "Oral presentation format",
            time_allocation: "6+2 minutes",
            color: "orange",
            icon: "mic",
        },
        // Free Paper and every other label share the standard descriptor.
        _ => FREE_PAPER,
    }
}

fn build_info(presentation_type: &str, limit: usize) -> PresentationTypeInfo {
    let d = descriptor(presentation_type);
    PresentationTypeInfo {
        presentation_type: presentation_type.to_string(),
        limit,
        category: d.category,
        description: d.description.to_string(),
        time_allocation: d.time_allocation.to_string(),
        color: d.color.to_string(),
        icon: d.icon.to_string(),
    }
}

/// Describe `presentation_type` using the built-in limits.
///
/// Labels without their own descriptor reuse the Free Paper description but
/// keep their own resolved limit.
pub fn presentation_type_info(presentation_type: &str) -> PresentationTypeInfo {
    build_info(presentation_type, limits::get_word_limit(presentation_type))
}

/// Describe every built-in presentation type, in table order.
pub fn available_presentation_types() -> Vec<PresentationTypeInfo> {
    LimitTable::builtin().presentation_types()
}

impl LimitTable {
    /// Describe `presentation_type` using this table's limit.
    pub fn info(&self, presentation_type: &str) -> PresentationTypeInfo {
        build_info(presentation_type, self.limit(presentation_type))
    }

    /// Describe every label in this table, in table order.
    pub fn presentation_types(&self) -> Vec<PresentationTypeInfo> {
        self.iter()
            .map(|(label, limit)| build_info(label, limit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_paper_info() {
        let info = presentation_type_info("Award Paper");
        assert_eq!(info.category, TypeCategory::Award);
        assert_eq!(info.limit, 1000);
        assert_eq!(info.time_allocation, "8+2 minutes");
    }

    #[test]
    fn unknown_type_reuses_free_paper_descriptor() {
        let info = presentation_type_info("Workshop");
        assert_eq!(info.category, TypeCategory::Standard);
        assert_eq!(info.presentation_type, "Workshop");
        assert_eq!(info.limit, limits::DEFAULT_WORD_LIMIT);
    }

    #[test]
    fn aliases_keep_their_own_label() {
        let info = presentation_type_info("E-Poster");
        assert_eq!(info.presentation_type, "E-Poster");
        assert_eq!(info.category, TypeCategory::Standard);
    }

    #[test]
    fn available_types_follow_table_order() {
        let types = available_presentation_types();
        assert_eq!(types.len(), limits::WORD_LIMITS.len());
        assert_eq!(types[0].presentation_type, "Award Paper");
        assert_eq!(types[2].category, TypeCategory::Visual);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_value(presentation_type_info("Oral")).unwrap();
        assert_eq!(json["category"], "presentation");
    }
}
