//! Submission gate.
//!
//! Decides whether a new abstract (or an edit to a pending one) may be
//! stored. Two independent word checks run in order: a flat cap that
//! ignores the presentation type, then the per-type limit from the
//! [`LimitTable`]. They stay separate gates with separate errors.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SubmissionError, SubmissionResult};
use crate::limits::LimitTable;
use crate::validation::ValidationResult;
use crate::words::count_words;

/// Flat word cap applied to every submission regardless of type.
pub const DEFAULT_SUBMISSION_WORD_CAP: usize = 300;

/// Scientific categories accepted when none are configured.
pub const DEFAULT_CATEGORIES: &[&str] = &["Hematology", "Oncology", "InPHOG", "Nursing", "HSCT"];

/// Review state of a stored submission.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting review (default for records without a status).
    #[default]
    Pending,
    /// Accepted by reviewers.
    Approved,
    /// Declined by reviewers.
    Rejected,
    /// Final version submitted after approval.
    FinalSubmitted,
}

impl ReviewStatus {
    /// All statuses, in review order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::FinalSubmitted,
    ];

    /// Returns the status as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::FinalSubmitted => "final_submitted",
        }
    }

    /// Parse a status name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file uploaded alongside the abstract, as reported by the upload step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Name of the file on the presenter's machine.
    pub original_name: String,
    /// Name the upload step stored it under.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Size in bytes.
    pub size: u64,
    /// Storage path returned by the upload step.
    pub path: String,
}

/// An abstract as submitted by a presenter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NewSubmission {
    /// Abstract title.
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    /// Presenting author.
    #[serde(deserialize_with = "null_as_empty")]
    pub presenter_name: String,
    /// Presenter's institution.
    #[serde(deserialize_with = "null_as_empty")]
    pub institution_name: String,
    /// Presentation type label, e.g. `Free Paper`.
    #[serde(deserialize_with = "null_as_empty")]
    pub presentation_type: String,
    /// Scientific category, e.g. `Oncology`.
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    /// The abstract text.
    #[serde(deserialize_with = "null_as_empty")]
    pub abstract_content: String,
    /// Co-authors, free text.
    pub co_authors: Option<String>,
    /// Conference registration id.
    pub registration_id: Option<String>,
    /// Contact email for the confirmation.
    #[serde(alias = "userEmail")]
    pub user_email: Option<String>,
    /// Files attached through the upload step.
    #[serde(alias = "uploadedFiles")]
    pub uploaded_files: Option<Vec<UploadedFile>>,
}

/// Reads `null` as an empty string so it is reported as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewSubmission {
    /// Names of required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("presenter_name", &self.presenter_name),
            ("institution_name", &self.institution_name),
            ("presentation_type", &self.presentation_type),
            ("category", &self.category),
            ("abstract_content", &self.abstract_content),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// File details recorded with an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Attachment {
    /// Original file name shown to reviewers.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Storage path from the upload step.
    pub file_path: String,
}

/// A submission that passed every gate.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct AcceptedSubmission {
    /// The submission as received.
    pub submission: NewSubmission,
    /// Per-type validation of the content.
    pub validation: ValidationResult,
    /// The first uploaded file, if any.
    pub attachment: Option<Attachment>,
}

impl AcceptedSubmission {
    /// Whether a file is attached.
    pub const fn file_attached(&self) -> bool {
        self.attachment.is_some()
    }
}

/// Rules the gate enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSettings {
    /// Flat word cap applied before the per-type limit.
    pub submission_word_cap: usize,
    /// Accepted categories (exact match).
    pub categories: Vec<String>,
    /// Per-type word limits.
    pub limits: LimitTable,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            submission_word_cap: DEFAULT_SUBMISSION_WORD_CAP,
            categories: DEFAULT_CATEGORIES.iter().map(|c| (*c).to_string()).collect(),
            limits: LimitTable::builtin(),
        }
    }
}

impl GateSettings {
    fn check_cap(&self, content: &str) -> SubmissionResult<usize> {
        let words = count_words(content);
        if words > self.submission_word_cap {
            return Err(SubmissionError::OverSubmissionCap {
                words,
                cap: self.submission_word_cap,
            });
        }
        Ok(words)
    }

    fn check_type_limit(
        &self,
        content: &str,
        presentation_type: &str,
    ) -> SubmissionResult<ValidationResult> {
        let validation = self.limits.validate(content, presentation_type);
        if !validation.is_valid {
            return Err(SubmissionError::OverTypeLimit {
                words: validation.word_count,
                limit: validation.limit,
                presentation_type: presentation_type.to_string(),
            });
        }
        Ok(validation)
    }

    fn check_category(&self, category: &str) -> SubmissionResult<()> {
        if self.categories.iter().any(|c| c == category) {
            return Ok(());
        }
        Err(SubmissionError::InvalidCategory {
            category: category.to_string(),
            allowed: self.categories.clone(),
        })
    }
}

/// Run a new submission through every gate.
///
/// Order: required fields, flat cap, per-type limit, category.
#[tracing::instrument(skip_all, fields(presentation_type = %submission.presentation_type))]
pub fn check_submission(
    submission: &NewSubmission,
    settings: &GateSettings,
) -> SubmissionResult<AcceptedSubmission> {
    let missing = submission.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "submission missing required fields");
        return Err(SubmissionError::MissingFields(missing));
    }

    let words = settings.check_cap(&submission.abstract_content)?;
    let validation =
        settings.check_type_limit(&submission.abstract_content, &submission.presentation_type)?;
    settings.check_category(&submission.category)?;

    let attachment = submission
        .uploaded_files
        .as_ref()
        .and_then(|files| files.first())
        .map(|file| Attachment {
            file_name: file.original_name.clone(),
            file_size: file.size,
            file_path: file.path.clone(),
        });

    tracing::info!(
        words,
        limit = validation.limit,
        category = %submission.category,
        file_attached = attachment.is_some(),
        "submission accepted"
    );

    Ok(AcceptedSubmission {
        submission: submission.clone(),
        validation,
        attachment,
    })
}

/// Changes proposed for an existing submission. Absent fields stay as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SubmissionEdit {
    /// New title.
    pub title: Option<String>,
    /// New presenting author.
    pub presenter_name: Option<String>,
    /// New institution.
    pub institution_name: Option<String>,
    /// New presentation type label.
    pub presentation_type: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New abstract text.
    pub abstract_content: Option<String>,
    /// New co-authors.
    pub co_authors: Option<String>,
    /// Marks a bulk edit, which this path refuses.
    #[serde(alias = "bulkUpdate")]
    pub bulk: bool,
}

/// Check whether `edit` may be applied to a submission.
///
/// `current_type` is the stored presentation type, used for the per-type
/// limit when the edit does not change it. Empty values in the edit are
/// left unchecked.
#[tracing::instrument(skip_all, fields(status = %current_status))]
pub fn check_edit(
    current_status: ReviewStatus,
    current_type: &str,
    edit: &SubmissionEdit,
    settings: &GateSettings,
) -> SubmissionResult<()> {
    if edit.bulk {
        return Err(SubmissionError::BulkEdit);
    }

    if let Some(category) = non_empty(&edit.category) {
        settings.check_category(category)?;
    }

    if let Some(content) = non_empty(&edit.abstract_content) {
        settings.check_cap(content)?;
        let presentation_type = non_empty(&edit.presentation_type).unwrap_or(current_type);
        settings.check_type_limit(content, presentation_type)?;
    }

    if current_status != ReviewStatus::Pending {
        return Err(SubmissionError::AlreadyReviewed {
            status: current_status.to_string(),
        });
    }

    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Check whether a submission in `current_status` may be deleted.
pub fn check_delete(current_status: ReviewStatus) -> SubmissionResult<()> {
    if current_status != ReviewStatus::Pending {
        return Err(SubmissionError::NotDeletable {
            status: current_status.to_string(),
        });
    }
    Ok(())
}
