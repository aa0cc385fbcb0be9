//! Review listing over stored submission records.
//!
//! Works on records already loaded into memory: filter by status and
//! category, newest first, truncated to a limit, with display defaults
//! filled in. Statistics always describe the full, unfiltered set.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ListingError, ListingResult};
use crate::submission::{DEFAULT_CATEGORIES, ReviewStatus};

/// Default number of records returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Filter value that disables a filter.
const ALL: &str = "all";

/// A stored submission as read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SubmissionRecord {
    /// Storage id.
    pub id: u64,
    /// Abstract title.
    pub title: Option<String>,
    /// Presenting author.
    pub presenter_name: Option<String>,
    /// Presenter's institution.
    pub institution_name: Option<String>,
    /// Presentation type label.
    pub presentation_type: Option<String>,
    /// Scientific category.
    pub category: Option<String>,
    /// Review status as stored. Matched ignoring case; absent means pending.
    pub status: Option<String>,
    /// When the abstract was submitted.
    pub submission_date: Option<DateTime<Utc>>,
    /// Human-facing abstract number.
    pub abstract_number: Option<String>,
    /// Attached file name.
    pub file_name: Option<String>,
    /// Attached file storage path.
    pub file_path: Option<String>,
    /// Attached file size in bytes.
    pub file_size: Option<u64>,
}

impl SubmissionRecord {
    /// The stored status, if present and recognized.
    pub fn review_status(&self) -> Option<ReviewStatus> {
        self.status.as_deref().and_then(ReviewStatus::parse)
    }

    /// Review status with an absent status read as pending.
    ///
    /// `None` only for a stored status that names no known state.
    pub fn effective_status(&self) -> Option<ReviewStatus> {
        match self.status {
            None => Some(ReviewStatus::Pending),
            Some(_) => self.review_status(),
        }
    }
}

/// A record with every display field resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListedSubmission {
    /// Storage id.
    pub id: u64,
    /// Title, or `Untitled`.
    pub title: String,
    /// Presenter, or `Unknown`.
    pub presenter_name: String,
    /// Institution, or `N/A`.
    pub institution_name: String,
    /// Presentation type, or `Poster`.
    pub presentation_type: String,
    /// Category, or the first configured category.
    pub category: String,
    /// Status as stored, or `pending`.
    pub status: String,
    /// Parsed review status; `None` for an unrecognized stored status.
    pub review_status: Option<ReviewStatus>,
    /// Submission time, if recorded.
    pub submission_date: Option<DateTime<Utc>>,
    /// Abstract number, or `ABST-NNN` from the listing position.
    pub abstract_number: String,
    /// Attached file name.
    pub file_name: Option<String>,
    /// Attached file storage path.
    pub file_path: Option<String>,
    /// Attached file size in bytes.
    pub file_size: Option<u64>,
    /// Both a file name and a file path are recorded.
    pub has_file: bool,
}

/// Filters for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Status name; `None` or `all` disables the filter.
    pub status: Option<String>,
    /// Category name; `None` or `all` disables the filter.
    pub category: Option<String>,
    /// Maximum number of records returned.
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status: None,
            category: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Counts over the full record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListingStats {
    /// Number of records.
    pub total: usize,
    /// Pending records, including records without a status.
    ///
    /// Records with an unrecognized status count only toward `total`.
    pub pending: usize,
    /// Approved records.
    pub approved: usize,
    /// Rejected records.
    pub rejected: usize,
    /// Records with a final submission.
    pub final_submitted: usize,
    /// Records per configured category, keyed by lowercase name.
    pub by_category: BTreeMap<String, usize>,
}

impl ListingStats {
    /// Count `records` by status and by each of `categories`.
    ///
    /// Records without a category count toward the first category.
    pub fn compute<S: AsRef<str>>(records: &[SubmissionRecord], categories: &[S]) -> Self {
        let mut stats = Self {
            total: records.len(),
            by_category: categories
                .iter()
                .map(|c| (c.as_ref().to_lowercase(), 0))
                .collect(),
            ..Self::default()
        };
        let fallback = categories.first().map(|c| c.as_ref().to_lowercase());

        for record in records {
            match record.effective_status() {
                Some(ReviewStatus::Pending) => stats.pending += 1,
                Some(ReviewStatus::Approved) => stats.approved += 1,
                Some(ReviewStatus::Rejected) => stats.rejected += 1,
                Some(ReviewStatus::FinalSubmitted) => stats.final_submitted += 1,
                None => {}
            }

            let category = record
                .category
                .as_deref()
                .map(str::to_lowercase)
                .or_else(|| fallback.clone());
            if let Some(count) = category.and_then(|c| stats.by_category.get_mut(&c)) {
                *count += 1;
            }
        }

        stats
    }
}

/// Result of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Listing {
    /// Matching records, newest first.
    pub submissions: Vec<ListedSubmission>,
    /// Number of records returned.
    pub count: usize,
    /// Statistics over every record, ignoring filters.
    pub stats: ListingStats,
}

/// Filter, sort, truncate and normalize `records`.
///
/// `categories` drives the per-category statistics and the default
/// category; pass [`DEFAULT_CATEGORIES`] when nothing is configured.
#[tracing::instrument(skip(records, categories), fields(records = records.len()))]
pub fn list_submissions<S: AsRef<str>>(
    records: &[SubmissionRecord],
    query: &ListQuery,
    categories: &[S],
) -> ListingResult<Listing> {
    let status = match query.status.as_deref() {
        None => None,
        Some(s) if s.eq_ignore_ascii_case(ALL) => None,
        Some(s) => {
            Some(ReviewStatus::parse(s).ok_or_else(|| ListingError::UnknownStatus(s.to_string()))?)
        }
    };
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.eq_ignore_ascii_case(ALL));

    let mut matching: Vec<&SubmissionRecord> = records
        .iter()
        // A status filter only matches records that carry a stored status.
        .filter(|r| status.is_none_or(|s| r.review_status() == Some(s)))
        .filter(|r| {
            category.is_none_or(|wanted| {
                r.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(wanted))
            })
        })
        .collect();
    tracing::debug!(
        matched = matching.len(),
        status = ?status,
        category = ?category,
        "filters applied"
    );

    // Newest first; records without a date sort last.
    matching.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
    matching.truncate(query.limit);

    let default_category = categories
        .first()
        .map_or(DEFAULT_CATEGORIES[0], |c| c.as_ref());
    let submissions: Vec<ListedSubmission> = matching
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize(record, index, default_category))
        .collect();

    Ok(Listing {
        count: submissions.len(),
        submissions,
        stats: ListingStats::compute(records, categories),
    })
}

fn normalize(record: &SubmissionRecord, index: usize, default_category: &str) -> ListedSubmission {
    let or = |value: &Option<String>, fallback: &str| {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };
    ListedSubmission {
        id: record.id,
        title: or(&record.title, "Untitled"),
        presenter_name: or(&record.presenter_name, "Unknown"),
        institution_name: or(&record.institution_name, "N/A"),
        presentation_type: or(&record.presentation_type, "Poster"),
        category: or(&record.category, default_category),
        status: or(&record.status, ReviewStatus::Pending.as_str()),
        review_status: record.effective_status(),
        submission_date: record.submission_date,
        abstract_number: record
            .abstract_number
            .clone()
            .unwrap_or_else(|| format!("ABST-{:03}", index + 1)),
        file_name: record.file_name.clone(),
        file_path: record.file_path.clone(),
        file_size: record.file_size,
        has_file: record.file_name.is_some() && record.file_path.is_some(),
    }
}
