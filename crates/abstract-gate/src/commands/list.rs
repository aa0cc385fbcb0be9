//! List command: filter and summarize stored submissions.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use abstract_gate_core::listing::{ListQuery, SubmissionRecord, list_submissions};
use abstract_gate_core::submission::ReviewStatus;

use super::read_json_file;

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON file holding an array of submission records.
    pub file: Utf8PathBuf,

    /// Only show this status (pending, approved, rejected, final_submitted, all).
    #[arg(long)]
    pub status: Option<String>,

    /// Only show this category (or `all`).
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of records to show.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// List the records in `args.file`.
#[instrument(name = "cmd_list", skip_all, fields(file = %args.file))]
pub fn cmd_list(
    args: ListArgs,
    global_json: bool,
    categories: &[String],
    default_limit: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(status = ?args.status, category = ?args.category, limit = ?args.limit, "executing list command");

    let records: Vec<SubmissionRecord> = read_json_file(&args.file, max_input_bytes)?;
    let query = ListQuery {
        status: args.status,
        category: args.category,
        limit: args.limit.unwrap_or(default_limit),
    };
    let listing = list_submissions(&records, &query, categories)
        .with_context(|| format!("failed to list {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for s in &listing.submissions {
        let status = match s.review_status {
            Some(ReviewStatus::Pending) => s.status.yellow().to_string(),
            Some(ReviewStatus::Approved | ReviewStatus::FinalSubmitted) => {
                s.status.green().to_string()
            }
            Some(ReviewStatus::Rejected) => s.status.red().to_string(),
            None => s.status.dimmed().to_string(),
        };
        let date = s
            .submission_date
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
        println!(
            "{}  {}  {}  {} / {}  {}{}",
            s.abstract_number.bold(),
            date.dimmed(),
            status,
            s.presentation_type,
            s.category,
            s.title,
            if s.has_file { " [file]" } else { "" },
        );
    }

    let stats = &listing.stats;
    println!();
    println!(
        "{} {} shown, {} total: {} pending, {} approved, {} rejected, {} final",
        "Stats:".bold(),
        listing.count,
        stats.total,
        stats.pending,
        stats.approved,
        stats.rejected,
        stats.final_submitted,
    );
    let by_category: Vec<String> = stats
        .by_category
        .iter()
        .map(|(category, n)| format!("{category} {n}"))
        .collect();
    println!("  {}", by_category.join(", ").dimmed());

    Ok(())
}
