//! Check command: classify an abstract against its presentation type limit.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use abstract_gate_core::feedback::{
    self, Milestone, get_word_count_message, has_minimum_content, is_optimal_for_limit,
};
use abstract_gate_core::limits::LimitTable;
use abstract_gate_core::status::{StatusBand, WordCountDisplay, format_word_count, progress_color};
use abstract_gate_core::validation::DetailedValidation;
use abstract_gate_core::words::{DEFAULT_PREVIEW_WORDS, word_preview};

use super::read_input_file;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text file holding the abstract.
    pub file: Utf8PathBuf,

    /// Presentation type the abstract is submitted as.
    #[arg(short = 't', long = "type", default_value = "Poster")]
    pub presentation_type: String,
}

/// Everything the check command reports.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// File that was checked.
    pub file: String,
    /// Validation, band, styling and suggestion.
    #[serde(flatten)]
    pub detailed: DetailedValidation,
    /// Live-counter style message.
    pub message: String,
    /// Whether the length sits in the recommended range.
    pub optimal: bool,
    /// Whether the minimum content floor is met.
    pub minimum_met: bool,
    /// Compact counter.
    pub counter: WordCountDisplay,
    /// Progress bar colour class.
    pub progress_color: &'static str,
    /// Checkpoints on the way to the limit.
    pub milestones: Vec<Milestone>,
    /// Opening words of the abstract.
    pub preview: String,
}

/// Build the check report for `content`.
pub fn build_report(
    file: &str,
    content: &str,
    presentation_type: &str,
    table: &LimitTable,
) -> CheckReport {
    let detailed = table.detailed_validation(content, presentation_type);
    let words = detailed.validation.word_count;
    let limit = detailed.validation.limit;
    // The bar follows the capped validation percentage; bands use the uncapped one.
    let bar = progress_color(detailed.validation.percentage);

    CheckReport {
        file: file.to_string(),
        message: get_word_count_message(words, limit, presentation_type),
        optimal: is_optimal_for_limit(words, limit, presentation_type),
        minimum_met: has_minimum_content(words, presentation_type),
        counter: format_word_count(words, limit),
        progress_color: bar,
        milestones: feedback::milestones_for_limit(limit, presentation_type),
        preview: word_preview(content, DEFAULT_PREVIEW_WORDS),
        detailed,
    }
}

/// Classify the abstract in `args.file`.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file, presentation_type = %args.presentation_type))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    table: &LimitTable,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing check command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = build_report(args.file.as_str(), &content, &args.presentation_type, table);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let v = &report.detailed.validation;
    if !v.is_valid {
        bail!(
            "{} has {} words, over the {}-word limit for {}. {}",
            args.file,
            v.word_count,
            v.limit,
            report.detailed.presentation_type,
            report.detailed.suggestion,
        );
    }

    let band = match report.detailed.status {
        StatusBand::Good => report.detailed.status.as_str().green().to_string(),
        StatusBand::Warning => report.detailed.status.as_str().yellow().to_string(),
        StatusBand::NearLimit | StatusBand::OverLimit => {
            report.detailed.status.as_str().red().to_string()
        }
    };
    println!(
        "{} {} {} ({}, {})",
        "PASS:".green(),
        args.file,
        report.counter.display,
        report.counter.percentage,
        band,
    );
    println!("  {}", report.message);
    println!("  {}", report.detailed.suggestion.dimmed());
    if !report.minimum_met {
        println!(
            "  {} below the recommended minimum for {}",
            "note:".yellow(),
            report.detailed.presentation_type
        );
    }

    Ok(())
}
