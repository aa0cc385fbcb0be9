//! Limits command: the effective presentation-type table.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use abstract_gate_core::limits::{LimitTable, minimum_words};
use abstract_gate_core::presentation::{PresentationTypeInfo, TypeCategory};

/// Arguments for the `limits` subcommand.
#[derive(Args, Debug, Default)]
pub struct LimitsArgs {
    /// Show a single presentation type (unknown labels get the default limit).
    pub presentation_type: Option<String>,

    /// Only show types in this group.
    #[arg(long, value_enum)]
    pub category: Option<TypeCategory>,
}

/// One row of the limits table.
#[derive(Debug, Serialize)]
pub struct LimitRow {
    /// Type details, including the resolved limit.
    #[serde(flatten)]
    pub info: PresentationTypeInfo,
    /// Recommended minimum word count.
    pub minimum_words: usize,
    /// Whether the label is in the table or fell back to the default.
    pub known: bool,
}

fn row(table: &LimitTable, label: &str) -> LimitRow {
    LimitRow {
        info: table.info(label),
        minimum_words: minimum_words(label),
        known: table.contains(label),
    }
}

/// Rows for `presentation_type`, or for every label in the table, keeping
/// only those in `category` when given.
pub fn limit_rows(
    table: &LimitTable,
    presentation_type: Option<&str>,
    category: Option<TypeCategory>,
) -> Vec<LimitRow> {
    let rows: Vec<LimitRow> = match presentation_type {
        Some(label) => vec![row(table, label)],
        None => table.iter().map(|(label, _)| row(table, label)).collect(),
    };
    rows.into_iter()
        .filter(|r| category.is_none_or(|c| r.info.category == c))
        .collect()
}

/// Print the limit table.
#[instrument(name = "cmd_limits", skip_all)]
pub fn cmd_limits(args: LimitsArgs, global_json: bool, table: &LimitTable) -> anyhow::Result<()> {
    debug!(presentation_type = ?args.presentation_type, entries = table.len(), "executing limits command");

    let rows = limit_rows(table, args.presentation_type.as_deref(), args.category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = rows
        .iter()
        .map(|r| r.info.presentation_type.len())
        .max()
        .unwrap_or(0);
    for r in &rows {
        let label = format!("{:<width$}", r.info.presentation_type);
        let label = if r.known {
            label.bold().to_string()
        } else {
            label.yellow().to_string()
        };
        println!(
            "{}  {:>4} words  (min {:>3})  {}  {}",
            label,
            r.info.limit,
            r.minimum_words,
            r.info.time_allocation.dimmed(),
            r.info.description,
        );
    }

    Ok(())
}
