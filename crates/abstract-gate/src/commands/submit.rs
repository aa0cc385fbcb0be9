//! Submit command: run a submission through the gate.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use abstract_gate_core::submission::{
    AcceptedSubmission, GateSettings, NewSubmission, check_submission,
};

use super::read_json_file;

/// Arguments for the `submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// JSON file holding the submission.
    pub file: Utf8PathBuf,
}

/// Gate outcome, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct SubmitReport {
    /// Whether every gate passed.
    pub accepted: bool,
    /// The accepted submission and its validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AcceptedSubmission>,
    /// Why the submission was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check the submission in `args.file` against `settings`.
#[instrument(name = "cmd_submit", skip_all, fields(file = %args.file))]
pub fn cmd_submit(
    args: SubmitArgs,
    global_json: bool,
    settings: &GateSettings,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, cap = settings.submission_word_cap, "executing submit command");

    let submission: NewSubmission = read_json_file(&args.file, max_input_bytes)?;
    let outcome = check_submission(&submission, settings);

    if global_json {
        let report = match outcome {
            Ok(ref accepted) => SubmitReport {
                accepted: true,
                result: Some(accepted.clone()),
                error: None,
            },
            Err(ref err) => SubmitReport {
                accepted: false,
                result: None,
                error: Some(err.to_string()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let accepted = match outcome {
        Ok(accepted) => accepted,
        Err(err) => bail!("{} rejected: {err}", args.file),
    };

    if !global_json {
        let v = &accepted.validation;
        println!(
            "{} {} \"{}\" ({} words of {}, {})",
            "ACCEPTED:".green(),
            args.file,
            accepted.submission.title,
            v.word_count,
            v.limit,
            accepted.submission.presentation_type,
        );
        if let Some(ref attachment) = accepted.attachment {
            println!(
                "  {} {} ({} bytes)",
                "attachment:".cyan(),
                attachment.file_name,
                attachment.file_size
            );
        }
    }

    Ok(())
}
