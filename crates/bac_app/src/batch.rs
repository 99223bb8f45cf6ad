//! `bac batch`: look up every candidate listed in a file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bac_core::render_summary;
use bac_engine::{load_batch_file, run_batch, save_report, ResultLookup};
use bac_logging::{bac_info, bac_warn};
use dialoguer::Input;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::console::{rule, ConsoleSink};

pub fn parse_confirmation(raw: &str) -> bool {
    let answer = raw.trim().to_lowercase();
    matches!(answer.as_str(), "y" | "yes" | "o" | "oui")
}

fn confirm(count: usize) -> Result<bool> {
    let raw: String = Input::new()
        .with_prompt(format!("Look up {count} candidate(s)? (y/n)"))
        .allow_empty(true)
        .interact_text()
        .context("confirmation prompt failed")?;
    Ok(parse_confirmation(&raw))
}

pub async fn run(
    lookup: &ResultLookup,
    config: &AppConfig,
    file: &Path,
    output: &Path,
    assume_yes: bool,
) -> Result<()> {
    if !file.exists() {
        bail!(
            "batch file {} not found (expected one `name:id` or `id` per line)",
            file.display()
        );
    }

    println!("Reading {}", file.display());
    let input = load_batch_file(file)?;
    for skipped in &input.skipped {
        println!(
            "Line {}: invalid candidate number '{}', skipped",
            skipped.line_number, skipped.raw_id
        );
    }
    if input.entries.is_empty() {
        bail!("no valid candidate number in {}", file.display());
    }

    println!("{} candidate(s) to look up:", input.entries.len());
    for (position, entry) in input.entries.iter().enumerate() {
        println!("  {}. {} (#{})", position + 1, entry.display_name, entry.candidate_id);
    }
    println!();

    if !assume_yes && !confirm(input.entries.len())? {
        println!("Cancelled.");
        return Ok(());
    }

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            bac_warn!("Interrupt received, stopping the batch");
            on_signal.cancel();
        }
    });

    let batch = run_batch(
        lookup,
        &input.entries,
        &config.batch_settings(),
        &ConsoleSink,
        &cancel,
    )
    .await;
    cancel.cancel();

    println!();
    println!("{}", rule('='));
    println!("{}", render_summary(&batch.summary()));

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let saved = save_report(output, &batch, &generated_at, config.write_json_summary)
        .with_context(|| format!("could not save the report to {}", output.display()))?;
    println!("Report saved to {}", saved.report_path.display());
    if let Some(summary_path) = &saved.summary_path {
        println!("Summary saved to {}", summary_path.display());
    }
    bac_info!(
        "Batch of {} done, {} processed",
        input.entries.len(),
        batch.outcomes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_confirmation;

    #[test]
    fn accepts_english_and_french_yes() {
        for raw in ["y", "YES", " o ", "Oui"] {
            assert!(parse_confirmation(raw), "{raw}");
        }
    }

    #[test]
    fn anything_else_declines() {
        for raw in ["", "n", "non", "no", "sure"] {
            assert!(!parse_confirmation(raw), "{raw}");
        }
    }
}
