use std::fmt::Write;

use crate::average::format_average;
use crate::classify::Status;
use crate::summary::{AdmissionBucket, BatchSummary, CandidateOutcome, CandidateResult};

pub const REPORT_HEADER: &str = "BAC RESULTS - BATCH LOOKUP";
const HEADER_RULE_WIDTH: usize = 50;
const ENTRY_RULE_WIDTH: usize = 30;

/// Plain-text report for a batch run: header, one block per candidate, then
/// the summary.
pub fn render_report(
    outcomes: &[CandidateOutcome],
    summary: &BatchSummary,
    generated_at: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_HEADER}");
    let _ = writeln!(out, "{}", "=".repeat(HEADER_RULE_WIDTH));
    let _ = writeln!(out, "Date: {generated_at}");
    let _ = writeln!(out);

    for outcome in outcomes {
        let _ = writeln!(out, "Name: {}", outcome.entry.display_name);
        let _ = writeln!(out, "Id: {}", outcome.entry.candidate_id);
        let _ = writeln!(out, "Status: {}", outcome.status());
        let _ = writeln!(out, "Admission: {}", outcome.bucket());
        match &outcome.result {
            CandidateResult::Resolved(record) => {
                let _ = writeln!(out, "Track: {}", record.track);
                let average = record
                    .average
                    .map(format_average)
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(out, "Average: {average}");
            }
            CandidateResult::Failed { message } => {
                let _ = writeln!(out, "Error: {message}");
            }
        }
        let _ = writeln!(out, "{}", "-".repeat(ENTRY_RULE_WIDTH));
    }

    let _ = writeln!(out);
    out.push_str(&render_summary(summary));
    out
}

/// Summary block shared by the console and the report file.
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{}", "=".repeat(HEADER_RULE_WIDTH));
    if summary.interrupted {
        let _ = writeln!(out, "Run interrupted: partial results");
    }
    let _ = writeln!(out, "Total candidates processed: {}", summary.total);
    let _ = writeln!(out, "Results found: {}", summary.found());
    let _ = writeln!(out, "Not found: {}", summary.count(Status::NotDetermined));
    let _ = writeln!(out, "Errors: {}", summary.count(Status::Error));

    let _ = writeln!(out, "By status:");
    for status in Status::ALL {
        let _ = writeln!(out, "  {}: {}", status, summary.count(status));
    }
    let _ = writeln!(out, "By admission:");
    for bucket in AdmissionBucket::ALL {
        let _ = writeln!(out, "  {}: {}", bucket, summary.bucket_count(bucket));
    }

    match summary.averages {
        Some(stats) => {
            let _ = writeln!(
                out,
                "Averages ({} candidates): mean {}, min {}, max {}",
                stats.count,
                format_average(stats.mean),
                format_average(stats.min),
                format_average(stats.max)
            );
        }
        None => {
            let _ = writeln!(out, "Averages: none resolved");
        }
    }

    if !summary.errors.is_empty() {
        let _ = writeln!(out, "Error details:");
        for error in &summary.errors {
            let _ = writeln!(
                out,
                "  - {} (#{}): {}",
                error.display_name, error.candidate_id, error.message
            );
        }
    }
    out
}
