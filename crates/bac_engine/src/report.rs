use std::path::{Path, PathBuf};

use bac_core::{render_report, AdmissionBucket, BatchSummary, Status};
use bac_logging::bac_info;
use serde_json::{json, Value};

use crate::batch::BatchRun;
use crate::persist::{write_atomic, PersistError};

pub const DEFAULT_REPORT_FILE: &str = "resultats_batch.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    pub report_path: PathBuf,
    pub summary_path: Option<PathBuf>,
}

/// Writes the text report and, when asked, a JSON summary next to it
/// (see [`summary_path_for`]).
pub fn save_report(
    path: &Path,
    run: &BatchRun,
    generated_at: &str,
    with_json_summary: bool,
) -> Result<SavedReport, PersistError> {
    let summary = run.summary();
    let report = render_report(&run.outcomes, &summary, generated_at);
    write_atomic(path, &report)?;
    bac_info!("Report written to {}", path.display());

    let summary_path = if with_json_summary {
        let json_path = summary_path_for(path);
        let body = serde_json::to_string_pretty(&summary_json(&summary, generated_at))?;
        write_atomic(&json_path, &body)?;
        bac_info!("JSON summary written to {}", json_path.display());
        Some(json_path)
    } else {
        None
    };

    Ok(SavedReport {
        report_path: path.to_path_buf(),
        summary_path,
    })
}

/// Same name with a `.json` extension, or `<stem>.summary.json` when the
/// report itself already ends in `.json`.
pub fn summary_path_for(report_path: &Path) -> PathBuf {
    let json_path = report_path.with_extension("json");
    if json_path != report_path {
        return json_path;
    }
    let stem = report_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    report_path.with_file_name(format!("{stem}.summary.json"))
}

fn summary_json(summary: &BatchSummary, generated_at: &str) -> Value {
    let statuses: serde_json::Map<String, Value> = Status::ALL
        .iter()
        .map(|status| (status.label().to_string(), json!(summary.count(*status))))
        .collect();
    let buckets: serde_json::Map<String, Value> = AdmissionBucket::ALL
        .iter()
        .map(|bucket| (bucket.label().to_string(), json!(summary.bucket_count(*bucket))))
        .collect();
    let averages = summary.averages.map(|stats| {
        json!({
            "count": stats.count,
            "mean": stats.mean,
            "min": stats.min,
            "max": stats.max,
        })
    });
    let errors: Vec<Value> = summary
        .errors
        .iter()
        .map(|error| {
            json!({
                "name": error.display_name,
                "id": error.candidate_id,
                "message": error.message,
            })
        })
        .collect();

    json!({
        "generated_at": generated_at,
        "total": summary.total,
        "found": summary.found(),
        "interrupted": summary.interrupted,
        "status_counts": statuses,
        "admission_counts": buckets,
        "averages": averages,
        "errors": errors,
    })
}
