use std::collections::BTreeMap;
use std::fmt;

use crate::classify::{ResultRecord, Status};
use crate::BatchEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateResult {
    Resolved(ResultRecord),
    Failed { message: String },
}

/// What happened to one batch entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateOutcome {
    pub entry: BatchEntry,
    pub result: CandidateResult,
}

impl CandidateOutcome {
    pub fn resolved(entry: BatchEntry, record: ResultRecord) -> Self {
        Self {
            entry,
            result: CandidateResult::Resolved(record),
        }
    }

    pub fn failed(entry: BatchEntry, message: impl Into<String>) -> Self {
        Self {
            entry,
            result: CandidateResult::Failed {
                message: message.into(),
            },
        }
    }

    pub fn status(&self) -> Status {
        match &self.result {
            CandidateResult::Resolved(record) => record.status,
            CandidateResult::Failed { .. } => Status::Error,
        }
    }

    pub fn bucket(&self) -> AdmissionBucket {
        AdmissionBucket::from(self.status())
    }

    pub fn record(&self) -> Option<&ResultRecord> {
        match &self.result {
            CandidateResult::Resolved(record) => Some(record),
            CandidateResult::Failed { .. } => None,
        }
    }
}

/// Reporting bucket. Pages that named the candidate without a verdict and
/// pages that said nothing usable both land in `Unverified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdmissionBucket {
    Admitted,
    Retake,
    Failed,
    Unverified,
    Error,
}

impl AdmissionBucket {
    pub const ALL: [AdmissionBucket; 5] = [
        AdmissionBucket::Admitted,
        AdmissionBucket::Retake,
        AdmissionBucket::Failed,
        AdmissionBucket::Unverified,
        AdmissionBucket::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdmissionBucket::Admitted => "Admitted",
            AdmissionBucket::Retake => "Retake",
            AdmissionBucket::Failed => "Failed",
            AdmissionBucket::Unverified => "Unverified",
            AdmissionBucket::Error => "Error",
        }
    }
}

impl From<Status> for AdmissionBucket {
    fn from(status: Status) -> Self {
        match status {
            Status::Admitted => AdmissionBucket::Admitted,
            Status::Retake => AdmissionBucket::Retake,
            Status::Failed => AdmissionBucket::Failed,
            Status::FoundUnverified | Status::NotDetermined => AdmissionBucket::Unverified,
            Status::Error => AdmissionBucket::Error,
        }
    }
}

impl fmt::Display for AdmissionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl AverageStats {
    fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            mean: sum / values.len() as f64,
            min,
            max,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    pub display_name: String,
    pub candidate_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub status_counts: BTreeMap<Status, usize>,
    pub bucket_counts: BTreeMap<AdmissionBucket, usize>,
    pub averages: Option<AverageStats>,
    pub errors: Vec<BatchError>,
    /// Set when the run was stopped before every entry was processed.
    pub interrupted: bool,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[CandidateOutcome], interrupted: bool) -> Self {
        let mut summary = BatchSummary {
            total: outcomes.len(),
            interrupted,
            ..Default::default()
        };
        let mut averages = Vec::new();

        for outcome in outcomes {
            *summary.status_counts.entry(outcome.status()).or_default() += 1;
            *summary.bucket_counts.entry(outcome.bucket()).or_default() += 1;
            match &outcome.result {
                CandidateResult::Resolved(record) => averages.extend(record.average),
                CandidateResult::Failed { message } => summary.errors.push(BatchError {
                    display_name: outcome.entry.display_name.clone(),
                    candidate_id: outcome.entry.candidate_id.to_string(),
                    message: message.clone(),
                }),
            }
        }

        summary.averages = AverageStats::from_values(&averages);
        summary
    }

    pub fn count(&self, status: Status) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }

    pub fn bucket_count(&self, bucket: AdmissionBucket) -> usize {
        self.bucket_counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Candidates whose page yielded something: everything except
    /// `NotDetermined` and errors.
    pub fn found(&self) -> usize {
        self.total - self.count(Status::NotDetermined) - self.count(Status::Error)
    }
}
