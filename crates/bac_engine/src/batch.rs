use std::time::Duration;

use bac_core::{BatchEntry, BatchSummary, CandidateOutcome};
use bac_logging::{bac_info, bac_warn};
use tokio_util::sync::CancellationToken;

use crate::lookup::ResultLookup;

/// Politeness pause between two consecutive batch lookups.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub delay: Duration,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_BATCH_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started {
        total: usize,
    },
    /// `index` is 1-based.
    LookupStarted {
        index: usize,
        total: usize,
        entry: BatchEntry,
    },
    LookupFinished {
        index: usize,
        total: usize,
        outcome: CandidateOutcome,
    },
    Pausing {
        delay: Duration,
    },
    Interrupted {
        completed: usize,
        total: usize,
    },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: BatchEvent);
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchRun {
    /// Append-only, in entry order.
    pub outcomes: Vec<CandidateOutcome>,
    pub interrupted: bool,
}

impl BatchRun {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_outcomes(&self.outcomes, self.interrupted)
    }
}

/// Looks up every entry in order, one at a time, pausing between lookups.
///
/// A failed lookup becomes an error outcome and the run continues.
/// Cancelling `cancel` stops the run between or during lookups; the outcomes
/// collected so far are returned.
pub async fn run_batch(
    lookup: &ResultLookup,
    entries: &[BatchEntry],
    settings: &BatchSettings,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> BatchRun {
    let total = entries.len();
    let mut outcomes = Vec::with_capacity(total);
    let mut interrupted = false;
    sink.emit(BatchEvent::Started { total });

    for (position, entry) in entries.iter().enumerate() {
        if cancel.is_cancelled() {
            interrupted = true;
            break;
        }

        if position > 0 && !settings.delay.is_zero() {
            sink.emit(BatchEvent::Pausing {
                delay: settings.delay,
            });
            let paused = tokio::select! {
                _ = cancel.cancelled() => false,
                _ = tokio::time::sleep(settings.delay) => true,
            };
            if !paused {
                interrupted = true;
                break;
            }
        }

        let index = position + 1;
        sink.emit(BatchEvent::LookupStarted {
            index,
            total,
            entry: entry.clone(),
        });

        let result = tokio::select! {
            _ = cancel.cancelled() => None,
            result = lookup.lookup(&entry.candidate_id) => Some(result),
        };
        let Some(result) = result else {
            interrupted = true;
            break;
        };

        let outcome = match result {
            Ok(output) => CandidateOutcome::resolved(entry.clone(), output.record),
            Err(err) => {
                bac_warn!(
                    "Lookup failed for {} (#{}): {}",
                    entry.display_name,
                    entry.candidate_id,
                    err
                );
                CandidateOutcome::failed(entry.clone(), err.to_string())
            }
        };
        sink.emit(BatchEvent::LookupFinished {
            index,
            total,
            outcome: outcome.clone(),
        });
        outcomes.push(outcome);
    }

    if interrupted {
        bac_warn!("Batch interrupted after {} of {} candidates", outcomes.len(), total);
        sink.emit(BatchEvent::Interrupted {
            completed: outcomes.len(),
            total,
        });
    } else {
        bac_info!("Batch finished: {} candidates", total);
    }

    BatchRun {
        outcomes,
        interrupted,
    }
}
