//! Bac core: pure interpretation of exam-result pages.
//!
//! Nothing in this crate performs I/O. Text goes in, records come out, and
//! the rendering helpers return strings for the caller to print or persist.
mod average;
mod batch;
mod candidate;
mod classify;
mod display;
mod keywords;
mod page;
mod report;
mod scanner;
mod summary;
mod track;

pub use average::{extract_average, format_average, normalize_whitespace};
pub use batch::{parse_batch_entries, BatchEntry, BatchInput, SkippedLine};
pub use candidate::{CandidateId, InvalidCandidateId};
pub use classify::{
    classify, classify_average, interpret, Classification, ResultRecord, Status, StatusBasis,
    FAIL_BELOW, PASS_THRESHOLD,
};
pub use display::{ordered_matches, render_preview, render_record, MAX_VALUE_CHARS};
pub use keywords::{matches_concept, Concept, Script, Variant};
pub use page::PageContent;
pub use report::{render_report, render_summary, REPORT_HEADER};
pub use scanner::{scan_patterns, LabeledMatch, MatchLabel};
pub use summary::{
    AdmissionBucket, AverageStats, BatchError, BatchSummary, CandidateOutcome, CandidateResult,
};
pub use track::{detect_track, Track};
