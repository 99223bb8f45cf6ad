use std::fmt;

use crate::average::{extract_average, normalize_whitespace};
use crate::keywords::{matches_concept, Concept};
use crate::scanner::{scan_patterns, LabeledMatch, MatchLabel};
use crate::track::{detect_track, Track};
use crate::{CandidateId, PageContent};

/// Averages at or above this pass outright.
pub const PASS_THRESHOLD: f64 = 10.0;
/// Averages below this fail; between the two the candidate retakes.
pub const FAIL_BELOW: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Admitted,
    Retake,
    Failed,
    FoundUnverified,
    NotDetermined,
    Error,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Admitted,
        Status::Retake,
        Status::Failed,
        Status::FoundUnverified,
        Status::NotDetermined,
        Status::Error,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Admitted => "Admitted",
            Status::Retake => "Retake session",
            Status::Failed => "Failed",
            Status::FoundUnverified => "Found (unverified)",
            Status::NotDetermined => "Not determined",
            Status::Error => "Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule produced the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBasis {
    AdmittedKeyword,
    FailedKeyword,
    AverageThreshold,
    CandidateMention,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub status: Status,
    pub basis: StatusBasis,
    pub average: Option<f64>,
}

/// Status implied by an average alone.
pub fn classify_average(average: f64) -> Status {
    if average >= PASS_THRESHOLD {
        Status::Admitted
    } else if average >= FAIL_BELOW {
        Status::Retake
    } else {
        Status::Failed
    }
}

/// Classifies a page. Explicit verdict words take precedence over the
/// numeric fallback, which only applies when the candidate id is on the page.
pub fn classify(text: &str, candidate_id: &CandidateId) -> Classification {
    let average = extract_average(text);
    let id_on_page = text.contains(candidate_id.as_str());

    let (status, basis) = if matches_concept(Concept::Admitted, text) {
        (Status::Admitted, StatusBasis::AdmittedKeyword)
    } else if matches_concept(Concept::Failed, text) {
        (Status::Failed, StatusBasis::FailedKeyword)
    } else if let (Some(value), true) = (average, id_on_page) {
        (classify_average(value), StatusBasis::AverageThreshold)
    } else if id_on_page && matches_concept(Concept::Decision, text) {
        (Status::FoundUnverified, StatusBasis::CandidateMention)
    } else {
        (Status::NotDetermined, StatusBasis::Nothing)
    };

    Classification {
        status,
        basis,
        average,
    }
}

/// Interpreted result of one lookup. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub candidate_id: CandidateId,
    pub status: Status,
    pub basis: StatusBasis,
    pub average: Option<f64>,
    pub track: Track,
    pub establishment: Option<String>,
    /// Scanner matches followed by tagged-element details, in discovery order.
    pub raw_matches: Vec<LabeledMatch>,
}

impl ResultRecord {
    pub fn admission_summary(&self) -> Option<String> {
        let text = match (self.status, self.basis) {
            (Status::Admitted, StatusBasis::AverageThreshold) => "Admitted (average >= 10)",
            (Status::Retake, _) => "Retake session (8 <= average < 10)",
            (Status::Failed, StatusBasis::AverageThreshold) => "Failed (average < 8)",
            (Status::Admitted, _) => "Admitted",
            (Status::Failed, _) => "Failed",
            _ => return None,
        };
        Some(text.to_string())
    }
}

/// Full interpretation of a page for one candidate. Pure: the same page and
/// id always give the same record.
pub fn interpret(page: &PageContent, candidate_id: &CandidateId) -> ResultRecord {
    let classification = classify(&page.text, candidate_id);
    let normalized = normalize_whitespace(&page.text);

    let mut raw_matches = scan_patterns(&normalized, candidate_id);
    raw_matches.extend(
        page.tagged
            .iter()
            .map(|text| normalize_whitespace(text.trim()))
            .filter(|text| !text.is_empty())
            .map(|text| LabeledMatch::new(MatchLabel::Detail, text)),
    );

    let establishment = raw_matches
        .iter()
        .find(|m| m.label == MatchLabel::Establishment)
        .map(|m| m.value.clone());

    ResultRecord {
        candidate_id: candidate_id.clone(),
        status: classification.status,
        basis: classification.basis,
        average: classification.average,
        track: detect_track(&normalized),
        establishment,
        raw_matches,
    }
}
