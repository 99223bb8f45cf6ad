//! Secondary pattern scanner.
//!
//! Runs independently of the classifier and reports every labeled match it
//! finds, so the operator still sees something useful on pages the classifier
//! could not decide.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::average::{all_averages, format_average};
use crate::keywords::{concept_matches, Concept};
use crate::track::Track;
use crate::CandidateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLabel {
    Admission,
    Average,
    Track,
    CandidateStatus,
    Honor,
    Establishment,
    Academy,
    /// Text of a tagged page element; not tied to a category.
    Detail,
}

impl MatchLabel {
    /// Display priority. Labels not listed here are shown afterwards.
    pub const PRIORITY: [MatchLabel; 7] = [
        MatchLabel::Admission,
        MatchLabel::Average,
        MatchLabel::Track,
        MatchLabel::CandidateStatus,
        MatchLabel::Honor,
        MatchLabel::Establishment,
        MatchLabel::Academy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MatchLabel::Admission => "Admission",
            MatchLabel::Average => "Average",
            MatchLabel::Track => "Track",
            MatchLabel::CandidateStatus => "Candidate status",
            MatchLabel::Honor => "Honor",
            MatchLabel::Establishment => "Establishment",
            MatchLabel::Academy => "Academy",
            MatchLabel::Detail => "Detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledMatch {
    pub label: MatchLabel,
    pub value: String,
}

impl LabeledMatch {
    pub fn new(label: MatchLabel, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for LabeledMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label.title(), self.value)
    }
}

lazy_static! {
    static ref HONOR: Regex = captured_after(Concept::Honor, r"(\w+)");
    static ref ESTABLISHMENT: Regex = captured_after(Concept::Establishment, r"([^|]+)");
    static ref ACADEMY: Regex = captured_after(Concept::Academy, r"([^|]+)");
}

fn captured_after(concept: Concept, value: &str) -> Regex {
    let pattern = format!(r"(?i){}\s*[:\-]?\s*{}", concept.alternation(), value);
    Regex::new(&pattern).expect("scanner pattern")
}

/// Phrase starting at the candidate id and ending at the nearest verdict or
/// honor word.
fn candidate_phrase(candidate_id: &CandidateId) -> Option<Regex> {
    let verdict = [Concept::Admitted, Concept::Failed, Concept::Honor]
        .iter()
        .map(|concept| concept.alternation())
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        "(?i){}.*?(?:{})",
        regex::escape(candidate_id.as_str()),
        verdict
    );
    Regex::new(&pattern).ok()
}

/// Scans whitespace-normalized text for every labeled pattern, in fixed
/// pattern order. Repeated matches are kept; deduplication is a display
/// concern.
pub fn scan_patterns(normalized: &str, candidate_id: &CandidateId) -> Vec<LabeledMatch> {
    let mut found = Vec::new();

    if let Some(phrase) = candidate_phrase(candidate_id) {
        found.extend(
            phrase
                .find_iter(normalized)
                .map(|m| LabeledMatch::new(MatchLabel::CandidateStatus, m.as_str().trim())),
        );
    }

    found.extend(
        all_averages(normalized)
            .into_iter()
            .map(|value| LabeledMatch::new(MatchLabel::Average, format_average(value))),
    );

    push_captures(&mut found, &HONOR, normalized, MatchLabel::Honor);

    for track in Track::DETECTION_ORDER {
        if let Some(concept) = track.concept() {
            let hits = concept_matches(concept, normalized).len();
            found.extend((0..hits).map(|_| LabeledMatch::new(MatchLabel::Track, track.label())));
        }
    }

    push_captures(&mut found, &ESTABLISHMENT, normalized, MatchLabel::Establishment);
    push_captures(&mut found, &ACADEMY, normalized, MatchLabel::Academy);

    found
}

fn push_captures(found: &mut Vec<LabeledMatch>, re: &Regex, text: &str, label: MatchLabel) {
    for caps in re.captures_iter(text) {
        if let Some(value) = caps.get(1).map(|m| m.as_str().trim()) {
            if !value.is_empty() {
                found.push(LabeledMatch::new(label, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{scan_patterns, LabeledMatch, MatchLabel};
    use crate::CandidateId;

    fn id(raw: &str) -> CandidateId {
        CandidateId::parse(raw).unwrap()
    }

    #[test]
    fn candidate_phrase_stops_at_first_verdict_word() {
        let found = scan_patterns("N° 40123 Ahmed Salem Admis | Mention: Bien", &id("40123"));
        assert_eq!(
            found[0],
            LabeledMatch::new(MatchLabel::CandidateStatus, "40123 Ahmed Salem Admis")
        );
    }

    #[test]
    fn establishment_capture_stops_at_block_separator() {
        let found = scan_patterns("Établissement : Lycée de Rosso | Académie: Trarza", &id("1"));
        let establishment: Vec<_> = found
            .iter()
            .filter(|m| m.label == MatchLabel::Establishment)
            .collect();
        assert_eq!(establishment.len(), 1);
        assert_eq!(establishment[0].value, "Lycée de Rosso");
        assert!(found.contains(&LabeledMatch::new(MatchLabel::Academy, "Trarza")));
    }

    #[test]
    fn repeated_mentions_are_all_reported() {
        let found = scan_patterns("mention: Bien | mention - Passable", &id("1"));
        let honors: Vec<_> = found
            .iter()
            .filter(|m| m.label == MatchLabel::Honor)
            .map(|m| m.value.as_str())
            .collect();
        assert_eq!(honors, vec!["Bien", "Passable"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(scan_patterns("", &id("123")).is_empty());
    }
}
