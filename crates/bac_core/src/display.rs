use std::collections::HashSet;
use std::fmt::Write;

use crate::average::format_average;
use crate::classify::{ResultRecord, Status};
use crate::scanner::{LabeledMatch, MatchLabel};
use crate::track::Track;

/// Longest value shown on the console before it is cut with `...`.
pub const MAX_VALUE_CHARS: usize = 100;
const PREVIEW_LINES: usize = 15;
const PREVIEW_LINE_CHARS: usize = 80;
const PREVIEW_MIN_CHARS: usize = 3;

/// Classifier-derived pairs followed by the raw matches, in display order:
/// priority labels first (in-label order preserved), then everything else.
/// Each distinct pair appears once.
pub fn ordered_matches(record: &ResultRecord) -> Vec<LabeledMatch> {
    let mut collected = Vec::new();
    if let Some(admission) = record.admission_summary() {
        collected.push(LabeledMatch::new(MatchLabel::Admission, admission));
    }
    if let Some(average) = record.average {
        collected.push(LabeledMatch::new(MatchLabel::Average, format_average(average)));
    }
    if record.track != Track::Unspecified {
        collected.push(LabeledMatch::new(MatchLabel::Track, record.track.label()));
    }
    collected.extend(record.raw_matches.iter().cloned());

    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(collected.len());
    for label in MatchLabel::PRIORITY {
        for pair in collected.iter().filter(|pair| pair.label == label) {
            if seen.insert(pair.clone()) {
                ordered.push(pair.clone());
            }
        }
    }
    for pair in &collected {
        if seen.insert(pair.clone()) {
            ordered.push(pair.clone());
        }
    }
    ordered
}

fn marker(pair: &LabeledMatch, status: Status) -> &'static str {
    match pair.label {
        MatchLabel::Admission => match status {
            Status::Admitted => "✅",
            Status::Retake => "🔄",
            Status::Failed => "❌",
            _ => "❓",
        },
        MatchLabel::Average => "📊",
        MatchLabel::Track => "📚",
        MatchLabel::CandidateStatus => "🔍",
        _ => "•",
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let cut: String = value.chars().take(max).collect();
        format!("{cut}...")
    } else {
        value.to_string()
    }
}

/// Console rendering of a single lookup.
pub fn render_record(record: &ResultRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== RESULTS FOR CANDIDATE #{} ===", record.candidate_id);
    let _ = writeln!(out, "Status: {}", record.status);

    let pairs = ordered_matches(record);
    if pairs.is_empty() {
        let _ = writeln!(out, "No result information found.");
        return out;
    }

    let _ = writeln!(out, "{}", "-".repeat(50));
    for pair in &pairs {
        let value = truncate_chars(&pair.value, MAX_VALUE_CHARS);
        let _ = writeln!(
            out,
            "{} {}: {}",
            marker(pair, record.status),
            pair.label.title(),
            value
        );
    }
    out
}

/// Short preview of the page for lookups where nothing was recognised.
pub fn render_preview(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .flat_map(|line| line.split(" | "))
        .map(str::trim)
        .filter(|line| line.chars().count() > PREVIEW_MIN_CHARS)
        .collect();

    let mut out = String::new();
    if lines.is_empty() {
        let _ = writeln!(out, "The page has no readable content.");
        return out;
    }

    let _ = writeln!(out, "Page preview:");
    for (index, line) in lines.iter().take(PREVIEW_LINES).enumerate() {
        let _ = writeln!(
            out,
            "{:2}. {}",
            index + 1,
            truncate_chars(line, PREVIEW_LINE_CHARS)
        );
    }
    if lines.len() > PREVIEW_LINES {
        let _ = writeln!(out, "... and {} more lines", lines.len() - PREVIEW_LINES);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("éééé", 2), "éé...");
        assert_eq!(truncate_chars("abc", 3), "abc");
    }
}
