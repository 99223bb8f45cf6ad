use lazy_static::lazy_static;
use regex::Regex;

use crate::keywords::{Concept, Script};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace pattern");
    /// One regex per average keyword variant, in table order. The number is
    /// the first capture group.
    static ref AVERAGE_PATTERNS: Vec<Regex> = Concept::Average
        .variants()
        .iter()
        .map(|variant| {
            let number = match variant.script {
                // Integer part alone is accepted after the non-Latin keyword.
                Script::Arabic => r"(\d+(?:[.,]\d+)?)",
                Script::Latin => r"(\d+[.,]\d+)",
            };
            let pattern = format!(r"(?i){}\s*[:\-]?\s*{}", variant.fragment(), number);
            Regex::new(&pattern).expect("average pattern")
        })
        .collect();
}

/// Collapses every whitespace run into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// First average found in `text`, trying the keyword variants in order.
/// A capture that does not parse as a number is skipped, so a later mention
/// can still supply the value.
pub fn extract_average(text: &str) -> Option<f64> {
    all_averages(&normalize_whitespace(text)).into_iter().next()
}

/// Every average mention in `text`, in keyword-variant order then text order.
pub(crate) fn all_averages(normalized: &str) -> Vec<f64> {
    AVERAGE_PATTERNS
        .iter()
        .flat_map(|re| re.captures_iter(normalized))
        .filter_map(|caps| caps.get(1).and_then(|m| parse_decimal(m.as_str())))
        .collect()
}

/// Parses `12,5`, `12.5` or the same written with Arabic-Indic digits.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let ascii: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            ',' | '.' => Some('.'),
            _ => ascii_digit(c),
        })
        .collect::<Option<String>>()?;
    ascii.parse::<f64>().ok()
}

// `\d` in the patterns matches any Unicode decimal digit; only the scripts
// found on result pages are mapped, anything else fails to parse.
fn ascii_digit(c: char) -> Option<char> {
    let zero = match c {
        '0'..='9' => '0',
        '\u{0660}'..='\u{0669}' => '\u{0660}',
        '\u{06F0}'..='\u{06F9}' => '\u{06F0}',
        _ => return None,
    };
    char::from_digit(c as u32 - zero as u32, 10)
}

pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}
