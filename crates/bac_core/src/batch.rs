use bac_logging::bac_warn;

use crate::CandidateId;

/// One line of a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub display_name: String,
    pub candidate_id: CandidateId,
}

impl BatchEntry {
    pub fn new(display_name: impl Into<String>, candidate_id: CandidateId) -> Self {
        Self {
            display_name: display_name.into(),
            candidate_id,
        }
    }

    /// Entry named after its id, for lines without a name.
    pub fn unnamed(candidate_id: CandidateId) -> Self {
        Self::new(format!("Candidate_{candidate_id}"), candidate_id)
    }
}

/// A line rejected because its id is not all digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub raw_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchInput {
    pub entries: Vec<BatchEntry>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a batch file: one `name:id` or bare `id` per line. Blank lines and
/// lines starting with `#` are ignored; invalid ids are reported as skipped.
pub fn parse_batch_entries(content: &str) -> BatchInput {
    let mut input = BatchInput::default();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, raw_id) = match line.split_once(':') {
            Some((name, id)) => (Some(name.trim()), id.trim()),
            None => (None, line),
        };

        match CandidateId::parse(raw_id) {
            Ok(id) => {
                let entry = match name {
                    Some(name) if !name.is_empty() => BatchEntry::new(name, id),
                    _ => BatchEntry::unnamed(id),
                };
                input.entries.push(entry);
            }
            Err(_) => {
                bac_warn!("Line {}: invalid candidate id '{}' skipped", index + 1, raw_id);
                input.skipped.push(SkippedLine {
                    line_number: index + 1,
                    raw_id: raw_id.to_string(),
                });
            }
        }
    }

    input
}
