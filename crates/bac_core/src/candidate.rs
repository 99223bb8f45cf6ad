use std::fmt;

/// Registration number of an exam candidate.
///
/// Kept as the exact digit string the operator typed: leading zeros are
/// significant and the value is never converted to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid candidate id '{raw}': digits only")]
pub struct InvalidCandidateId {
    pub raw: String,
}

impl CandidateId {
    /// Accepts a non-empty run of ASCII digits, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, InvalidCandidateId> {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidCandidateId {
                raw: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CandidateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
