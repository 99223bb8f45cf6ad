use std::fmt;

use crate::keywords::{matches_concept, Concept};

/// Exam track (série).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Track {
    ScienceNatural,
    ScienceMath,
    Letters,
    #[default]
    Unspecified,
}

impl Track {
    /// Detection order: the first track whose keywords occur wins.
    pub const DETECTION_ORDER: [Track; 3] =
        [Track::ScienceNatural, Track::ScienceMath, Track::Letters];

    pub(crate) fn concept(self) -> Option<Concept> {
        match self {
            Track::ScienceNatural => Some(Concept::TrackNatural),
            Track::ScienceMath => Some(Concept::TrackMath),
            Track::Letters => Some(Concept::TrackLetters),
            Track::Unspecified => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Track::ScienceNatural => "Sciences naturelles (SN)",
            Track::ScienceMath => "Sciences mathématiques (SM)",
            Track::Letters => "Lettres",
            Track::Unspecified => "Unspecified",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn detect_track(text: &str) -> Track {
    Track::DETECTION_ORDER
        .into_iter()
        .find(|track| {
            track
                .concept()
                .is_some_and(|concept| matches_concept(concept, text))
        })
        .unwrap_or_default()
}
