//! Keyword concept table.
//!
//! Result pages mix French and Arabic. Each concept the interpreter looks for
//! maps to an ordered list of variants, one per spelling or script, so a new
//! spelling is a one-line addition here instead of another branch in the
//! classifier.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    Admitted,
    Failed,
    Decision,
    Average,
    Honor,
    Establishment,
    Academy,
    TrackNatural,
    TrackMath,
    TrackLetters,
}

impl Concept {
    pub const ALL: [Concept; 10] = [
        Concept::Admitted,
        Concept::Failed,
        Concept::Decision,
        Concept::Average,
        Concept::Honor,
        Concept::Establishment,
        Concept::Academy,
        Concept::TrackNatural,
        Concept::TrackMath,
        Concept::TrackLetters,
    ];

    /// Variants in the order they are tried.
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Concept::Admitted => ADMITTED,
            Concept::Failed => FAILED,
            Concept::Decision => DECISION,
            Concept::Average => AVERAGE,
            Concept::Honor => HONOR,
            Concept::Establishment => ESTABLISHMENT,
            Concept::Academy => ACADEMY,
            Concept::TrackNatural => TRACK_NATURAL,
            Concept::TrackMath => TRACK_MATH,
            Concept::TrackLetters => TRACK_LETTERS,
        }
    }

    /// Case-insensitive alternation of every variant, without a capture group.
    pub fn alternation(self) -> String {
        let parts: Vec<String> = self.variants().iter().map(Variant::fragment).collect();
        format!("(?:{})", parts.join("|"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub script: Script,
    /// Regex fragment for the keyword itself.
    pub keyword: &'static str,
}

impl Variant {
    const fn latin(keyword: &'static str) -> Self {
        Self {
            script: Script::Latin,
            keyword,
        }
    }

    const fn arabic(keyword: &'static str) -> Self {
        Self {
            script: Script::Arabic,
            keyword,
        }
    }

    /// Regex fragment for this variant. Latin words only match on word
    /// boundaries; Arabic words take attached prefixes, so they are not bounded.
    pub fn fragment(&self) -> String {
        match self.script {
            Script::Latin => format!(r"\b(?:{})\b", self.keyword),
            Script::Arabic => format!("(?:{})", self.keyword),
        }
    }
}

const ADMITTED: &[Variant] = &[
    Variant::arabic("ناجح"),
    Variant::latin("r[ée]ussie?s?"),
    Variant::latin("admise?s?"),
];

const FAILED: &[Variant] = &[
    Variant::arabic("راسب"),
    Variant::latin("[ée]chec"),
    Variant::latin("refus[ée]e?s?"),
];

const DECISION: &[Variant] = &[
    Variant::arabic("القرار"),
    Variant::arabic("النتيجة"),
    Variant::latin("d[ée]cision"),
    Variant::latin("r[ée]sultats?"),
    Variant::latin("baccalaur[ée]at"),
    Variant::latin("bac"),
];

// The non-Latin keyword is tried first.
const AVERAGE: &[Variant] = &[
    Variant::arabic("المعدل"),
    Variant::latin(r"moyenne?(?:\s+g[ée]n[ée]rale)?"),
    Variant::latin("average"),
];

const HONOR: &[Variant] = &[Variant::latin("mention"), Variant::arabic("التقدير")];

const ESTABLISHMENT: &[Variant] = &[
    Variant::latin("[ée]tablissement"),
    Variant::arabic("المؤسسة"),
];

const ACADEMY: &[Variant] = &[Variant::latin("acad[ée]mie")];

const TRACK_NATURAL: &[Variant] = &[
    Variant::arabic("العلوم الطبيعية"),
    Variant::latin(r"sciences\s+naturelles"),
    Variant::latin("sn"),
];

const TRACK_MATH: &[Variant] = &[
    Variant::arabic("الرياضيات"),
    Variant::latin(r"sciences\s+math[ée]matiques"),
    Variant::latin("sm"),
];

const TRACK_LETTERS: &[Variant] = &[Variant::arabic("الآداب"), Variant::latin("lettres")];

lazy_static! {
    static ref CONCEPT_MATCHERS: HashMap<Concept, Regex> = Concept::ALL
        .iter()
        .map(|&concept| {
            let pattern = format!("(?i){}", concept.alternation());
            (concept, Regex::new(&pattern).expect("concept pattern"))
        })
        .collect();
}

/// True when any variant of `concept` occurs in `text`.
pub fn matches_concept(concept: Concept, text: &str) -> bool {
    CONCEPT_MATCHERS
        .get(&concept)
        .is_some_and(|re| re.is_match(text))
}

/// Every non-overlapping occurrence of `concept`, in text order.
pub(crate) fn concept_matches<'t>(concept: Concept, text: &'t str) -> Vec<&'t str> {
    CONCEPT_MATCHERS
        .get(&concept)
        .map(|re| re.find_iter(text).map(|m| m.as_str()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{concept_matches, matches_concept, Concept};

    #[test]
    fn every_concept_compiles() {
        for concept in Concept::ALL {
            // Forces the lazy table and exercises each regex once.
            let _ = matches_concept(concept, "");
        }
    }

    #[test]
    fn latin_variants_ignore_case_and_accents_variants() {
        assert!(matches_concept(Concept::Admitted, "Décision : ADMIS"));
        assert!(matches_concept(Concept::Failed, "ECHEC"));
        assert!(matches_concept(Concept::Failed, "Candidat Refusée"));
        assert!(matches_concept(Concept::Establishment, "ÉTABLISSEMENT: Lycée"));
    }

    #[test]
    fn latin_variants_need_word_boundaries() {
        assert!(!matches_concept(Concept::Admitted, "Admission 2024"));
        assert!(!matches_concept(Concept::TrackNatural, "snack"));
        assert!(!matches_concept(Concept::TrackMath, "smart"));
        assert!(matches_concept(Concept::TrackNatural, "Série: SN"));
    }

    #[test]
    fn arabic_variants_match_inside_words() {
        assert!(matches_concept(Concept::Admitted, "النتيجة: ناجح"));
        assert!(matches_concept(Concept::Average, "والمعدل 12"));
        assert!(matches_concept(Concept::Failed, "راسب"));
    }

    #[test]
    fn concept_matches_returns_each_occurrence() {
        let found = concept_matches(Concept::Honor, "Mention: Bien | mention: Passable");
        assert_eq!(found, vec!["Mention", "mention"]);
    }
}
