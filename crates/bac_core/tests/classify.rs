use bac_core::{
    classify, classify_average, interpret, CandidateId, LabeledMatch, MatchLabel, PageContent,
    Status, StatusBasis, Track,
};
use pretty_assertions::assert_eq;

fn id(raw: &str) -> CandidateId {
    CandidateId::parse(raw).unwrap()
}

#[test]
fn threshold_boundaries() {
    assert_eq!(classify_average(10.0), Status::Admitted);
    assert_eq!(classify_average(9.999), Status::Retake);
    assert_eq!(classify_average(8.0), Status::Retake);
    assert_eq!(classify_average(7.999), Status::Failed);
}

#[test]
fn numeric_fallback_applies_when_id_is_on_page() {
    let cases = [
        ("Numéro 40123 | Moyenne: 10,00", Status::Admitted),
        ("Numéro 40123 | Moyenne: 9.999", Status::Retake),
        ("Numéro 40123 | Moyenne: 8.00", Status::Retake),
        ("Numéro 40123 | Moyenne: 7,999", Status::Failed),
    ];
    for (text, expected) in cases {
        let result = classify(text, &id("40123"));
        assert_eq!(result.status, expected, "text: {text}");
        assert_eq!(result.basis, StatusBasis::AverageThreshold);
    }
}

#[test]
fn explicit_admitted_keyword_beats_low_average() {
    let result = classify("Candidat 40123 admis | Moyenne : 6,5", &id("40123"));
    assert_eq!(result.status, Status::Admitted);
    assert_eq!(result.basis, StatusBasis::AdmittedKeyword);
    assert_eq!(result.average, Some(6.5));
}

#[test]
fn explicit_failed_keyword_beats_high_average() {
    let result = classify("Décision : Refusé | 40123 | Moyenne: 12,5", &id("40123"));
    assert_eq!(result.status, Status::Failed);
    assert_eq!(result.basis, StatusBasis::FailedKeyword);
}

#[test]
fn admitted_keyword_is_checked_before_failed_keyword() {
    let result = classify("ناجح | راسب", &id("1"));
    assert_eq!(result.status, Status::Admitted);
}

#[test]
fn average_without_candidate_id_does_not_decide() {
    let result = classify("Moyenne: 14,5", &id("999"));
    assert_eq!(result.status, Status::NotDetermined);
    assert_eq!(result.average, Some(14.5));
}

#[test]
fn id_with_decision_keyword_is_found_unverified() {
    let result = classify("Résultats du bac | Candidat 40123", &id("40123"));
    assert_eq!(result.status, Status::FoundUnverified);
    assert_eq!(result.basis, StatusBasis::CandidateMention);
}

#[test]
fn id_alone_is_not_determined() {
    let result = classify("Numéro 40123", &id("40123"));
    assert_eq!(result.status, Status::NotDetermined);
}

#[test]
fn leading_zeros_must_appear_literally() {
    let result = classify("Numéro 123 | Moyenne: 12,00 | bac", &id("00123"));
    assert_eq!(result.status, Status::NotDetermined);
}

#[test]
fn arabic_average_with_id_elsewhere_is_admitted() {
    let page = PageContent::from_text("الرقم 40123\n\nالمعدل   14.2\nالشعبة: العلوم الطبيعية");
    let record = interpret(&page, &id("40123"));
    assert_eq!(record.status, Status::Admitted);
    assert_eq!(record.average, Some(14.2));
    assert_eq!(record.track, Track::ScienceNatural);
}

#[test]
fn interpretation_is_deterministic() {
    let page = PageContent {
        text: "Établissement: Lycée 2 | 555 Mention: Assez bien | Moyenne 12,75".to_string(),
        tagged: vec!["Résultat  final".to_string()],
    };
    let first = interpret(&page, &id("555"));
    let second = interpret(&page, &id("555"));
    assert_eq!(first, second);
    assert_eq!(first.establishment.as_deref(), Some("Lycée 2"));
    assert_eq!(first.status, Status::Admitted);
}

#[test]
fn empty_page_is_not_determined_without_matches() {
    let record = interpret(&PageContent::default(), &id("40123"));
    assert_eq!(record.status, Status::NotDetermined);
    assert_eq!(record.average, None);
    assert_eq!(record.track, Track::Unspecified);
    assert!(record.raw_matches.is_empty());
}

#[test]
fn arabic_failed_keyword_alone_is_failed() {
    let result = classify("الرقم 40123 | النتيجة: راسب", &id("40123"));
    assert_eq!(result.status, Status::Failed);
    assert_eq!(result.basis, StatusBasis::FailedKeyword);
}

#[test]
fn arabic_decision_keyword_with_id_is_found_unverified() {
    let result = classify("القرار | رقم المترشح 40123", &id("40123"));
    assert_eq!(result.status, Status::FoundUnverified);
    assert_eq!(result.basis, StatusBasis::CandidateMention);
    assert_eq!(result.average, None);
}

#[test]
fn arabic_indic_average_drives_numeric_fallback() {
    let result = classify("الرقم 40123 | المعدل ٩.٥", &id("40123"));
    assert_eq!(result.status, Status::Retake);
    assert_eq!(result.basis, StatusBasis::AverageThreshold);
    assert_eq!(result.average, Some(9.5));
}

#[test]
fn arabic_indic_average_is_read_before_latin_mention() {
    let result = classify("المعدل ١٤ | Moyenne: 14,20 | 40123", &id("40123"));
    assert_eq!(result.status, Status::Admitted);
    assert_eq!(result.average, Some(14.0));
}

#[test]
fn track_split_across_lines_matches_scanner() {
    let page = PageContent::from_text("الرقم 40123\nالشعبة: العلوم\n   الطبيعية");
    let record = interpret(&page, &id("40123"));
    assert_eq!(record.track, Track::ScienceNatural);
    assert!(record
        .raw_matches
        .contains(&LabeledMatch::new(MatchLabel::Track, Track::ScienceNatural.label())));
}
