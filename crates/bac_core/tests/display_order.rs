use bac_core::{
    interpret, ordered_matches, render_preview, render_record, CandidateId, LabeledMatch,
    MatchLabel, PageContent, Status,
};
use pretty_assertions::assert_eq;

fn sample_page() -> PageContent {
    PageContent {
        text: "Établissement: Lycée National | Mention: Bien | 40123 Admis | Moyenne: 15,5 \
               | Série: SN | mention: Bien"
            .to_string(),
        tagged: vec!["Résultat: Admis".to_string()],
    }
}

#[test]
fn pairs_follow_priority_order_without_duplicates() {
    let record = interpret(&sample_page(), &CandidateId::parse("40123").unwrap());
    let ordered = ordered_matches(&record);

    assert_eq!(
        ordered,
        vec![
            LabeledMatch::new(MatchLabel::Admission, "Admitted"),
            LabeledMatch::new(MatchLabel::Average, "15.50"),
            LabeledMatch::new(MatchLabel::Track, "Sciences naturelles (SN)"),
            LabeledMatch::new(MatchLabel::CandidateStatus, "40123 Admis"),
            LabeledMatch::new(MatchLabel::Honor, "Bien"),
            LabeledMatch::new(MatchLabel::Establishment, "Lycée National"),
            LabeledMatch::new(MatchLabel::Detail, "Résultat: Admis"),
        ]
    );
}

#[test]
fn ordering_is_stable_across_runs() {
    let id = CandidateId::parse("40123").unwrap();
    let first = ordered_matches(&interpret(&sample_page(), &id));
    let second = ordered_matches(&interpret(&sample_page(), &id));
    assert_eq!(first, second);
}

#[test]
fn undecided_record_still_shows_scanner_matches() {
    let page = PageContent::from_text("Mention: Passable | Académie: Nouakchott");
    let record = interpret(&page, &CandidateId::parse("77").unwrap());
    assert_eq!(record.status, Status::NotDetermined);

    let rendered = render_record(&record);
    assert!(rendered.contains("Status: Not determined"));
    assert!(rendered.contains("Honor: Passable"));
    assert!(rendered.contains("Academy: Nouakchott"));
    assert!(!rendered.contains("No result information found."));
}

#[test]
fn empty_record_says_nothing_was_found() {
    let record = interpret(&PageContent::default(), &CandidateId::parse("77").unwrap());
    let rendered = render_record(&record);
    assert!(rendered.contains("No result information found."));
}

#[test]
fn retake_admission_line_explains_threshold() {
    let page = PageContent::from_text("N° 40123 | Moyenne: 9,25");
    let record = interpret(&page, &CandidateId::parse("40123").unwrap());
    let rendered = render_record(&record);
    assert!(rendered.contains("🔄 Admission: Retake session (8 <= average < 10)"));
    assert!(rendered.contains("📊 Average: 9.25"));
}

#[test]
fn preview_lists_first_fifteen_meaningful_lines() {
    let text = (1..=20)
        .map(|i| format!("Line number {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let preview = render_preview(&format!("ok\n{text}"));

    assert!(preview.contains(" 1. Line number 1\n"));
    assert!(preview.contains("15. Line number 15\n"));
    assert!(!preview.contains("Line number 16"));
    assert!(preview.contains("... and 5 more lines"));
    assert!(!preview.contains(". ok"));
}
