//! Terminal rendering of lookups and batch progress.

use bac_core::{
    ordered_matches, render_preview, render_record, CandidateResult, ResultRecord, Status,
};
use bac_engine::{BatchEvent, LookupOutput, ProgressSink};

pub const RULE_WIDTH: usize = 60;

pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Full record, plus a page preview when nothing at all was recognized.
pub fn print_lookup(output: &LookupOutput) {
    println!("{}", render_record(&output.record));
    if needs_preview(&output.record) {
        println!();
        println!("{}", render_preview(&output.page.text));
    }
}

fn needs_preview(record: &ResultRecord) -> bool {
    record.status == Status::NotDetermined && ordered_matches(record).is_empty()
}

/// Prints batch progress as it happens.
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&self, event: BatchEvent) {
        match event {
            BatchEvent::Started { total } => {
                println!("Batch lookup: {total} candidate(s) to process");
                println!("{}", rule('='));
            }
            BatchEvent::LookupStarted {
                index,
                total,
                entry,
            } => {
                println!();
                println!(
                    "[{index}/{total}] {} (#{})",
                    entry.display_name, entry.candidate_id
                );
                println!("{}", "-".repeat(50));
            }
            BatchEvent::LookupFinished { outcome, .. } => match &outcome.result {
                CandidateResult::Resolved(record) => {
                    println!("{}", render_record(record));
                    println!("Done: {} -> {}", outcome.entry.display_name, record.status);
                }
                CandidateResult::Failed { message } => {
                    println!("Error for {}: {message}", outcome.entry.display_name);
                }
            },
            BatchEvent::Pausing { delay } => {
                println!("Waiting {}s before the next lookup...", delay.as_secs());
            }
            BatchEvent::Interrupted { completed, total } => {
                println!();
                println!("Interrupted: {completed} of {total} candidate(s) processed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::needs_preview;
    use bac_core::{interpret, CandidateId, PageContent};

    #[test]
    fn preview_only_when_nothing_matched() {
        let id = CandidateId::parse("77").unwrap();

        let empty = interpret(&PageContent::from_text("Bienvenue sur le site"), &id);
        assert!(needs_preview(&empty));

        let graded = interpret(&PageContent::from_text("Moyenne : 12,00"), &id);
        assert!(!needs_preview(&graded));
    }
}
