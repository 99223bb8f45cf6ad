//! Prompt loop for looking up candidates one at a time.

use std::time::Duration;

use anyhow::Result;
use bac_core::CandidateId;
use bac_engine::ResultLookup;
use bac_logging::{bac_info, bac_warn};
use dialoguer::Input;

use crate::console::{print_lookup, rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Lookup(CandidateId),
    Quit,
    Invalid,
}

pub fn parse_reply(raw: &str) -> PromptReply {
    let trimmed = raw.trim();
    if ["quit", "exit", "q"]
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return PromptReply::Quit;
    }
    match CandidateId::parse(trimmed) {
        Ok(id) => PromptReply::Lookup(id),
        Err(_) => PromptReply::Invalid,
    }
}

/// Looks up one candidate and prints the outcome. Returns whether the lookup
/// reached the page.
pub async fn lookup_and_print(lookup: &ResultLookup, candidate_id: &CandidateId) -> bool {
    println!("Looking up candidate #{candidate_id}...");
    match lookup.lookup(candidate_id).await {
        Ok(output) => {
            print_lookup(&output);
            true
        }
        Err(err) => {
            bac_warn!("Lookup failed for {}: {}", candidate_id, err);
            println!("Lookup failed for candidate #{candidate_id}: {err}");
            false
        }
    }
}

/// Asks for candidate numbers until the user quits or input ends.
pub async fn run_interactive(lookup: &ResultLookup, pause: Duration) -> Result<()> {
    println!("Bac results lookup");
    println!("{}", rule('='));

    loop {
        let raw: String = match Input::new()
            .with_prompt("Candidate number (or 'quit' to exit)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(raw) => raw,
            Err(err) => {
                bac_info!("Prompt closed: {}", err);
                println!();
                break;
            }
        };

        match parse_reply(&raw) {
            PromptReply::Quit => break,
            PromptReply::Invalid => {
                println!("Please enter a valid candidate number (digits only).");
            }
            PromptReply::Lookup(candidate_id) => {
                lookup_and_print(lookup, &candidate_id).await;
                println!("{}", rule('='));
                if !pause.is_zero() {
                    tokio::time::sleep(pause).await;
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
