mod batch;
mod cli;
mod config;
mod console;
mod interactive;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use bac_core::CandidateId;
use bac_engine::{ReqwestFetcher, ResultLookup, DEFAULT_BATCH_FILE};
use bac_logging::{bac_error, bac_info};
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};
use config::AppConfig;
use logging::LogDestination;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        logging::initialize(LogDestination::Both, LevelFilter::Debug);
    } else {
        logging::initialize(LogDestination::File, LevelFilter::Info);
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    bac_info!("Using result page template {}", config.url_template);
    let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
    let lookup = ResultLookup::new(fetcher, config.url_template.clone());

    if let Err(err) = dispatch(cli.command, &lookup, &config).await {
        bac_error!("{:#}", err);
        return Err(err);
    }
    Ok(())
}

async fn dispatch(command: Commands, lookup: &ResultLookup, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Lookup { id: Some(raw) } => {
            let candidate_id = CandidateId::parse(&raw)?;
            if !interactive::lookup_and_print(lookup, &candidate_id).await {
                bail!("lookup failed for candidate #{candidate_id}");
            }
        }
        Commands::Lookup { id: None } => {
            interactive::run_interactive(lookup, config.interactive_pause()).await?;
        }
        Commands::Batch { file, yes, output } => {
            let file = file.unwrap_or_else(|| PathBuf::from(DEFAULT_BATCH_FILE));
            let output = output.unwrap_or_else(|| config.report_path.clone());
            batch::run(lookup, config, &file, &output, yes).await?;
        }
    }
    Ok(())
}
