use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bac",
    version,
    about = "Look up baccalaureate results by candidate number"
)]
pub struct Cli {
    /// RON configuration file (default: ./bac.ron when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log to the terminal as well, at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one candidate, or prompt for numbers until 'quit'
    Lookup {
        /// Candidate number (digits only)
        id: Option<String>,
    },
    /// Look up every candidate listed in a file (`name:id` or `id` per line)
    Batch {
        /// Input file (default: etu.txt)
        file: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Report file (default from configuration)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn batch_defaults_to_no_file_and_asks_for_confirmation() {
        let cli = Cli::parse_from(["bac", "batch"]);
        match cli.command {
            Commands::Batch { file, yes, output } => {
                assert!(file.is_none());
                assert!(!yes);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn lookup_keeps_id_as_text() {
        let cli = Cli::parse_from(["bac", "--verbose", "lookup", "00123"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Lookup { id } => assert_eq!(id.as_deref(), Some("00123")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
