use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bac_core::{parse_batch_entries, BatchInput};
use bac_logging::{bac_info, bac_warn};

pub const DEFAULT_BATCH_FILE: &str = "etu.txt";

#[derive(Debug, thiserror::Error)]
pub enum BatchInputError {
    #[error("cannot read batch file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads and parses a batch file. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn load_batch_file(path: &Path) -> Result<BatchInput, BatchInputError> {
    let bytes = fs::read(path).map_err(|source| BatchInputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            bac_warn!("{} is not valid UTF-8; decoding with replacements", path.display());
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    let input = parse_batch_entries(&content);
    bac_info!(
        "Loaded {} entries ({} skipped) from {}",
        input.entries.len(),
        input.skipped.len(),
        path.display()
    );
    Ok(input)
}
