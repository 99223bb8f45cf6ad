//! Bac engine: fetching, decoding, text extraction and batch orchestration
//! around the pure interpreter in `bac_core`.
mod batch;
mod decode;
mod extract;
mod fetch;
mod input;
mod lookup;
mod persist;
mod report;
mod types;

pub use batch::{run_batch, BatchEvent, BatchRun, BatchSettings, ProgressSink, DEFAULT_BATCH_DELAY};
pub use decode::{decode_html, decode_html_lossy, DecodeError, DecodedHtml};
pub use extract::{PageExtractor, VisibleTextExtractor, BLOCK_SEPARATOR, RESULT_CLASSES};
pub use fetch::{
    FetchSettings, Fetcher, ReqwestFetcher, BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE,
    BROWSER_USER_AGENT,
};
pub use input::{load_batch_file, BatchInputError, DEFAULT_BATCH_FILE};
pub use lookup::{url_for, ResultLookup, DEFAULT_URL_TEMPLATE, ID_PLACEHOLDER};
pub use persist::{ensure_parent_dir, write_atomic, PersistError};
pub use report::{save_report, summary_path_for, SavedReport, DEFAULT_REPORT_FILE};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, LookupError, LookupOutput};
