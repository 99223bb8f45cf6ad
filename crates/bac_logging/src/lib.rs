#![deny(missing_docs)]
//! Logging macros for the bac crates.
//!
//! `bac_core` and `bac_engine` never pick a logger: they log skipped batch
//! lines, lookups, decode fallbacks and batch progress through the `bac_*`
//! macros, and the `bac` binary decides where that goes (`bac_results.log`,
//! plus the terminal with `--verbose`). Integration tests that want to see
//! the lookup log call [`initialize_for_tests`].

/// Trace-level message, for per-node or per-match detail.
#[macro_export]
macro_rules! bac_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Info-level message: lookups started and finished, reports written.
#[macro_export]
macro_rules! bac_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Debug-level message.
#[macro_export]
macro_rules! bac_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Warn-level message: recoverable faults such as a skipped batch line, a
/// failed lookup inside a batch, or a lossy decode.
#[macro_export]
macro_rules! bac_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error-level message: faults that end the command.
#[macro_export]
macro_rules! bac_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Terminal logger for integration tests, with the same RFC 3339 timestamps
/// as the binary's log file.
///
/// Safe to call from every test: only the first call installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // A logger installed by an earlier test stays in place.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
