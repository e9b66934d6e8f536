//! Tracing subscriber setup
//!
//! Installed once from `main`. Engine components never reach for a global
//! logger; they carry a [`Span`](tracing::Span) handed to them at
//! construction.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default filter directive for the global verbosity flags.
///
/// `--verbose` wins over `--quiet`; clap rejects the pair anyway.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "infat=trace"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the flags
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
