//! Diagnostic logging setup.
//!
//! User-facing output goes through `println!`/`eprintln!`; everything emitted
//! with `tracing` lands on stderr and is filtered by `SEEK_LOG`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "SEEK_LOG";

/// Filter used when `SEEK_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,seek=debug"
    } else {
        "warn"
    }
}

pub fn build_filter(directive: Option<&str>, verbose: bool) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(verbose)))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(verbose: bool) {
    let directive = std::env::var(LOG_FILTER_ENV).ok();
    let filter = build_filter(directive.as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
