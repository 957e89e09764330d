//! Test support for seqsync.
//!
//! - [`MirrorObserver`] keeps an independent copy of the sequence and applies
//!   each notified edit to it, failing on any out-of-range position.
//! - [`StepLogger`] counts notifications per kind.
//! - [`FailAfter`] injects an observer failure at a chosen edit.
//! - [`cases`] enumerates small inputs exhaustively; [`fixtures`] holds the
//!   literal city-list scenarios.

pub mod cases;
mod fail_after;
pub mod fixtures;
mod mirror;
mod step_logger;

pub use fail_after::{FailAfter, InjectedFailure};
pub use mirror::MirrorObserver;
pub use step_logger::StepLogger;

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `warn`. Safe to call from every test.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Owned strings from literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
