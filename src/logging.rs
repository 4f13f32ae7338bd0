//! Diagnostic tracing for capm itself.
//!
//! Package output and progress go to the terminal through `crate::ui`; this
//! module only wires up `tracing` events, written to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `capm=debug` with `--verbose`.
///
/// # Example
/// ```bash
/// RUST_LOG=capm=trace capm check
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "capm=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
