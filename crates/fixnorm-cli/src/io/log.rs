// crates/fixnorm-cli/src/io/log.rs

use tracing::Level;

/// Structured diagnostics go to stderr; stdout carries the outcome report.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
