//! Log output setup

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The filter comes from `QUOTEBOOK_LOG`, then `RUST_LOG`, defaulting to
/// `warn`. `verbose` forces debug output for this crate. Calling this more
/// than once keeps the first subscriber.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,quotebook=debug")
    } else {
        EnvFilter::try_from_env("QUOTEBOOK_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
