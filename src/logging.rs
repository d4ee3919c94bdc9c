// 📜 Logging
// tracing subscriber setup for the binaries (stderr, RUST_LOG aware)

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the default level.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "nutri_match=debug,nutri_server=debug,tower_http=debug"
    } else {
        "nutri_match=info,nutri_server=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // no-op when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
