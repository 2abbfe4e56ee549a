//! Logger initialisation for binaries and tests that want diagnostics.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger.
///
/// When `verbose` is `true`, all debug messages are printed. Otherwise only
/// info level and above are shown. `RUST_LOG` overrides either default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    // Timestamps add nothing to deterministic traversal diagnostics and
    // clutter captured test output.
    builder.format_timestamp(None);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
