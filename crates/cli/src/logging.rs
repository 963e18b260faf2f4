//! Diagnostic logging on stderr.
//!
//! Filter comes from `TFILL_LOG` (e.g. `TFILL_LOG=tablefill_engine=debug`),
//! defaulting to `warn`. `-v` forces `debug`. stdout stays reserved for
//! command output.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "TFILL_LOG";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
