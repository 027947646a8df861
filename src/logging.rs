//! Logging setup for the `vars-on-top` binary and tests.
//!
//! Levels are used as follows: `warn!` for files that could not be parsed,
//! `info!` for per-file summaries, `debug!` for each reported node.
//! `RUST_LOG` overrides the default `warn` filter, e.g.
//! `RUST_LOG=vars_on_top::walker=debug vars-on-top app.js`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the logger, honouring `RUST_LOG`. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    });
}

/// Test-friendly logger, also honouring `RUST_LOG`. Never panics if one is
/// already installed.
pub fn init_test() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}
