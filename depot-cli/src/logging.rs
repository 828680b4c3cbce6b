// ============================================================================
// depot-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// The library logs through the `log` facade; the binary decides where it
// goes. RUST_LOG wins when set, otherwise the level is `warn`, or `debug`
// with --verbose:
// - RUST_LOG=info: operation summaries (e.g. created changelist numbers)
// - RUST_LOG=debug: rendered p4 command lines and dropped options

use log::LevelFilter;

/// Initializes env_logger, writing to stderr.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None).format_target(false);

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}
