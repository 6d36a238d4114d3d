// src/logging.rs
use log::LevelFilter;

const WORKSPACE_TARGETS: [&str; 4] = [
    "file_indexer",
    "file_indexer_engine",
    "file_indexer_report",
    "file_indexer_shared_kernel",
];

/// Install the `env_logger` backend. `RUST_LOG` wins over the defaults.
pub fn init(debug: bool) {
    let own_level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("pdf_oxide", LevelFilter::Error)
        .filter_module("lopdf", LevelFilter::Error)
        .format_timestamp(None);
    for target in WORKSPACE_TARGETS {
        builder.filter_module(target, own_level);
    }
    builder.parse_env("RUST_LOG");
    // A second init (tests) keeps the first logger.
    let _ = builder.try_init();
}
