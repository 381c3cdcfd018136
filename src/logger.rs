use log::LevelFilter;

/// Initialize the logger with the specified level
///
/// Module-specific directives from RUST_LOG are parsed first, so targeted
/// filtering keeps working for debugging.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
