use log::LevelFilter;

/// Initialize the logger at `level`; `RUST_LOG` filters still apply on top.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .parse_default_env()
        .init();
}
