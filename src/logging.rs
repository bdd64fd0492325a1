use env_logger::{Builder, Target};

// Logs go to stderr so they never interleave with the menu on stdout.
pub fn setup_logging() {
    let mut builder = Builder::new();

    builder
        .filter(None, log::LevelFilter::Info)
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
