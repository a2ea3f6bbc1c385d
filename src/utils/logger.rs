use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// stdout carries the enumeration itself, so every log line goes to stderr.

pub fn init_cli_logger(verbose: bool) {
    init_with_level(verbose, None);
}

/// Like [`init_cli_logger`], with a level taken from a config file
/// (`[monitoring] log_level`). `RUST_LOG` still wins over both.
pub fn init_with_level(verbose: bool, level: Option<&str>) {
    let default_directive = match (verbose, level) {
        (true, _) => "digit_enum=debug,info".to_string(),
        (false, Some(level)) => format!("digit_enum={}", level),
        (false, None) => "digit_enum=info".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("digit_enum=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
