//! mojicode CLI entry point

fn main() {
    // Structured logging, filterable via RUST_LOG, quiet info by default
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    mojicode::cli::run();
}
