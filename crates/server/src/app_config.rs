//! Configuration loading and logging setup.

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> docsum_core::Config {
    docsum_core::config::load_dotenv();
    docsum_core::Config::from_env()
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
