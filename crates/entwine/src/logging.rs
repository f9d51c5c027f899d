use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log severity. Unset means `info`.
pub const LOG_LEVEL_ENV: &str = "ENTWINE_LOG_LEVEL";

/// Installs the global `tracing` subscriber.
///
/// The severity from `ENTWINE_LOG_LEVEL` applies to both the default target
/// and the entwine crates. Safe to call more than once; only the first call
/// installs a subscriber.
pub fn init() {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(format!("{level},entwine={level}"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
