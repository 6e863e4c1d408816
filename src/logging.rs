use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CONCORDANCE_LOG";

/// Installs a stderr subscriber. `CONCORDANCE_LOG` overrides the level chosen
/// from `verbose`. A second call is a no-op.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
