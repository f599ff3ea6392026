//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a log filter.
pub const LOG_ENV: &str = "INSURECHAIN_LOG";

/// Pick the filter directive.
///
/// Precedence: `INSURECHAIN_LOG`, then the `-v` count, then the config file.
pub fn filter_directive(env: Option<String>, verbosity: u8, config_level: &str) -> String {
    if let Some(env) = env.filter(|s| !s.trim().is_empty()) {
        return env;
    }
    match verbosity {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install a compact stderr subscriber.
pub fn init_logging(verbosity: u8, config_level: &str) -> Result<(), String> {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbosity, config_level);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| format!("Invalid log filter '{}': {}", directive, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| e.to_string())
}
