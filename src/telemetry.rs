use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter directive in effect: `--verbose` forces debug, otherwise
/// `RUST_LOG` wins over the configured level.
fn build_filter(log_level: &str, verbose: bool) -> Result<EnvFilter, TelemetryError> {
    let level = if verbose { "debug" } else { log_level };
    if !verbose {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
        value: level.to_string(),
        source,
    })
}

/// Install the global subscriber. Diagnostics go to stderr so stdout only
/// carries results.
pub fn init(log_level: &str, verbose: bool) -> Result<(), TelemetryError> {
    let env_filter = build_filter(log_level, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
