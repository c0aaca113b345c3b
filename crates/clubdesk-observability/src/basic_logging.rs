use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON lines; anything else is compact text.
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Build the filter directive for this workspace's crates at `level`.
pub fn filter_directive(level: &str) -> String {
    [
        "clubdesk",
        "clubdesk_access",
        "clubdesk_config",
        "clubdesk_core",
        "clubdesk_models",
    ]
    .iter()
    .map(|target| format!("{}={}", target, level))
    .collect::<Vec<_>>()
    .join(",")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info"), unless
///   `RUST_LOG` is set, which takes precedence
/// - **Format**: `LOG_FORMAT=json` for JSON lines, compact text otherwise
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_console_logging(format: LogFormat) -> bool {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&log_level)));

    let layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).try_init().is_ok()
}
