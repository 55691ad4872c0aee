//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default tracing filter directive.
fn default_filter() -> String {
    "warn".to_string()
}

const fn default_ansi() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (e.g., `"info,keel_schema=trace"`).
    /// `KEEL_LOG` in the environment takes precedence at subscriber init.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Colourise output.
    #[serde(default = "default_ansi")]
    pub ansi: bool,

    /// Include the event target (module path) in each line.
    #[serde(default)]
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: default_ansi(),
            with_target: false,
        }
    }
}
