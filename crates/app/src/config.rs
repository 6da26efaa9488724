use std::path::PathBuf;

use storage::DEFAULT_FILE_NAME;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "AOC_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Process-level settings resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    /// The data file is always `.aoc` in the working directory; only logging
    /// is configurable, through `AOC_LOG` (e.g. `AOC_LOG=debug`).
    pub fn from_env() -> Self {
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
            log_filter,
        }
    }
}
