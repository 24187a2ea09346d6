//! Configuration for paper-vista.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

/// Default values and environment variable names.
pub mod defaults {
    use std::time::Duration;

    /// Location of the paper payload.
    pub const DATA_SOURCE: &str = "http://localhost:8080/data.json";

    /// Rows shown per page when none (or an invalid value) is selected.
    pub const ROWS_PER_PAGE: usize = 10;

    /// Connection timeout for the payload fetch.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Characters of the abstract shown before "Read More".
    pub const ABSTRACT_PREVIEW_CHARS: usize = 100;

    /// Environment variable for the data source.
    pub const ENV_DATA: &str = "PAPER_VISTA_DATA";

    /// Environment variable for rows per page.
    pub const ENV_ROWS: &str = "PAPER_VISTA_ROWS";

    /// Environment variable for the export directory.
    pub const ENV_EXPORT_DIR: &str = "PAPER_VISTA_EXPORT_DIR";

    /// Environment variable for the request timeout, in seconds.
    pub const ENV_REQUEST_TIMEOUT: &str = "PAPER_VISTA_REQUEST_TIMEOUT";
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the `{ "papers": [...] }` payload lives (URL or file path).
    pub data_source: String,

    /// Initial rows per page.
    pub rows_per_page: usize,

    /// Directory that export artifacts are written to.
    pub export_dir: PathBuf,

    /// Overall request timeout. `None` lets a stalled fetch run until the
    /// transport gives up.
    pub request_timeout: Option<Duration>,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration for the given data source.
    #[must_use]
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            rows_per_page: defaults::ROWS_PER_PAGE,
            export_dir: PathBuf::from("."),
            request_timeout: None,
            connect_timeout: defaults::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            data_source: format!("{}/data.json", base_url),
            rows_per_page: defaults::ROWS_PER_PAGE,
            export_dir: std::env::temp_dir(),
            request_timeout: Some(Duration::from_secs(5)),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let data_source =
            std::env::var(defaults::ENV_DATA).unwrap_or_else(|_| defaults::DATA_SOURCE.to_string());
        let mut config = Self::new(data_source);

        if let Ok(rows) = std::env::var(defaults::ENV_ROWS) {
            let rows: usize = rows
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer", defaults::ENV_ROWS))?;
            anyhow::ensure!(rows > 0, "{} must be a positive integer", defaults::ENV_ROWS);
            config.rows_per_page = rows;
        }

        if let Ok(dir) = std::env::var(defaults::ENV_EXPORT_DIR) {
            config.export_dir = PathBuf::from(dir);
        }

        if let Ok(secs) = std::env::var(defaults::ENV_REQUEST_TIMEOUT) {
            let secs: u64 = secs.trim().parse().with_context(|| {
                format!("{} must be a number of seconds", defaults::ENV_REQUEST_TIMEOUT)
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(defaults::DATA_SOURCE)
    }
}
